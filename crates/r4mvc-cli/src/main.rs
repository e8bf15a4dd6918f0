//! R4Mvc generator CLI.

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use r4mvc_gen::config::SETTINGS_FILE_NAME;
use r4mvc_gen::ir::load_controllers;
use r4mvc_gen::{ControllerDefinition, Generator, Settings};

mod ui;

#[derive(Parser)]
#[command(name = "r4mvc")]
#[command(about = "R4Mvc generator - strongly-typed helpers for MVC controllers, areas, and views")]
#[command(version)]
struct Cli {
    /// Increase log output (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate helper classes and write them to disk
    Generate {
        /// Controller metadata produced by discovery (JSON)
        #[arg(short, long)]
        controllers: PathBuf,

        /// Settings file
        #[arg(short, long, default_value = SETTINGS_FILE_NAME)]
        settings: PathBuf,

        /// Output directory for the generated file
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },

    /// Validate metadata and report what would be generated
    Check {
        /// Controller metadata produced by discovery (JSON)
        #[arg(short, long)]
        controllers: PathBuf,

        /// Settings file
        #[arg(short, long, default_value = SETTINGS_FILE_NAME)]
        settings: PathBuf,
    },

    /// Print the generated file to stdout
    Print {
        /// Controller metadata produced by discovery (JSON)
        #[arg(short, long)]
        controllers: PathBuf,

        /// Settings file
        #[arg(short, long, default_value = SETTINGS_FILE_NAME)]
        settings: PathBuf,
    },
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Generate {
            controllers,
            settings,
            output,
        } => generate(&controllers, &settings, &output)?,

        Commands::Check {
            controllers,
            settings,
        } => {
            let (generator, mut controllers) = load_inputs(&controllers, &settings)?;
            let spinner = ui::spinner("Checking controller metadata...");

            match generator.generate_with_summary(&mut controllers) {
                Ok((_, summary)) => {
                    spinner.finish_and_clear();
                    ui::success("Metadata is valid");
                    ui::summary_line(summary.areas, summary.view_only_controllers, summary.total);
                }
                Err(e) => {
                    spinner.finish_and_clear();
                    ui::error("Metadata check failed");
                    return Err(e.into());
                }
            }
        }

        Commands::Print {
            controllers,
            settings,
        } => {
            let (generator, mut controllers) = load_inputs(&controllers, &settings)?;
            let output = generator.generate(&mut controllers)?;
            print!("{}", generator.render(&output));
        }
    }

    Ok(())
}

/// Installs the stderr log subscriber.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_inputs(
    controllers_path: &Path,
    settings_path: &Path,
) -> miette::Result<(Generator, Vec<ControllerDefinition>)> {
    let settings = Settings::load_or_default(settings_path)?;
    let controllers = load_controllers(controllers_path)?;
    tracing::info!(
        controllers = controllers.len(),
        settings = %settings_path.display(),
        "loaded inputs"
    );
    Ok((Generator::new(settings), controllers))
}

fn generate(controllers_path: &Path, settings_path: &Path, out_dir: &Path) -> miette::Result<()> {
    ui::print_compact_header(env!("CARGO_PKG_VERSION"));
    println!();

    let (generator, mut controllers) = load_inputs(controllers_path, settings_path)?;
    let spinner = ui::spinner("Generating helper classes...");

    let (output, summary) = match generator.generate_with_summary(&mut controllers) {
        Ok(result) => result,
        Err(e) => {
            spinner.finish_and_clear();
            ui::error("Generation failed");
            return Err(e.into());
        }
    };

    let path = out_dir.join(&generator.settings().generated_file_name);
    let written = generator.write_output(&output, &path);
    spinner.finish_and_clear();

    if written? {
        ui::success(&format!("Wrote {}", path.display()));
    } else {
        ui::info(&format!("{} is up to date", path.display()));
    }
    ui::summary_line(summary.areas, summary.view_only_controllers, summary.total);

    Ok(())
}
