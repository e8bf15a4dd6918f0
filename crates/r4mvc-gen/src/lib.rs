//! # R4Mvc Generator
//!
//! This crate turns discovered MVC metadata (controllers, areas, views) into
//! the helper classes that let application code reference controllers,
//! actions, and views through typed members instead of string literals.
//!
//! ## Architecture
//!
//! ```text
//! Discovery output (JSON)
//!        │
//!        ▼
//! ┌──────────────┐
//! │      IR      │  ControllerDefinition / ViewDefinition
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │   Validate   │  Fail fast on malformed metadata
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │   Codegen    │  Naming, view-only controllers, areas,
//! │ (IR → Class) │  helpers class, action-result wrappers
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │    Render    │  ClassDefinition → C# text
//! └──────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use r4mvc_gen::{Generator, Settings};
//!
//! let mut controllers = r4mvc_gen::ir::load_controllers("controllers.json".as_ref())?;
//! let generator = Generator::new(Settings::default());
//! let output = generator.generate(&mut controllers)?;
//! generator.write_output(&output, "obj/R4Mvc.generated.cs".as_ref())?;
//! ```

pub mod config;
pub mod ir;
pub mod syntax;
pub mod validate;
pub mod codegen;
pub mod render;
pub mod diagnostic;

use std::path::Path;

pub use config::Settings;
pub use diagnostic::GeneratorError;
pub use ir::{ControllerDefinition, ViewDefinition};
pub use syntax::ClassDefinition;

/// Runs the synthesis stages over one controller collection.
///
/// Holds only settings; every call to [`Generator::generate`] is independent.
pub struct Generator {
    settings: Settings,
}

/// Everything generated in one run, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutput {
    /// Namespace the classes are emitted into.
    pub namespace: String,
    /// Helpers class, area classes, view-only controllers, then the two result wrappers.
    pub classes: Vec<ClassDefinition>,
}

/// Counts of generated classes by kind.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GenerationSummary {
    pub areas: usize,
    pub view_only_controllers: usize,
    pub total: usize,
}

impl Generator {
    /// Creates a generator with the given settings.
    ///
    /// Blank namespace or helpers prefix values fall back to their defaults.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: settings.normalized(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Generates all helper classes for the given controllers.
    ///
    /// This runs the full pipeline:
    /// 1. Validate metadata
    /// 2. Synthesize view-only controllers (resolves their generated names)
    /// 3. Group controllers by area and synthesize area classes
    /// 4. Synthesize the helpers class
    /// 5. Append the fixed action-result wrappers
    /// 6. Check identifiers are unique
    ///
    /// The only change made to `controllers` is recording each view-only
    /// controller's fully-qualified generated name.
    pub fn generate(
        &self,
        controllers: &mut [ControllerDefinition],
    ) -> Result<GenerationOutput, GeneratorError> {
        Ok(self.generate_with_summary(controllers)?.0)
    }

    /// Like [`Generator::generate`], also returning class counts.
    pub fn generate_with_summary(
        &self,
        controllers: &mut [ControllerDefinition],
    ) -> Result<(GenerationOutput, GenerationSummary), GeneratorError> {
        // Phase 1: Validate
        validate::validate_controllers(controllers)?;

        // Phase 2: View-only controllers, which also resolves names
        let view_only = codegen::create_view_only_controller_classes(controllers, &self.settings);

        // Phase 3: Areas
        let groups = ir::group_by_area(controllers);
        let areas = codegen::create_area_classes(&groups);

        // Phase 4: Helpers class
        let helpers = codegen::create_helpers_class(&groups, &self.settings);

        let summary = GenerationSummary {
            areas: areas.len(),
            view_only_controllers: view_only.len(),
            total: 1 + areas.len() + view_only.len() + 2,
        };

        // Phase 5: Assemble in emission order
        let mut classes = Vec::with_capacity(summary.total);
        classes.push(helpers);
        classes.extend(areas);
        classes.extend(view_only);
        classes.push(codegen::action_result_class());
        classes.push(codegen::json_result_class());

        // Phase 6: Identifiers must be unique
        validate::validate_unique_classes(&self.settings.generated_namespace, &classes)?;

        tracing::info!(
            controllers = controllers.len(),
            classes = classes.len(),
            namespace = %self.settings.generated_namespace,
            "generation complete"
        );

        Ok((
            GenerationOutput {
                namespace: self.settings.generated_namespace.clone(),
                classes,
            },
            summary,
        ))
    }

    /// Renders generated classes to C# text.
    pub fn render(&self, output: &GenerationOutput) -> String {
        render::render_file(output, &self.settings)
    }

    /// Renders and writes the generated file.
    ///
    /// Returns `false` without touching the file when it already holds the
    /// same content.
    pub fn write_output(
        &self,
        output: &GenerationOutput,
        path: &Path,
    ) -> Result<bool, GeneratorError> {
        let content = self.render(output);

        match std::fs::read_to_string(path) {
            Ok(existing) if existing == content => {
                tracing::debug!(path = %path.display(), "generated file unchanged");
                return Ok(false);
            }
            Ok(_) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(GeneratorError::io(path, e.to_string())),
        }

        // Ensure parent directory exists
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| GeneratorError::IoError {
                path: parent.to_path_buf(),
                message: e.to_string(),
            })?;
        }

        std::fs::write(path, content).map_err(|e| GeneratorError::io(path, e.to_string()))?;

        tracing::info!(path = %path.display(), "wrote generated file");
        Ok(true)
    }
}
