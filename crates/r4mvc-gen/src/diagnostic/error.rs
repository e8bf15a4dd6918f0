//! Generator error types.
#![allow(unused_assignments)]

use std::path::PathBuf;
use miette::Diagnostic;
use thiserror::Error;

/// Errors that can occur while loading metadata or producing generated code.
///
/// The synthesis stages themselves never fail; every variant here comes from
/// metadata validation, the loaders, or the file writer.
#[allow(unused_assignments)]
#[derive(Error, Diagnostic, Debug)]
pub enum GeneratorError {
    // =========================================================================
    // IO Errors
    // =========================================================================
    #[error("Failed to access file '{}': {message}", path.display())]
    #[diagnostic(code(r4mvc::io::access_failed))]
    IoError {
        path: PathBuf,
        message: String,
    },

    // =========================================================================
    // Input Errors
    // =========================================================================
    #[error("Invalid settings file '{}': {message}", path.display())]
    #[diagnostic(
        code(r4mvc::settings::invalid),
        help("Settings are a JSON object, e.g. {{ \"generatedNamespace\": \"R4Mvc\" }}")
    )]
    InvalidSettings {
        path: PathBuf,
        message: String,
    },

    #[error("Invalid controller metadata '{}': {message}", path.display())]
    #[diagnostic(
        code(r4mvc::metadata::invalid),
        help("Controller metadata is a JSON array of {{ \"name\", \"namespace\", \"area\", \"views\" }} objects")
    )]
    InvalidMetadata {
        path: PathBuf,
        message: String,
    },

    // =========================================================================
    // Metadata Contract Errors
    // =========================================================================
    #[error("Controller #{index} has no name (area: '{area}')")]
    #[diagnostic(
        code(r4mvc::metadata::missing_name),
        help("Every discovered controller must carry a non-empty name")
    )]
    MissingControllerName {
        index: usize,
        area: String,
    },

    #[error("Class '{identifier}' would be generated twice in namespace '{namespace}'")]
    #[diagnostic(
        code(r4mvc::codegen::duplicate_class),
        help("Two areas or controllers resolve to the same generated class name")
    )]
    DuplicateClass {
        identifier: String,
        namespace: String,
    },
}

impl GeneratorError {
    /// Creates an IO error.
    pub fn io(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::IoError {
            path: path.into(),
            message: message.into(),
        }
    }
}
