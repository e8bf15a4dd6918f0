//! Generator configuration.

use std::path::Path;
use serde::{Deserialize, Serialize};

use crate::diagnostic::GeneratorError;

/// Namespace used for generated classes when none is configured.
pub const DEFAULT_GENERATED_NAMESPACE: &str = "R4Mvc";

/// Name of the static helpers class when none is configured.
pub const DEFAULT_HELPERS_PREFIX: &str = "MVC";

/// Conventional settings file name, looked up next to the project.
pub const SETTINGS_FILE_NAME: &str = "r4mvc.json";

/// Settings for one generator run.
///
/// Loaded from `r4mvc.json` when present; every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Root namespace for every synthesized class.
    pub generated_namespace: String,

    /// Name of the static class exposing areas and root controllers.
    pub helpers_prefix: String,

    /// Compiler warnings suppressed in the generated file.
    pub pragma_codes: Vec<String>,

    /// `using` directives emitted at the top of the generated file.
    pub referenced_namespaces: Vec<String>,

    /// File name of the generated compilation unit.
    pub generated_file_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            generated_namespace: DEFAULT_GENERATED_NAMESPACE.to_string(),
            helpers_prefix: DEFAULT_HELPERS_PREFIX.to_string(),
            pragma_codes: ["1591", "3008", "3009", "0108"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
            referenced_namespaces: [
                "Microsoft.AspNetCore.Mvc",
                "Microsoft.AspNetCore.Routing",
                "R4Mvc",
                "System.CodeDom.Compiler",
                "System.Diagnostics",
            ]
            .iter()
            .map(|ns| ns.to_string())
            .collect(),
            generated_file_name: "R4Mvc.generated.cs".to_string(),
        }
    }
}

impl Settings {
    /// Default settings with a different root namespace.
    pub fn with_namespace(namespace: impl Into<String>) -> Self {
        Self {
            generated_namespace: namespace.into(),
            ..Self::default()
        }
        .normalized()
    }

    /// Replaces a blank namespace or helpers prefix with its default.
    ///
    /// An explicitly blank value behaves like an unset one.
    pub fn normalized(mut self) -> Self {
        if self.generated_namespace.trim().is_empty() {
            self.generated_namespace = DEFAULT_GENERATED_NAMESPACE.to_string();
        }
        if self.helpers_prefix.trim().is_empty() {
            self.helpers_prefix = DEFAULT_HELPERS_PREFIX.to_string();
        }
        self
    }

    /// Load settings from disk.
    ///
    /// Returns `Ok(None)` if the file doesn't exist.
    pub fn load(path: &Path) -> Result<Option<Self>, GeneratorError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|e| GeneratorError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let settings: Self =
            serde_json::from_str(&content).map_err(|e| GeneratorError::InvalidSettings {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        Ok(Some(settings.normalized()))
    }

    /// Load settings from disk, falling back to defaults when the file is absent.
    pub fn load_or_default(path: &Path) -> Result<Self, GeneratorError> {
        Ok(Self::load(path)?.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.generated_namespace, "R4Mvc");
        assert_eq!(settings.helpers_prefix, "MVC");
        assert_eq!(settings.generated_file_name, "R4Mvc.generated.cs");
    }

    #[test]
    fn test_load_nonexistent() {
        let dir = TempDir::new().unwrap();
        let result = Settings::load(&dir.path().join(SETTINGS_FILE_NAME)).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        std::fs::write(&path, r#"{ "generatedNamespace": "Project.R4" }"#).unwrap();

        let settings = Settings::load_or_default(&path).unwrap();
        assert_eq!(settings.generated_namespace, "Project.R4");
        assert_eq!(settings.helpers_prefix, "MVC");
        assert_eq!(settings.pragma_codes, Settings::default().pragma_codes);
    }

    #[test]
    fn test_blank_namespace_falls_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        std::fs::write(&path, r#"{ "generatedNamespace": "  " }"#).unwrap();

        let settings = Settings::load_or_default(&path).unwrap();
        assert_eq!(settings.generated_namespace, DEFAULT_GENERATED_NAMESPACE);
    }

    #[test]
    fn test_blank_values_fall_back_without_a_file() {
        let settings = Settings::with_namespace("");
        assert_eq!(settings.generated_namespace, DEFAULT_GENERATED_NAMESPACE);

        let settings = Settings {
            generated_namespace: " ".to_string(),
            helpers_prefix: String::new(),
            ..Settings::default()
        }
        .normalized();
        assert_eq!(settings.generated_namespace, DEFAULT_GENERATED_NAMESPACE);
        assert_eq!(settings.helpers_prefix, DEFAULT_HELPERS_PREFIX);
    }

    #[test]
    fn test_invalid_settings() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        std::fs::write(&path, "not json").unwrap();

        let err = Settings::load(&path).unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidSettings { .. }));
    }
}
