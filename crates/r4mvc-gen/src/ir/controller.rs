//! Controller and view definitions.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use crate::diagnostic::GeneratorError;

/// A controller discovered in the application, or a set of views that behave
/// like one.
///
/// Identity is the `(name, area, namespace)` triple as supplied by discovery.
/// A controller without a namespace has no real backing type: it exists only so
/// its views can be referenced, and the generator synthesizes a placeholder
/// class for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControllerDefinition {
    /// Controller name without the `Controller` suffix (e.g. `Users`).
    pub name: String,

    /// Namespace of the real controller type. `None` or empty means view-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Area the controller belongs to. Empty is the root area.
    #[serde(default)]
    pub area: String,

    /// Views discovered for this controller.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub views: Vec<ViewDefinition>,

    /// Source files declaring the controller.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub file_paths: Vec<PathBuf>,

    /// Resolved name of the generated type, written back by the naming stage.
    #[serde(
        default,
        rename = "fullyQualifiedGeneratedName",
        skip_serializing_if = "Option::is_none"
    )]
    generated_name: Option<String>,
}

/// A view file reachable through a controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewDefinition {
    /// View name as referenced from code (e.g. `Index`).
    pub name: String,

    /// Application-relative path of the view file (e.g. `~/Views/Shared/Index.cshtml`).
    pub relative_path: String,
}

impl ViewDefinition {
    pub fn new(name: impl Into<String>, relative_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            relative_path: relative_path.into(),
        }
    }
}

impl ControllerDefinition {
    /// Creates a root-area, view-only controller.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.area = area.into();
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_view(mut self, view: ViewDefinition) -> Self {
        self.views.push(view);
        self
    }

    /// The namespace of the backing controller, if there is one.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref().filter(|ns| !ns.is_empty())
    }

    /// True when no application controller backs this definition.
    pub fn is_view_only(&self) -> bool {
        self.namespace().is_none()
    }

    /// True when the controller lives in the default (root) area.
    pub fn is_root_area(&self) -> bool {
        self.area.is_empty()
    }

    /// Fully-qualified name of the type generated for this controller.
    ///
    /// Returns the resolved name when the naming stage has run. Otherwise a
    /// controller with a real backing type defaults to `<Namespace>.<Name>Controller`
    /// and a view-only controller has no name yet.
    pub fn fully_qualified_generated_name(&self) -> Option<String> {
        if let Some(ref resolved) = self.generated_name {
            return Some(resolved.clone());
        }
        self.namespace()
            .map(|ns| format!("{}.{}Controller", ns, self.name))
    }

    /// Records the resolved generated type name.
    pub fn set_fully_qualified_generated_name(&mut self, name: impl Into<String>) {
        self.generated_name = Some(name.into());
    }
}

/// Controllers grouped by area, keyed by area name in ordinal order.
///
/// The root area is keyed by the empty string and therefore sorts first.
pub type AreaGroups<'a> = BTreeMap<&'a str, Vec<&'a ControllerDefinition>>;

/// Groups controllers by area without copying them.
pub fn group_by_area(controllers: &[ControllerDefinition]) -> AreaGroups<'_> {
    let mut groups: AreaGroups<'_> = BTreeMap::new();
    for controller in controllers {
        groups.entry(controller.area.as_str()).or_default().push(controller);
    }
    groups
}

/// Loads controller metadata from a JSON document produced by discovery.
pub fn load_controllers(path: &Path) -> Result<Vec<ControllerDefinition>, GeneratorError> {
    let content = std::fs::read_to_string(path).map_err(|e| GeneratorError::IoError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    serde_json::from_str(&content).map_err(|e| GeneratorError::InvalidMetadata {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_view_only_detection() {
        assert!(ControllerDefinition::new("Shared").is_view_only());
        assert!(ControllerDefinition::new("Shared").with_namespace("").is_view_only());
        assert!(!ControllerDefinition::new("Shared").with_namespace("Project").is_view_only());
    }

    #[test]
    fn test_default_generated_name() {
        let regular = ControllerDefinition::new("Home").with_namespace("Project.Controllers");
        assert_eq!(
            regular.fully_qualified_generated_name().as_deref(),
            Some("Project.Controllers.HomeController")
        );

        let view_only = ControllerDefinition::new("Shared");
        assert_eq!(view_only.fully_qualified_generated_name(), None);
    }

    #[test]
    fn test_resolved_name_overrides_default() {
        let mut controller = ControllerDefinition::new("Home").with_namespace("Project");
        controller.set_fully_qualified_generated_name("Other.HomeController");
        assert_eq!(
            controller.fully_qualified_generated_name().as_deref(),
            Some("Other.HomeController")
        );
    }

    #[test]
    fn test_group_by_area() {
        let controllers = vec![
            ControllerDefinition::new("Users").with_area("Admin"),
            ControllerDefinition::new("Shared").with_area("Admin"),
            ControllerDefinition::new("Shared"),
        ];

        let groups = group_by_area(&controllers);
        let keys: Vec<_> = groups.keys().copied().collect();
        assert_eq!(keys, vec!["", "Admin"]);
        assert_eq!(groups["Admin"].len(), 2);
        assert_eq!(groups[""].len(), 1);
    }

    #[test]
    fn test_load_controllers() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("controllers.json");
        std::fs::write(
            &path,
            r#"[
                { "name": "Shared" },
                { "name": "Users", "area": "Admin", "namespace": "Project.Areas.Admin",
                  "views": [{ "name": "Index", "relativePath": "~/Areas/Admin/Views/Users/Index.cshtml" }] }
            ]"#,
        )
        .unwrap();

        let controllers = load_controllers(&path).unwrap();
        assert_eq!(controllers.len(), 2);
        assert!(controllers[0].is_view_only());
        assert!(controllers[0].is_root_area());
        assert_eq!(controllers[1].area, "Admin");
        assert_eq!(controllers[1].views[0].name, "Index");
    }

    #[test]
    fn test_load_controllers_rejects_malformed_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("controllers.json");
        std::fs::write(&path, r#"{ "name": "Shared" }"#).unwrap();

        let err = load_controllers(&path).unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidMetadata { .. }));
    }

    #[test]
    fn test_load_controllers_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_controllers(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, GeneratorError::IoError { .. }));
    }
}
