//! The static helpers class (`MVC` by default).

use crate::config::Settings;
use crate::ir::AreaGroups;
use crate::syntax::{ClassBuilder, ClassDefinition, Modifier};
use super::areas::controller_fields;
use super::naming::area_class_name;

/// Creates the static entry point: one field per named area, then one field
/// per root-area controller.
///
/// A root controller named like an area would collide with the area field
/// and is skipped. So is any area or root controller named like the helpers
/// class itself, since a member cannot share its enclosing type's name.
pub fn create_helpers_class(groups: &AreaGroups<'_>, settings: &Settings) -> ClassDefinition {
    let field_modifiers = [Modifier::Public, Modifier::Static, Modifier::Readonly];

    let mut builder = ClassBuilder::new(settings.helpers_prefix.as_str())
        .with_generated_attributes()
        .with_modifiers(&[Modifier::Public, Modifier::Static, Modifier::Partial]);

    for area in groups.keys().filter(|a| !a.is_empty()) {
        if **area == settings.helpers_prefix {
            tracing::warn!(area = %area, "area shares its name with the helpers class; not exposed");
            continue;
        }
        builder = builder.with_new_field(area, &area_class_name(area), &field_modifiers);
    }

    if let Some(root) = groups.get("") {
        for (name, type_name) in controller_fields(root) {
            if groups.contains_key(name) {
                tracing::warn!(
                    controller = %name,
                    "root controller shares its name with an area; not exposed on {}",
                    settings.helpers_prefix
                );
                continue;
            }
            if name == settings.helpers_prefix {
                tracing::warn!(controller = %name, "root controller shares its name with the helpers class; not exposed");
                continue;
            }
            builder = builder.with_new_field(name, &type_name, &field_modifiers);
        }
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{group_by_area, ControllerDefinition};
    use crate::syntax::Initializer;

    #[test]
    fn test_areas_then_root_controllers() {
        let controllers = vec![
            ControllerDefinition::new("Home").with_namespace("Project"),
            ControllerDefinition::new("Users").with_area("Admin").with_namespace("Project.Admin"),
            ControllerDefinition::new("Account").with_namespace("Project"),
        ];
        let class = create_helpers_class(&group_by_area(&controllers), &Settings::default());

        assert_eq!(class.identifier().value(), "MVC");
        assert!(class.is(&[Modifier::Public, Modifier::Static, Modifier::Partial]));
        let fields: Vec<_> = class.fields().collect();
        let names: Vec<_> = fields.iter().map(|f| f.name.value()).collect();
        assert_eq!(names, vec!["Admin", "Account", "Home"]);
        assert_eq!(fields[0].type_name, "AdminAreaClass");
        assert_eq!(
            fields[2].initializer,
            Some(Initializer::New("Project.HomeController".to_string()))
        );
    }

    #[test]
    fn test_custom_prefix() {
        let settings = Settings {
            helpers_prefix: "Links".to_string(),
            ..Settings::default()
        };
        let class = create_helpers_class(&group_by_area(&[]), &settings);
        assert_eq!(class.identifier().value(), "Links");
        assert_eq!(class.fields().count(), 0);
    }

    #[test]
    fn test_root_controller_clashing_with_area_is_skipped() {
        let controllers = vec![
            ControllerDefinition::new("Admin").with_namespace("Project"),
            ControllerDefinition::new("Users").with_area("Admin").with_namespace("Project.Admin"),
        ];
        let class = create_helpers_class(&group_by_area(&controllers), &Settings::default());
        let names: Vec<_> = class.fields().map(|f| f.name.value()).collect();
        assert_eq!(names, vec!["Admin"]);
        assert_eq!(class.fields().next().map(|f| f.type_name.as_str()), Some("AdminAreaClass"));
    }

    #[test]
    fn test_members_named_like_helpers_class_are_skipped() {
        let root_only = vec![
            ControllerDefinition::new("MVC").with_namespace("Project"),
            ControllerDefinition::new("Home").with_namespace("Project"),
        ];
        let class = create_helpers_class(&group_by_area(&root_only), &Settings::default());
        let names: Vec<_> = class.fields().map(|f| f.name.value()).collect();
        assert_eq!(names, vec!["Home"]);

        let with_area = vec![
            ControllerDefinition::new("Home").with_namespace("Project"),
            ControllerDefinition::new("Users").with_area("MVC").with_namespace("Project.Mvc"),
        ];
        let class = create_helpers_class(&group_by_area(&with_area), &Settings::default());
        let names: Vec<_> = class.fields().map(|f| f.name.value()).collect();
        assert_eq!(names, vec!["Home"]);
    }
}
