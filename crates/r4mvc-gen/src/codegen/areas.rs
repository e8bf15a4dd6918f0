//! Area grouping classes.

use std::collections::BTreeMap;

use crate::ir::{AreaGroups, ControllerDefinition};
use crate::syntax::{ClassBuilder, ClassDefinition, Modifier};
use super::naming::area_class_name;

/// Creates one `<Area>AreaClass` per named area, in ascending area order.
///
/// The root area never gets a class. Each class exposes the area name and one
/// field per distinct controller in the area, typed by the controller's
/// generated name. Controllers whose generated name is still unresolved are
/// left out, as is a controller named `Name`, which would clash with the
/// area name field.
pub fn create_area_classes(groups: &AreaGroups<'_>) -> Vec<ClassDefinition> {
    let classes: Vec<ClassDefinition> = groups
        .iter()
        .filter(|(area, _)| !area.is_empty())
        .map(|(area, controllers)| area_class(area, controllers))
        .collect();

    tracing::info!(count = classes.len(), "synthesized area classes");
    classes
}

/// Field holding the area name on every area class.
const AREA_NAME_FIELD: &str = "Name";

fn area_class(area: &str, controllers: &[&ControllerDefinition]) -> ClassDefinition {
    let identifier = area_class_name(area);
    tracing::debug!(class = %identifier, controllers = controllers.len(), "area class");

    let mut builder = ClassBuilder::new(identifier)
        .with_generated_attributes()
        .with_modifiers(&[Modifier::Public, Modifier::Partial])
        .with_string_field(AREA_NAME_FIELD, area, &[Modifier::Public, Modifier::Readonly]);

    for (name, type_name) in controller_fields(controllers) {
        if name == AREA_NAME_FIELD {
            tracing::warn!(
                controller = %name,
                area = %area,
                "controller name clashes with the area name field; not exposed on the area class"
            );
            continue;
        }
        builder = builder.with_new_field(name, &type_name, &[Modifier::Public, Modifier::Readonly]);
    }

    builder.build()
}

/// Distinct controller names with their generated type, ordered by name.
///
/// When a view-only stand-in and a controller with a real backing type share a
/// name, the backed controller wins regardless of discovery order.
pub(super) fn controller_fields<'a>(
    controllers: &[&'a ControllerDefinition],
) -> BTreeMap<&'a str, String> {
    let mut fields: BTreeMap<&'a str, (bool, String)> = BTreeMap::new();
    for &controller in controllers {
        let backed = !controller.is_view_only();
        if let Some((existing_backed, _)) = fields.get(controller.name.as_str()) {
            if *existing_backed || !backed {
                continue;
            }
        }
        match controller.fully_qualified_generated_name() {
            Some(type_name) => {
                fields.insert(controller.name.as_str(), (backed, type_name));
            }
            None => {
                tracing::debug!(controller = %controller.name, "skipping controller with unresolved name");
            }
        }
    }
    fields
        .into_iter()
        .map(|(name, (_, type_name))| (name, type_name))
        .collect()
}
