//! Canonical names for generated classes.

use crate::config::Settings;
use crate::ir::ControllerDefinition;

/// Class name of a view-only placeholder controller.
///
/// Root-area controllers become `<Name>Controller`; area controllers are
/// prefixed so they cannot clash with root ones: `<Area>Area_<Name>Controller`.
pub fn view_only_class_name(area: &str, name: &str) -> String {
    if area.is_empty() {
        format!("{}Controller", name)
    } else {
        format!("{}Area_{}Controller", area, name)
    }
}

/// Class name of an area grouping class: `<Area>AreaClass`.
pub fn area_class_name(area: &str) -> String {
    format!("{}AreaClass", area)
}

/// Computes the fully-qualified generated name without recording it.
///
/// View-only controllers live under the generated namespace. Controllers with
/// a real backing type keep their generated partial next to the original,
/// in the controller's own namespace.
pub fn generated_name_for(controller: &ControllerDefinition, settings: &Settings) -> String {
    match controller.namespace() {
        Some(namespace) => format!("{}.{}Controller", namespace, controller.name),
        None => format!(
            "{}.{}",
            settings.generated_namespace,
            view_only_class_name(&controller.area, &controller.name)
        ),
    }
}

/// Resolves the controller's generated name and writes it back onto the controller.
///
/// Idempotent: resolving twice yields the same name.
pub fn resolve_generated_name(controller: &mut ControllerDefinition, settings: &Settings) -> String {
    let name = generated_name_for(controller, settings);
    tracing::debug!(controller = %controller.name, area = %controller.area, %name, "resolved generated name");
    controller.set_fully_qualified_generated_name(name.clone());
    name
}
