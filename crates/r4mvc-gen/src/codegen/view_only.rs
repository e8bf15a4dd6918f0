//! Placeholder classes for controllers that exist only through their views.

use std::collections::{BTreeMap, HashSet};

use crate::config::Settings;
use crate::ir::ControllerDefinition;
use crate::syntax::{ClassBuilder, ClassDefinition, Modifier};
use super::naming::{resolve_generated_name, view_only_class_name};

/// Creates one placeholder class per distinct `(area, name)` among view-only
/// controllers.
///
/// Every view-only controller gets its generated name resolved and recorded;
/// controllers with a real backing type are left untouched. Classes come out
/// with named areas first (ascending), the root area last, and controller
/// names ascending within an area. When the same controller was discovered
/// twice the first one wins.
pub fn create_view_only_controller_classes(
    controllers: &mut [ControllerDefinition],
    settings: &Settings,
) -> Vec<ClassDefinition> {
    for controller in controllers.iter_mut().filter(|c| c.is_view_only()) {
        resolve_generated_name(controller, settings);
    }

    let mut candidates: Vec<&ControllerDefinition> =
        controllers.iter().filter(|c| c.is_view_only()).collect();

    // Stable sort, so equal keys keep discovery order for the dedup below.
    candidates.sort_by(|a, b| {
        (a.is_root_area(), &a.area, &a.name).cmp(&(b.is_root_area(), &b.area, &b.name))
    });

    let mut seen = HashSet::new();
    let classes: Vec<ClassDefinition> = candidates
        .into_iter()
        .filter(|&c| seen.insert((c.area.as_str(), c.name.as_str())))
        .map(view_only_class)
        .collect();

    tracing::info!(count = classes.len(), "synthesized view-only controller classes");
    classes
}

fn view_only_class(controller: &ControllerDefinition) -> ClassDefinition {
    let identifier = view_only_class_name(&controller.area, &controller.name);
    tracing::debug!(class = %identifier, views = controller.views.len(), "view-only controller");

    // First path seen per view name, ordered by name.
    let mut views: BTreeMap<&str, &str> = BTreeMap::new();
    for view in &controller.views {
        views.entry(view.name.as_str()).or_insert(view.relative_path.as_str());
    }

    views.into_iter().fold(
        ClassBuilder::new(identifier)
            .with_generated_attributes()
            .with_modifiers(&[Modifier::Public, Modifier::Partial]),
        |builder, (name, path)| {
            builder.with_string_field(name, path, &[Modifier::Public, Modifier::Readonly])
        },
    )
    .build()
}
