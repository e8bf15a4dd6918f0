//! Controller metadata consumed by the generator.
//!
//! This model is produced by a discovery step outside this crate (static
//! analysis of the MVC application) and handed in per run. The generator only
//! reads it, apart from resolving each controller's generated type name.

mod controller;

pub use controller::{
    group_by_area, load_controllers, AreaGroups, ControllerDefinition, ViewDefinition,
};
