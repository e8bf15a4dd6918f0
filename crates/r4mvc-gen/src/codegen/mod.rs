//! Class synthesis from controller metadata.
//!
//! Each stage is a plain function from metadata to [`ClassDefinition`]s:
//! - Naming: canonical identifiers and generated type names
//! - View-only controllers: placeholders for views with no backing controller
//! - Areas: one grouping class per named area
//! - Helpers: the static entry point exposing areas and root controllers
//! - Action results: two fixed wrapper classes
//!
//! Stages never fail. Output order is a pure function of the input so the
//! generated file diffs cleanly.
//!
//! [`ClassDefinition`]: crate::syntax::ClassDefinition

pub mod naming;
mod view_only;
mod areas;
mod helpers;
mod action_results;

pub use action_results::{
    action_result_class, json_result_class, ACTION_RESULT_CLASS, ACTION_RESULT_INTERFACE,
    JSON_RESULT_CLASS,
};
pub use areas::create_area_classes;
pub use helpers::create_helpers_class;
pub use view_only::create_view_only_controller_classes;
