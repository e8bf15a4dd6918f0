//! Fixed wrapper classes that let any action result carry route metadata.
//!
//! Generated action proxies return one of these so callers can inspect the
//! area, controller, action, and protocol of a call without knowing the
//! concrete result type. Both classes are independent of the metadata model
//! and identical on every run.

use crate::syntax::{ClassBuilder, ClassDefinition, Constructor, Modifier, Parameter, Statement};

/// Identifier of the `ActionResult` wrapper.
pub const ACTION_RESULT_CLASS: &str = "R4Mvc_Microsoft_AspNetCore_Mvc_ActionResult";

/// Identifier of the `JsonResult` wrapper.
pub const JSON_RESULT_CLASS: &str = "R4Mvc_Microsoft_AspNetCore_Mvc_JsonResult";

/// Interface exposing the uniform route metadata.
pub const ACTION_RESULT_INTERFACE: &str = "IR4MvcActionResult";

/// Extension method on the interface that stores the route values.
const INIT_METHOD: &str = "InitMVCT4Result";

/// `internal partial class R4Mvc_..._ActionResult : ActionResult, IR4MvcActionResult`.
pub fn action_result_class() -> ClassDefinition {
    result_wrapper_class(ACTION_RESULT_CLASS, "ActionResult", None)
}

/// `internal partial class R4Mvc_..._JsonResult : JsonResult, IR4MvcActionResult`.
///
/// `JsonResult` has no parameterless constructor, so this one chains `: base(null)`.
pub fn json_result_class() -> ClassDefinition {
    result_wrapper_class(JSON_RESULT_CLASS, "JsonResult", Some(&["null"]))
}

fn result_wrapper_class(
    identifier: &str,
    framework_base: &str,
    base_arguments: Option<&[&str]>,
) -> ClassDefinition {
    let mut constructor = Constructor::new(&[Modifier::Public])
        .with_parameter(Parameter::new("area", "string"))
        .with_parameter(Parameter::new("controller", "string"))
        .with_parameter(Parameter::new("action", "string"))
        .with_parameter(Parameter::new("protocol", "string").defaults_to_null())
        .with_statement(Statement::Invoke {
            receiver: "this".to_string(),
            method: INIT_METHOD.to_string(),
            arguments: ["area", "controller", "action", "protocol"]
                .iter()
                .map(|a| a.to_string())
                .collect(),
        });
    if let Some(arguments) = base_arguments {
        constructor = constructor.with_base_arguments(arguments);
    }

    ClassBuilder::new(identifier)
        .with_generated_attributes()
        .with_modifiers(&[Modifier::Internal, Modifier::Partial])
        .with_base_types(&[framework_base, ACTION_RESULT_INTERFACE])
        .with_constructor(constructor)
        .with_auto_property("Controller", "string", &[Modifier::Public])
        .with_auto_property("Action", "string", &[Modifier::Public])
        .with_auto_property("Protocol", "string", &[Modifier::Public])
        .with_auto_property("RouteValueDictionary", "RouteValueDictionary", &[Modifier::Public])
        .build()
}
