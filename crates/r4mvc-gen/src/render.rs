//! C# printer for synthesized classes.
//!
//! Produces one compilation unit holding every generated class. The output is
//! a pure function of its input: identical definitions always print to
//! identical bytes.

use std::collections::BTreeSet;

use crate::config::Settings;
use crate::syntax::{
    Attribute, ClassDefinition, Constructor, Field, Initializer, Member, Modifier, Property,
    Statement,
};
use crate::GenerationOutput;

const INDENT: &str = "    ";

const HEADER: &str = "\
// <auto-generated />
// This file was generated by R4Mvc.
// Don't change it directly as your change would get overwritten. Instead, make changes
// to the r4mvc.json file (i.e. the settings file), save it and run the generator tool again.
";

/// Renders the complete generated file.
pub fn render_file(output: &GenerationOutput, settings: &Settings) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');

    let pragma = settings.pragma_codes.join(", ");
    if !pragma.is_empty() {
        out.push_str(&format!("#pragma warning disable {}\n", pragma));
    }

    let usings: BTreeSet<&str> = settings
        .referenced_namespaces
        .iter()
        .map(|ns| ns.as_str())
        .filter(|ns| !ns.is_empty())
        .collect();
    for namespace in &usings {
        out.push_str(&format!("using {};\n", namespace));
    }
    if !usings.is_empty() || !pragma.is_empty() {
        out.push('\n');
    }

    out.push_str(&format!("namespace {}\n{{\n", output.namespace));
    for (i, class) in output.classes.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        render_class(&mut out, class, 1);
    }
    out.push_str("}\n");

    if !pragma.is_empty() {
        out.push_str(&format!("#pragma warning restore {}\n", pragma));
    }

    out
}

/// Renders a single class at the given indentation depth.
pub fn render_class(out: &mut String, class: &ClassDefinition, depth: usize) {
    let pad = INDENT.repeat(depth);

    if !class.attributes().is_empty() {
        let attributes: Vec<String> = class.attributes().iter().map(format_attribute).collect();
        out.push_str(&format!("{}[{}]\n", pad, attributes.join(", ")));
    }

    let mut declaration = format!("{}{}class {}", pad, modifiers_prefix(class.modifiers()), class.identifier());
    if !class.base_types().is_empty() {
        let bases: Vec<&str> = class.base_types().iter().map(|t| t.name()).collect();
        declaration.push_str(&format!(" : {}", bases.join(", ")));
    }
    out.push_str(&declaration);
    out.push('\n');
    out.push_str(&format!("{}{{\n", pad));

    let member_pad = INDENT.repeat(depth + 1);
    let mut previous: Option<&Member> = None;
    for member in class.members() {
        // Blank line between groups of different member kinds, and around constructors.
        if let Some(prev) = previous {
            let same_kind = std::mem::discriminant(prev) == std::mem::discriminant(member);
            if !same_kind || matches!(member, Member::Constructor(_)) {
                out.push('\n');
            }
        }
        match member {
            Member::Field(field) => render_field(out, field, &member_pad),
            Member::Property(property) => render_property(out, property, &member_pad),
            Member::Constructor(constructor) => {
                render_constructor(out, constructor, class.identifier().value(), &member_pad)
            }
        }
        previous = Some(member);
    }

    out.push_str(&format!("{}}}\n", pad));
}

fn render_field(out: &mut String, field: &Field, pad: &str) {
    let initializer = match &field.initializer {
        Some(Initializer::StringLiteral(value)) => format!(" = {}", string_literal(value)),
        Some(Initializer::New(type_name)) => format!(" = new {}()", type_name),
        None => String::new(),
    };
    out.push_str(&format!(
        "{}{}{} {}{};\n",
        pad,
        modifiers_prefix(&field.modifiers),
        field.type_name,
        field.name,
        initializer
    ));
}

fn render_property(out: &mut String, property: &Property, pad: &str) {
    out.push_str(&format!(
        "{}{}{} {} {{ get; set; }}\n",
        pad,
        modifiers_prefix(&property.modifiers),
        property.type_name,
        property.name
    ));
}

fn render_constructor(out: &mut String, constructor: &Constructor, class_name: &str, pad: &str) {
    let parameters: Vec<String> = constructor
        .parameters
        .iter()
        .map(|p| match &p.default {
            Some(default) => format!("{} {} = {}", p.type_name, p.name, default),
            None => format!("{} {}", p.type_name, p.name),
        })
        .collect();

    let mut signature = format!(
        "{}{}{}({})",
        pad,
        modifiers_prefix(&constructor.modifiers),
        class_name,
        parameters.join(", ")
    );
    if let Some(arguments) = &constructor.base_arguments {
        signature.push_str(&format!(" : base({})", arguments.join(", ")));
    }
    out.push_str(&signature);
    out.push('\n');
    out.push_str(&format!("{}{{\n", pad));

    for statement in &constructor.body {
        match statement {
            Statement::Invoke { receiver, method, arguments } => {
                out.push_str(&format!(
                    "{}{}{}.{}({});\n",
                    pad,
                    INDENT,
                    receiver,
                    method,
                    arguments.join(", ")
                ));
            }
        }
    }

    out.push_str(&format!("{}}}\n", pad));
}

fn format_attribute(attribute: &Attribute) -> String {
    if attribute.arguments.is_empty() {
        return attribute.name.clone();
    }
    let arguments: Vec<String> = attribute.arguments.iter().map(|a| string_literal(a)).collect();
    format!("{}({})", attribute.name, arguments.join(", "))
}

/// Modifiers in canonical keyword order, each followed by a space.
fn modifiers_prefix(modifiers: &[Modifier]) -> String {
    let ordered: BTreeSet<Modifier> = modifiers.iter().copied().collect();
    ordered
        .iter()
        .map(|m| format!("{} ", m.keyword()))
        .collect()
}

/// Quotes a value as a regular C# string literal.
fn string_literal(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('"');
    for c in value.chars() {
        match c {
            '"' => literal.push_str("\\\""),
            '\\' => literal.push_str("\\\\"),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            _ => literal.push(c),
        }
    }
    literal.push('"');
    literal
}
