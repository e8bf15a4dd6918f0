//! Class definitions and their builder.

use super::member::{
    Attribute, BaseTypeRef, Constructor, Field, Identifier, Initializer, Member, Modifier,
    Property,
};

/// Tool name stamped into `GeneratedCode` attributes.
pub const GENERATOR_NAME: &str = "R4Mvc";

/// A synthesized class, ready to be printed.
///
/// Instances are only produced by [`ClassBuilder::build`] and are immutable
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDefinition {
    identifier: Identifier,
    modifiers: Vec<Modifier>,
    attributes: Vec<Attribute>,
    base_types: Vec<BaseTypeRef>,
    members: Vec<Member>,
}

impl ClassDefinition {
    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn base_types(&self) -> &[BaseTypeRef] {
        &self.base_types
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// True when the class carries exactly the given modifiers (order-insensitive).
    pub fn is(&self, modifiers: &[Modifier]) -> bool {
        self.modifiers.len() == modifiers.len()
            && modifiers.iter().all(|m| self.modifiers.contains(m))
    }

    pub fn constructors(&self) -> impl Iterator<Item = &Constructor> {
        self.members.iter().filter_map(|m| match m {
            Member::Constructor(c) => Some(c),
            _ => None,
        })
    }

    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.members.iter().filter_map(|m| match m {
            Member::Field(f) => Some(f),
            _ => None,
        })
    }

    pub fn properties(&self) -> impl Iterator<Item = &Property> {
        self.members.iter().filter_map(|m| match m {
            Member::Property(p) => Some(p),
            _ => None,
        })
    }
}

/// Consuming builder for [`ClassDefinition`].
#[derive(Debug)]
pub struct ClassBuilder {
    class: ClassDefinition,
}

impl ClassBuilder {
    pub fn new(identifier: impl Into<Identifier>) -> Self {
        Self {
            class: ClassDefinition {
                identifier: identifier.into(),
                modifiers: Vec::new(),
                attributes: Vec::new(),
                base_types: Vec::new(),
                members: Vec::new(),
            },
        }
    }

    pub fn with_modifiers(mut self, modifiers: &[Modifier]) -> Self {
        for modifier in modifiers {
            if !self.class.modifiers.contains(modifier) {
                self.class.modifiers.push(*modifier);
            }
        }
        self
    }

    /// Adds `[GeneratedCode]` and `[DebuggerNonUserCode]`.
    pub fn with_generated_attributes(mut self) -> Self {
        self.class.attributes.push(
            Attribute::new("GeneratedCode")
                .with_argument(GENERATOR_NAME)
                .with_argument(env!("CARGO_PKG_VERSION")),
        );
        self.class.attributes.push(Attribute::new("DebuggerNonUserCode"));
        self
    }

    pub fn with_base_types(mut self, base_types: &[&str]) -> Self {
        self.class
            .base_types
            .extend(base_types.iter().map(|t| BaseTypeRef::new(*t)));
        self
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.class.members.push(Member::Field(field));
        self
    }

    /// Adds `<modifiers> string <name> = "<value>";`.
    pub fn with_string_field(self, name: &str, value: &str, modifiers: &[Modifier]) -> Self {
        self.with_field(Field {
            modifiers: modifiers.to_vec(),
            type_name: "string".to_string(),
            name: Identifier::new(name),
            initializer: Some(Initializer::StringLiteral(value.to_string())),
        })
    }

    /// Adds `<modifiers> <type_name> <name> = new <type_name>();`.
    pub fn with_new_field(self, name: &str, type_name: &str, modifiers: &[Modifier]) -> Self {
        self.with_field(Field {
            modifiers: modifiers.to_vec(),
            type_name: type_name.to_string(),
            name: Identifier::new(name),
            initializer: Some(Initializer::New(type_name.to_string())),
        })
    }

    /// Adds `<modifiers> <type_name> <name> { get; set; }`.
    pub fn with_auto_property(mut self, name: &str, type_name: &str, modifiers: &[Modifier]) -> Self {
        self.class.members.push(Member::Property(Property {
            modifiers: modifiers.to_vec(),
            type_name: type_name.to_string(),
            name: Identifier::new(name),
        }));
        self
    }

    pub fn with_constructor(mut self, constructor: Constructor) -> Self {
        self.class.members.push(Member::Constructor(constructor));
        self
    }

    pub fn build(self) -> ClassDefinition {
        self.class
    }
}
