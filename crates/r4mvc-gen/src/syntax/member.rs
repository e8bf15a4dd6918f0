//! Building blocks of a class definition.

use std::fmt;

/// A class or member name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier(String);

impl Identifier {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Declaration modifiers, in the order they are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Modifier {
    Public,
    Internal,
    Private,
    Static,
    Const,
    Readonly,
    Partial,
}

impl Modifier {
    /// The C# keyword for this modifier.
    pub fn keyword(&self) -> &'static str {
        match self {
            Modifier::Public => "public",
            Modifier::Internal => "internal",
            Modifier::Private => "private",
            Modifier::Static => "static",
            Modifier::Const => "const",
            Modifier::Readonly => "readonly",
            Modifier::Partial => "partial",
        }
    }
}

/// An attribute applied to a class, e.g. `[GeneratedCode("R4Mvc", "1.0")]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    /// Arguments as string literals.
    pub arguments: Vec<String>,
}

impl Attribute {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    pub fn with_argument(mut self, argument: impl Into<String>) -> Self {
        self.arguments.push(argument.into());
        self
    }
}

/// A base class or implemented interface.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BaseTypeRef(String);

impl BaseTypeRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

/// A constructor or method parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub type_name: String,
    /// Default value expression, e.g. `null`.
    pub default: Option<String>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            default: None,
        }
    }

    pub fn defaults_to_null(mut self) -> Self {
        self.default = Some("null".to_string());
        self
    }
}

/// Field initializer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Initializer {
    /// `= "value"`
    StringLiteral(String),
    /// `= new Type()`
    New(String),
}

/// A single statement in a constructor body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `receiver.method(arguments...);`
    Invoke {
        receiver: String,
        method: String,
        arguments: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub modifiers: Vec<Modifier>,
    pub type_name: String,
    pub name: Identifier,
    pub initializer: Option<Initializer>,
}

/// An auto-implemented `{ get; set; }` property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub modifiers: Vec<Modifier>,
    pub type_name: String,
    pub name: Identifier,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constructor {
    pub modifiers: Vec<Modifier>,
    pub parameters: Vec<Parameter>,
    /// Arguments passed to `: base(...)`, if the constructor chains.
    pub base_arguments: Option<Vec<String>>,
    pub body: Vec<Statement>,
}

impl Constructor {
    pub fn new(modifiers: &[Modifier]) -> Self {
        Self {
            modifiers: modifiers.to_vec(),
            parameters: Vec::new(),
            base_arguments: None,
            body: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_base_arguments(mut self, arguments: &[&str]) -> Self {
        self.base_arguments = Some(arguments.iter().map(|a| a.to_string()).collect());
        self
    }

    pub fn with_statement(mut self, statement: Statement) -> Self {
        self.body.push(statement);
        self
    }

    pub fn is_public(&self) -> bool {
        self.modifiers.contains(&Modifier::Public)
    }
}

/// A class member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Member {
    Field(Field),
    Property(Property),
    Constructor(Constructor),
}
