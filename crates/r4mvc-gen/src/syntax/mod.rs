//! Language-neutral class definitions.
//!
//! The generator never emits text directly. It assembles these immutable
//! values and hands them to a printer (see [`crate::render`]). The set of
//! shapes is deliberately closed: identifiers, modifiers, attributes, base
//! types, and three member kinds.

mod class;
mod member;

pub use class::{ClassBuilder, ClassDefinition};
pub use member::{
    Attribute, BaseTypeRef, Constructor, Field, Identifier, Initializer, Member, Modifier,
    Parameter, Property, Statement,
};
