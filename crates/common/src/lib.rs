//! Shared AST helpers for component linting
//!
//! Shape predicates, property lookup and literal helpers that operate on the
//! oxc AST without knowing anything about individual lint rules.

pub mod check;
pub mod literal;
pub mod property;

pub use check::*;
pub use literal::{literal_truthiness, static_string_value};
pub use property::*;
