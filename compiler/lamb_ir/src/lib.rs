//! Lamb IR - Values and syntax trees for the Lamb interpreter.
//!
//! This crate contains the data shared by every other Lamb crate:
//! - `Value`: the runtime values (`Int`, `Bool`, `Double`, `Closure`)
//! - `Expr` / `Stmt`: the closed syntax tree the interpreter and analyzer walk
//! - `build`: constructor functions for assembling programs in Rust code
//!
//! There is no textual parser. Programs are built programmatically, and the
//! `Display` impls on `Expr` and `Stmt` render them for inspection only.

pub mod ast;
pub mod build;
mod value;

pub use ast::{ArithOp, BoolOp, CompareOp, Expr, Stmt};
pub use value::{Closure, Value};

/// A variable name.
pub type Name = String;

/// Marker written before every line of interpreter and analyzer output.
///
/// Tooling filters interpreter output from other console noise by this
/// prefix, so it must stay byte-for-byte stable.
pub const OUTPUT_PREFIX: &str = "λ> ";
