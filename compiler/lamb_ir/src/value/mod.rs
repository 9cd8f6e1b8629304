//! Runtime values.

use std::fmt;

use crate::{Expr, Name};

/// A runtime value.
///
/// Values are immutable once built; evaluation only ever creates new ones.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Int(i64),
    Bool(bool),
    Double(f64),
    Closure(Closure),
}

/// A function value: parameter names and an unevaluated body.
///
/// Closures capture nothing when they are created. A call evaluates the body
/// against the caller's environment at call time with the arguments bound on
/// top, so the body sees whatever is bound globally when it runs.
#[derive(Clone, Debug, PartialEq)]
pub struct Closure {
    pub params: Vec<Name>,
    pub body: Box<Expr>,
}

impl Value {
    /// Build a closure value.
    pub fn closure(params: Vec<Name>, body: Expr) -> Self {
        Value::Closure(Closure {
            params,
            body: Box::new(body),
        })
    }

    /// The kind name used in error messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "Int",
            Value::Bool(_) => "Bool",
            Value::Double(_) => "Double",
            Value::Closure(_) => "Closure",
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Value::Double(d)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Double(d) => write!(f, "{d:?}"),
            Value::Closure(c) => write!(f, "<closure({})>", c.params.join(", ")),
        }
    }
}

#[cfg(test)]
mod tests;
