//! The interpreter's variable store.
//!
//! Lamb has no lexical scoping: one flat mapping serves the whole program,
//! and closure calls evaluate against a copy of it with the arguments laid
//! on top. The interpreter owns the only mutable handle and threads it
//! through statements in order.

use rustc_hash::FxHashMap;
use std::fmt;

use lamb_ir::{Name, Value};

/// Flat mapping from variable name to value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Environment {
    bindings: FxHashMap<Name, Value>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name`, replacing any existing value.
    #[inline]
    pub fn define(&mut self, name: impl Into<Name>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    #[inline]
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bound names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.bindings.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Bindings sorted by name.
    pub fn sorted_bindings(&self) -> Vec<(&str, &Value)> {
        let mut pairs: Vec<(&str, &Value)> = self
            .bindings
            .iter()
            .map(|(name, value)| (name.as_str(), value))
            .collect();
        pairs.sort_unstable_by(|a, b| a.0.cmp(b.0));
        pairs
    }

    /// A copy of this environment with `params` bound to `args`.
    ///
    /// Pairs up the two lists like `zip`: surplus arguments are dropped and
    /// surplus parameters stay unbound. Arguments shadow outer bindings of
    /// the same name.
    pub fn with_arguments(&self, params: &[Name], args: &[Value]) -> Environment {
        let mut call_env = self.clone();
        for (param, arg) in params.iter().zip(args) {
            call_env.define(param.clone(), arg.clone());
        }
        call_env
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, value)) in self.sorted_bindings().into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        f.write_str("}")
    }
}

impl<N: Into<Name>> FromIterator<(N, Value)> for Environment {
    fn from_iter<I: IntoIterator<Item = (N, Value)>>(iter: I) -> Self {
        let mut env = Environment::new();
        for (name, value) in iter {
            env.define(name, value);
        }
        env
    }
}
