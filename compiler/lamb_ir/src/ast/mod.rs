//! Syntax tree for Lamb programs.
//!
//! Both `Expr` and `Stmt` are closed sums. The interpreter and the analyzer
//! match on them exhaustively; adding a variant is meant to break both.

mod display;
mod operators;

pub use operators::{ArithOp, BoolOp, CompareOp};

use crate::{Closure, Name, Value};

/// An expression. Evaluating one never changes the environment.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// A literal value.
    Const(Value),
    /// Integer arithmetic: `lhs op rhs`.
    Arith(ArithOp, Box<Expr>, Box<Expr>),
    /// Boolean logic: `lhs op rhs`. Both sides are always evaluated.
    Bool(BoolOp, Box<Expr>, Box<Expr>),
    /// Integer comparison producing a `Bool`.
    Compare(CompareOp, Box<Expr>, Box<Expr>),
    /// A variable reference.
    Var(Name),
    /// A function literal. Evaluates to a `Value::Closure`.
    Lambda { params: Vec<Name>, body: Box<Expr> },
}

/// A statement.
#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    /// `name = value`. Inserts or overwrites.
    Assign { name: Name, value: Expr },
    /// Binds `name` to a closure over `params` and `body`.
    Function {
        name: Name,
        params: Vec<Name>,
        body: Expr,
    },
    /// Calls the closure bound to `function` with already-evaluated `args`,
    /// prints the returned value, and binds it to `result`.
    Call {
        function: Name,
        args: Vec<Value>,
        result: Name,
    },
    /// Runs the first statement, then the second.
    Sequence(Box<Stmt>, Box<Stmt>),
    /// Prints the current value of a variable.
    Print(Name),
    If {
        cond: Expr,
        then_branch: Box<Stmt>,
        else_branch: Box<Stmt>,
    },
    While { cond: Expr, body: Box<Stmt> },
    /// Stops for interactive inspection of the environment.
    Break,
    /// Does nothing.
    Pass,
}

impl Stmt {
    /// Sequence `self` before `next`.
    #[must_use]
    pub fn then(self, next: Stmt) -> Stmt {
        Stmt::Sequence(Box::new(self), Box::new(next))
    }

    /// Variant name, for logs.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Stmt::Assign { .. } => "assign",
            Stmt::Function { .. } => "function",
            Stmt::Call { .. } => "call",
            Stmt::Sequence(..) => "sequence",
            Stmt::Print(_) => "print",
            Stmt::If { .. } => "if",
            Stmt::While { .. } => "while",
            Stmt::Break => "break",
            Stmt::Pass => "pass",
        }
    }
}

// Nothing bounds how deeply a program nests, so the derived drop glue could
// run out of stack. Children with children of their own are moved onto a
// worklist and dropped one level at a time.

impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut child) = pending.pop() {
            child.detach_children(&mut pending);
        }
    }
}

impl Expr {
    fn is_leaf(&self) -> bool {
        match self {
            Expr::Var(_) => true,
            Expr::Const(value) => !matches!(value, Value::Closure(_)),
            _ => false,
        }
    }

    fn detach_children(&mut self, pending: &mut Vec<Expr>) {
        let mut detach = |slot: &mut Box<Expr>| {
            if !slot.is_leaf() {
                pending.push(std::mem::replace(&mut **slot, Expr::Var(Name::new())));
            }
        };
        match self {
            Expr::Arith(_, lhs, rhs) | Expr::Bool(_, lhs, rhs) | Expr::Compare(_, lhs, rhs) => {
                detach(lhs);
                detach(rhs);
            }
            Expr::Lambda { body, .. } | Expr::Const(Value::Closure(Closure { body, .. })) => {
                detach(body);
            }
            Expr::Const(_) | Expr::Var(_) => {}
        }
    }
}

impl Drop for Stmt {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut child) = pending.pop() {
            child.detach_children(&mut pending);
        }
    }
}

impl Stmt {
    fn detach_children(&mut self, pending: &mut Vec<Stmt>) {
        let mut detach = |slot: &mut Box<Stmt>| {
            if matches!(**slot, Stmt::Sequence(..) | Stmt::If { .. } | Stmt::While { .. }) {
                pending.push(std::mem::replace(&mut **slot, Stmt::Pass));
            }
        };
        match self {
            Stmt::Sequence(first, second) => {
                detach(first);
                detach(second);
            }
            Stmt::If {
                then_branch,
                else_branch,
                ..
            } => {
                detach(then_branch);
                detach(else_branch);
            }
            Stmt::While { body, .. } => detach(body),
            Stmt::Assign { .. }
            | Stmt::Function { .. }
            | Stmt::Call { .. }
            | Stmt::Print(_)
            | Stmt::Break
            | Stmt::Pass => {}
        }
    }
}

#[cfg(test)]
mod tests;
