//! Constructor functions for building Lamb programs.
//!
//! Lamb has no parser; programs are assembled with these helpers:
//!
//! ```
//! use lamb_ir::build::{assign, gt, int, print, seq, sub, var, while_loop};
//!
//! let countdown = seq([
//!     assign("n", int(3)),
//!     while_loop(gt(var("n"), int(0)), assign("n", sub(var("n"), int(1)))),
//!     print("n"),
//! ]);
//! # let _ = countdown;
//! ```

use crate::{ArithOp, BoolOp, CompareOp, Expr, Name, Stmt, Value};

// Expressions

pub fn int(n: i64) -> Expr {
    Expr::Const(Value::Int(n))
}

pub fn boolean(b: bool) -> Expr {
    Expr::Const(Value::Bool(b))
}

pub fn double(d: f64) -> Expr {
    Expr::Const(Value::Double(d))
}

pub fn var(name: impl Into<Name>) -> Expr {
    Expr::Var(name.into())
}

fn arith(op: ArithOp, lhs: Expr, rhs: Expr) -> Expr {
    Expr::Arith(op, Box::new(lhs), Box::new(rhs))
}

fn logic(op: BoolOp, lhs: Expr, rhs: Expr) -> Expr {
    Expr::Bool(op, Box::new(lhs), Box::new(rhs))
}

fn compare(op: CompareOp, lhs: Expr, rhs: Expr) -> Expr {
    Expr::Compare(op, Box::new(lhs), Box::new(rhs))
}

pub fn add(lhs: Expr, rhs: Expr) -> Expr {
    arith(ArithOp::Add, lhs, rhs)
}

pub fn sub(lhs: Expr, rhs: Expr) -> Expr {
    arith(ArithOp::Sub, lhs, rhs)
}

pub fn mul(lhs: Expr, rhs: Expr) -> Expr {
    arith(ArithOp::Mul, lhs, rhs)
}

pub fn div(lhs: Expr, rhs: Expr) -> Expr {
    arith(ArithOp::Div, lhs, rhs)
}

pub fn and(lhs: Expr, rhs: Expr) -> Expr {
    logic(BoolOp::And, lhs, rhs)
}

pub fn or(lhs: Expr, rhs: Expr) -> Expr {
    logic(BoolOp::Or, lhs, rhs)
}

/// Boolean negation, expressed as `true && !operand`.
pub fn not(operand: Expr) -> Expr {
    logic(BoolOp::Not, boolean(true), operand)
}

pub fn eq(lhs: Expr, rhs: Expr) -> Expr {
    compare(CompareOp::Eq, lhs, rhs)
}

pub fn gt(lhs: Expr, rhs: Expr) -> Expr {
    compare(CompareOp::Gt, lhs, rhs)
}

pub fn lt(lhs: Expr, rhs: Expr) -> Expr {
    compare(CompareOp::Lt, lhs, rhs)
}

pub fn lambda<I, S>(params: I, body: Expr) -> Expr
where
    I: IntoIterator<Item = S>,
    S: Into<Name>,
{
    Expr::Lambda {
        params: names(params),
        body: Box::new(body),
    }
}

// Statements

pub fn assign(name: impl Into<Name>, value: Expr) -> Stmt {
    Stmt::Assign {
        name: name.into(),
        value,
    }
}

pub fn function<I, S>(name: impl Into<Name>, params: I, body: Expr) -> Stmt
where
    I: IntoIterator<Item = S>,
    S: Into<Name>,
{
    Stmt::Function {
        name: name.into(),
        params: names(params),
        body,
    }
}

/// Call `function` with pre-evaluated arguments and bind the result.
pub fn call(
    function: impl Into<Name>,
    args: impl IntoIterator<Item = Value>,
    result: impl Into<Name>,
) -> Stmt {
    Stmt::Call {
        function: function.into(),
        args: args.into_iter().collect(),
        result: result.into(),
    }
}

pub fn print(name: impl Into<Name>) -> Stmt {
    Stmt::Print(name.into())
}

pub fn if_else(cond: Expr, then_branch: Stmt, else_branch: Stmt) -> Stmt {
    Stmt::If {
        cond,
        then_branch: Box::new(then_branch),
        else_branch: Box::new(else_branch),
    }
}

pub fn while_loop(cond: Expr, body: Stmt) -> Stmt {
    Stmt::While {
        cond,
        body: Box::new(body),
    }
}

pub fn breakpoint() -> Stmt {
    Stmt::Break
}

pub fn pass() -> Stmt {
    Stmt::Pass
}

/// Chain statements in order.
///
/// Builds right-nested `Sequence` nodes. An empty list is `Pass`, and a
/// single statement is returned unchanged.
pub fn seq(stmts: impl IntoIterator<Item = Stmt>) -> Stmt {
    let mut stmts: Vec<Stmt> = stmts.into_iter().collect();
    let Some(mut tail) = stmts.pop() else {
        return Stmt::Pass;
    };
    while let Some(prev) = stmts.pop() {
        tail = prev.then(tail);
    }
    tail
}

fn names<I, S>(params: I) -> Vec<Name>
where
    I: IntoIterator<Item = S>,
    S: Into<Name>,
{
    params.into_iter().map(Into::into).collect()
}
