//! Human-readable rendering of syntax trees.
//!
//! The output is for `lamb show` and test failure messages. It is not a
//! surface syntax and nothing parses it back.

use std::fmt::{self, Display, Formatter};

use super::{BoolOp, Expr, Stmt};
use crate::Value;
use lamb_stack::ensure_sufficient_stack;

const INDENT: &str = "    ";

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Expr::Const(value) => write!(f, "{value}"),
            Expr::Arith(op, lhs, rhs) => write!(f, "({lhs} {} {rhs})", op.as_symbol()),
            // `not(e)` is built as `true && !e`; show it the way it was written.
            Expr::Bool(BoolOp::Not, lhs, rhs)
                if matches!(**lhs, Expr::Const(Value::Bool(true))) =>
            {
                write!(f, "!{rhs}")
            }
            Expr::Bool(BoolOp::Not, lhs, rhs) => write!(f, "({lhs} && !{rhs})"),
            Expr::Bool(op, lhs, rhs) => write!(f, "({lhs} {} {rhs})", op.as_symbol()),
            Expr::Compare(op, lhs, rhs) => write!(f, "({lhs} {} {rhs})", op.as_symbol()),
            Expr::Var(name) => f.write_str(name),
            Expr::Lambda { params, body } => write!(f, "fn({}) => {body}", params.join(", ")),
        })
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_stmt(f, self, 0)
    }
}

fn write_stmt(f: &mut Formatter<'_>, stmt: &Stmt, depth: usize) -> fmt::Result {
    ensure_sufficient_stack(|| write_stmt_inner(f, stmt, depth))
}

fn write_stmt_inner(f: &mut Formatter<'_>, stmt: &Stmt, depth: usize) -> fmt::Result {
    let pad = INDENT.repeat(depth);
    match stmt {
        Stmt::Assign { name, value } => writeln!(f, "{pad}{name} = {value}"),
        Stmt::Function { name, params, body } => {
            writeln!(f, "{pad}fn {name}({}) = {body}", params.join(", "))
        }
        Stmt::Call {
            function,
            args,
            result,
        } => {
            let args: Vec<String> = args.iter().map(ToString::to_string).collect();
            writeln!(f, "{pad}{result} = {function}({})", args.join(", "))
        }
        Stmt::Sequence(first, second) => {
            write_stmt(f, first, depth)?;
            write_stmt(f, second, depth)
        }
        Stmt::Print(name) => writeln!(f, "{pad}print {name}"),
        Stmt::If {
            cond,
            then_branch,
            else_branch,
        } => {
            writeln!(f, "{pad}if {cond} {{")?;
            write_stmt(f, then_branch, depth + 1)?;
            if **else_branch != Stmt::Pass {
                writeln!(f, "{pad}}} else {{")?;
                write_stmt(f, else_branch, depth + 1)?;
            }
            writeln!(f, "{pad}}}")
        }
        Stmt::While { cond, body } => {
            writeln!(f, "{pad}while {cond} {{")?;
            write_stmt(f, body, depth + 1)?;
            writeln!(f, "{pad}}}")
        }
        Stmt::Break => writeln!(f, "{pad}break"),
        Stmt::Pass => writeln!(f, "{pad}pass"),
    }
}
