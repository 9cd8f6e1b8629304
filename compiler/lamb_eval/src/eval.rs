//! Expression evaluation.

use lamb_ir::{Expr, Value};
use lamb_stack::ensure_sufficient_stack;

use crate::errors::{unknown_variable, EvalResult};
use crate::operators::{evaluate_arith, evaluate_bool, evaluate_compare};
use crate::Environment;

/// Reduce `expr` to a value against `env`.
///
/// Pure: reads `env` and nothing else. Binary operators evaluate the left
/// operand, then the right, then apply the operator, so `&&` and `||` never
/// short-circuit and a type error on either side is always reported.
pub fn evaluate(expr: &Expr, env: &Environment) -> EvalResult<Value> {
    ensure_sufficient_stack(|| match expr {
        Expr::Const(value) => Ok(value.clone()),
        Expr::Arith(op, lhs, rhs) => {
            let left = evaluate(lhs, env)?;
            let right = evaluate(rhs, env)?;
            evaluate_arith(*op, &left, &right)
        }
        Expr::Bool(op, lhs, rhs) => {
            let left = evaluate(lhs, env)?;
            let right = evaluate(rhs, env)?;
            evaluate_bool(*op, &left, &right)
        }
        Expr::Compare(op, lhs, rhs) => {
            let left = evaluate(lhs, env)?;
            let right = evaluate(rhs, env)?;
            evaluate_compare(*op, &left, &right)
        }
        Expr::Var(name) => env.lookup(name).cloned().ok_or_else(|| unknown_variable(name)),
        Expr::Lambda { params, body } => Ok(Value::closure(params.clone(), (**body).clone())),
    })
}
