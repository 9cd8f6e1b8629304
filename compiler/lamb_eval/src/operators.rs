//! Binary operator implementations.
//!
//! Each operator family checks its operand kinds first and reports the
//! family's type error. Comparisons share the arithmetic message.

use lamb_ir::{ArithOp, BoolOp, CompareOp, Value};

use crate::errors::{
    arithmetic_type_error, boolean_type_error, division_by_zero, integer_overflow, EvalResult,
};

/// Apply an arithmetic operator to two `Int` values.
///
/// Division truncates toward zero. A zero divisor is `DivisionByZero`, and
/// any result outside `i64` (including `i64::MIN / -1`) is `IntegerOverflow`.
pub fn evaluate_arith(op: ArithOp, left: &Value, right: &Value) -> EvalResult<Value> {
    let (Value::Int(a), Value::Int(b)) = (left, right) else {
        return Err(arithmetic_type_error());
    };
    let (a, b) = (*a, *b);
    let result = match op {
        ArithOp::Add => a.checked_add(b),
        ArithOp::Sub => a.checked_sub(b),
        ArithOp::Mul => a.checked_mul(b),
        ArithOp::Div => {
            if b == 0 {
                return Err(division_by_zero());
            }
            a.checked_div(b)
        }
    };
    result.map(Value::Int).ok_or_else(|| integer_overflow(op))
}

/// Apply a boolean operator to two `Bool` values.
pub fn evaluate_bool(op: BoolOp, left: &Value, right: &Value) -> EvalResult<Value> {
    let (Value::Bool(a), Value::Bool(b)) = (left, right) else {
        return Err(boolean_type_error());
    };
    let result = match op {
        BoolOp::And => *a && *b,
        BoolOp::Or => *a || *b,
        BoolOp::Not => *a && !*b,
    };
    Ok(Value::Bool(result))
}

/// Compare two `Int` values.
pub fn evaluate_compare(op: CompareOp, left: &Value, right: &Value) -> EvalResult<Value> {
    let (Value::Int(a), Value::Int(b)) = (left, right) else {
        return Err(arithmetic_type_error());
    };
    let result = match op {
        CompareOp::Eq => a == b,
        CompareOp::Gt => a > b,
        CompareOp::Lt => a < b,
    };
    Ok(Value::Bool(result))
}
