//! Error types and their constructors.
//!
//! Two layers: `EvalError` for expression evaluation, and `ExecError` for
//! statement execution, which wraps `EvalError` transparently. Every error is
//! terminal; nothing in the interpreter catches and retries.
//!
//! The factory functions below are the canonical way to build errors so the
//! message strings stay in one place.

use lamb_ir::{ArithOp, Name};

/// Result of evaluating an expression.
pub type EvalResult<T> = Result<T, EvalError>;

/// Result of executing a statement.
pub type ExecResult<T> = Result<T, ExecError>;

/// Failure while reducing an expression to a value.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// Operands do not match what the operator expects.
    #[error("{0}")]
    TypeError(&'static str),
    #[error("unknown variable: {0}")]
    UnknownVariable(Name),
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },
}

/// Failure while executing a statement.
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error("undefined function: {0}")]
    UndefinedFunction(Name),
    #[error("{0} is not a function")]
    NotAFunction(Name),
    /// An `if`/`while` condition produced something other than a `Bool`.
    #[error("condition must evaluate to Bool, found {found}")]
    ConditionType { found: &'static str },
    /// Breakpoint input ended before the resume keyword was entered.
    #[error("debugger input ended before \"Continue\"")]
    DebuggerInputClosed,
    /// Reading breakpoint input failed.
    #[error("failed to read debugger input: {0}")]
    Io(#[from] std::io::Error),
}

const ARITHMETIC_TYPE_ERROR: &str = "type error in arithmetic expression";
const BOOLEAN_TYPE_ERROR: &str = "type error in boolean expression";

// Expression errors

/// Non-`Int` operand to arithmetic or to a comparison.
#[cold]
pub fn arithmetic_type_error() -> EvalError {
    EvalError::TypeError(ARITHMETIC_TYPE_ERROR)
}

/// Non-`Bool` operand to a boolean operator.
#[cold]
pub fn boolean_type_error() -> EvalError {
    EvalError::TypeError(BOOLEAN_TYPE_ERROR)
}

#[cold]
pub fn unknown_variable(name: &str) -> EvalError {
    EvalError::UnknownVariable(name.to_owned())
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::DivisionByZero
}

#[cold]
pub fn integer_overflow(op: ArithOp) -> EvalError {
    EvalError::IntegerOverflow {
        operation: op.name(),
    }
}

// Statement errors

#[cold]
pub fn undefined_function(name: &str) -> ExecError {
    ExecError::UndefinedFunction(name.to_owned())
}

#[cold]
pub fn not_a_function(name: &str) -> ExecError {
    ExecError::NotAFunction(name.to_owned())
}

#[cold]
pub fn debugger_input_closed() -> ExecError {
    ExecError::DebuggerInputClosed
}

#[cold]
pub fn condition_type(found: &'static str) -> ExecError {
    ExecError::ConditionType { found }
}

