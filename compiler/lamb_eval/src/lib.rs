//! Lamb Eval - Tree-walking interpreter for Lamb programs.
//!
//! # Architecture
//!
//! - `Environment`: the single flat variable store
//! - `evaluate`: pure expression evaluation against an environment
//! - `evaluate_arith` / `evaluate_bool` / `evaluate_compare`: enum-matched
//!   operator dispatch
//! - `Interpreter`: statement execution, closure calls, and the breakpoint
//!   loop
//! - `PrintHandlerImpl` / `DebugInput`: where output goes and where
//!   breakpoint input comes from
//!
//! Integer arithmetic is checked: division by zero and overflow are errors,
//! never traps or wraparound.

mod debug_input;
mod environment;
pub mod errors;
mod eval;
pub mod interpreter;
mod operators;
mod print_handler;

pub use debug_input::DebugInput;
pub use environment::Environment;
pub use errors::{EvalError, EvalResult, ExecError, ExecResult};
pub use eval::evaluate;
pub use interpreter::{Interpreter, InterpreterBuilder, RunOutcome, RESUME_KEYWORD};
pub use operators::{evaluate_arith, evaluate_bool, evaluate_compare};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};

#[cfg(test)]
mod tests;
