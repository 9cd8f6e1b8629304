//! The statement executor.
//!
//! `Interpreter` owns the environment and threads it through a program one
//! statement at a time. Each statement sees the environment exactly as its
//! predecessor left it. The first error ends the program: nothing is rolled
//! back, and nothing after the failing statement runs.
//!
//! Tail positions (the second half of a `Sequence`, the taken branch of an
//! `If`) are executed by looping rather than recursing, and `While` is an
//! explicit loop, so long programs and long-running loops use constant
//! native stack. Left-nested sequences and loop bodies recurse under
//! `ensure_sufficient_stack`.

mod breakpoint;
mod builder;
mod call;

pub use breakpoint::RESUME_KEYWORD;
pub use builder::InterpreterBuilder;

use lamb_ir::{Expr, Stmt, Value};
use lamb_stack::ensure_sufficient_stack;

use crate::errors::{condition_type, unknown_variable, ExecError, ExecResult};
use crate::{evaluate, DebugInput, Environment, PrintHandlerImpl, SharedPrintHandler};

/// Tree-walking statement executor.
pub struct Interpreter {
    env: Environment,
    print_handler: SharedPrintHandler,
    debug_input: DebugInput,
}

impl Interpreter {
    /// The current environment.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Execute one statement against the current environment.
    pub fn execute(&mut self, stmt: &Stmt) -> ExecResult<()> {
        let mut current = stmt;
        loop {
            tracing::trace!(stmt = current.kind_name(), "execute");
            match current {
                Stmt::Assign { name, value } => {
                    let value = evaluate(value, &self.env)?;
                    self.env.define(name.clone(), value);
                    return Ok(());
                }
                Stmt::Function { name, params, body } => {
                    let closure = Value::closure(params.clone(), body.clone());
                    self.env.define(name.clone(), closure);
                    return Ok(());
                }
                Stmt::Call {
                    function,
                    args,
                    result,
                } => return self.call(function, args, result),
                Stmt::Sequence(first, second) => {
                    ensure_sufficient_stack(|| self.execute(first))?;
                    current = &**second;
                }
                Stmt::Print(name) => {
                    let value = self.env.lookup(name).ok_or_else(|| unknown_variable(name))?;
                    self.print_handler.emit(&value.to_string());
                    return Ok(());
                }
                Stmt::If {
                    cond,
                    then_branch,
                    else_branch,
                } => {
                    current = if self.condition(cond)? {
                        &**then_branch
                    } else {
                        &**else_branch
                    };
                }
                Stmt::While { cond, body } => {
                    while self.condition(cond)? {
                        ensure_sufficient_stack(|| self.execute(body))?;
                    }
                    return Ok(());
                }
                Stmt::Break => return self.breakpoint(),
                Stmt::Pass => return Ok(()),
            }
        }
    }

    /// Run a whole program and hand back the final environment with the
    /// program's result.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run(mut self, program: &Stmt) -> RunOutcome {
        let result = self.execute(program);
        match &result {
            Ok(()) => tracing::debug!(bindings = self.env.len(), "program finished"),
            Err(e) => tracing::debug!(error = %e, "program aborted"),
        }
        RunOutcome {
            env: self.env,
            result,
        }
    }

    /// Evaluate an `if`/`while` condition, which must be a `Bool`.
    fn condition(&self, cond: &Expr) -> ExecResult<bool> {
        match evaluate(cond, &self.env)? {
            Value::Bool(b) => Ok(b),
            other => Err(condition_type(other.type_name())),
        }
    }
}

/// What a finished program left behind.
#[derive(Debug)]
pub struct RunOutcome {
    /// The environment at termination, including every binding made before
    /// a failure.
    pub env: Environment,
    pub result: ExecResult<()>,
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    pub fn error(&self) -> Option<&ExecError> {
        self.result.as_ref().err()
    }

    /// Emit the program's final report line: the environment on success,
    /// or the uncaught error.
    pub fn report(&self, handler: &PrintHandlerImpl) {
        match &self.result {
            Ok(()) => handler.emit(&self.env.to_string()),
            Err(e) => handler.emit(&format!("Uncaught exception: {e}")),
        }
    }
}
