//! The interactive breakpoint loop entered by `Stmt::Break`.
//!
//! A read-only inspection window: it lists the bound names, then answers one
//! line of input at a time until told to resume. It never changes the
//! environment. Input that ends before the resume keyword is an error.

use lamb_ir::Value;

use super::Interpreter;
use crate::errors::{debugger_input_closed, unknown_variable, ExecResult};
use crate::Environment;

/// Input line that leaves the breakpoint loop.
pub const RESUME_KEYWORD: &str = "Continue";

/// One line of operator input, classified.
#[derive(Debug, PartialEq)]
enum Command<'env> {
    Resume,
    Inspect(String, &'env Value),
    Unknown(String),
}

/// The resume keyword wins over a variable that happens to share its name.
fn classify(line: String, env: &Environment) -> Command<'_> {
    if line == RESUME_KEYWORD {
        return Command::Resume;
    }
    match env.lookup(&line) {
        Some(value) => Command::Inspect(line, value),
        None => Command::Unknown(line),
    }
}

impl Interpreter {
    pub(super) fn breakpoint(&mut self) -> ExecResult<()> {
        tracing::debug!(bindings = self.env.len(), "breakpoint reached");
        self.print_handler.emit(&format!(
            "Breakpoint reached. Enter a variable name to inspect it, or \"{RESUME_KEYWORD}\" to resume."
        ));
        self.print_handler
            .emit(&format!("Variables: [{}]", self.env.names().join(", ")));

        loop {
            self.print_handler.flush()?;
            let Some(line) = self.debug_input.read_line()? else {
                tracing::warn!("debugger input closed at breakpoint");
                return Err(debugger_input_closed());
            };

            match classify(line, &self.env) {
                Command::Resume => {
                    tracing::debug!("resuming from breakpoint");
                    return Ok(());
                }
                Command::Inspect(name, value) => {
                    self.print_handler.emit(&format!("{name} = {value}"));
                }
                Command::Unknown(input) => return Err(unknown_variable(&input).into()),
            }
        }
    }
}
