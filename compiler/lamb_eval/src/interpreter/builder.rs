//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use super::Interpreter;
use crate::{stdout_handler, DebugInput, Environment, SharedPrintHandler};

/// Builder for creating Interpreter instances.
///
/// Defaults: an empty environment, output to stdout, breakpoint input from
/// stdin.
#[derive(Default)]
pub struct InterpreterBuilder {
    env: Option<Environment>,
    print_handler: Option<SharedPrintHandler>,
    debug_input: Option<DebugInput>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial environment.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    /// Set where `print`, call results, and breakpoint messages go.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Set where the breakpoint loop reads its input.
    #[must_use]
    pub fn debug_input(mut self, input: DebugInput) -> Self {
        self.debug_input = Some(input);
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            env: self.env.unwrap_or_default(),
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            debug_input: self.debug_input.unwrap_or_default(),
        }
    }
}
