//! Closure calls.

use lamb_ir::Value;

use super::Interpreter;
use crate::errors::{not_a_function, undefined_function, ExecResult};
use crate::evaluate;

impl Interpreter {
    /// Call the closure bound to `function` and bind its value to `result`.
    ///
    /// The body runs against the caller's whole environment with the
    /// parameters bound to `args` on top. The value is printed, then bound in
    /// the caller's environment; bindings made for the call do not leak out.
    #[tracing::instrument(level = "debug", skip(self, args))]
    pub(super) fn call(&mut self, function: &str, args: &[Value], result: &str) -> ExecResult<()> {
        let Some(target) = self.env.lookup(function) else {
            return Err(undefined_function(function));
        };
        let Value::Closure(closure) = target else {
            return Err(not_a_function(function));
        };

        let call_env = self.env.with_arguments(&closure.params, args);
        let value = evaluate(&closure.body, &call_env)?;
        tracing::debug!(%value, "call returned");

        self.print_handler.emit(&value.to_string());
        self.env.define(result, value);
        Ok(())
    }
}
