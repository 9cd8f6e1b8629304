//! The `run` command.

use std::path::PathBuf;

use lamb_eval::{DebugInput, InterpreterBuilder, RunOutcome, SharedPrintHandler};

use super::{lookup_program, CommandError};

/// Options accepted by `lamb run`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Answer breakpoint prompts from this file, one line per prompt,
    /// instead of stdin.
    pub debug_input: Option<PathBuf>,
}

impl RunOptions {
    fn debug_input(&self) -> Result<DebugInput, CommandError> {
        let Some(path) = &self.debug_input else {
            return Ok(DebugInput::Stdin);
        };
        let script = std::fs::read_to_string(path).map_err(|source| CommandError::DebugInput {
            path: path.clone(),
            source,
        })?;
        Ok(DebugInput::scripted(script.lines()))
    }
}

/// Split `run` arguments into the program name and its options.
///
/// Flags may appear before or after the program name.
pub fn parse_run_args(args: &[String]) -> Result<(&str, RunOptions), CommandError> {
    let mut options = RunOptions::default();
    let mut program = None;

    for arg in args {
        if let Some(path) = arg.strip_prefix("--debug-input=") {
            options.debug_input = Some(PathBuf::from(path));
        } else if arg.starts_with('-') {
            return Err(CommandError::UnknownOption(arg.clone()));
        } else if program.is_none() {
            program = Some(arg.as_str());
        } else {
            return Err(CommandError::UnexpectedArgument(arg.clone()));
        }
    }

    let program = program.ok_or(CommandError::MissingProgram)?;
    Ok((program, options))
}

/// Execute a catalog program and emit its final report.
///
/// An uncaught exception in the program is not a command error: it is part
/// of the returned outcome, already reported through `handler`.
pub fn run_program(
    name: &str,
    options: &RunOptions,
    handler: &SharedPrintHandler,
) -> Result<RunOutcome, CommandError> {
    let program = lookup_program(name)?;
    let debug_input = options.debug_input()?;

    tracing::debug!(program = program.name, "running");
    let outcome = InterpreterBuilder::new()
        .print_handler(handler.clone())
        .debug_input(debug_input)
        .build()
        .run(&program.build());
    outcome.report(handler);
    Ok(outcome)
}
