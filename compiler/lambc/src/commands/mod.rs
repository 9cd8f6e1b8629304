//! Command handlers for the `lamb` CLI.
//!
//! Each submodule implements one command. Handlers take the print handler to
//! write through so tests can capture output; the binary passes stdout.

use std::path::PathBuf;

use crate::programs::{self, Program};

mod analyze;
mod run;
mod show;

pub use analyze::analyze_program;
pub use run::{parse_run_args, run_program, RunOptions};
pub use show::{list_programs, show_program};

/// Failure of a driver command, as opposed to a failure of the program it
/// runs.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("unknown program '{0}' (run `lamb list` to see the catalog)")]
    UnknownProgram(String),
    #[error("missing program name")]
    MissingProgram,
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
    #[error("cannot read debug input '{}': {source}", path.display())]
    DebugInput {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Resolve a catalog name, failing with a user-facing error.
pub(crate) fn lookup_program(name: &str) -> Result<&'static Program, CommandError> {
    programs::find(name).ok_or_else(|| CommandError::UnknownProgram(name.to_owned()))
}
