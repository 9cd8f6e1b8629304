//! The `show` and `list` commands.

use std::fmt::Write;

use crate::programs;

use super::{lookup_program, CommandError};

/// Render a catalog program's syntax tree.
pub fn show_program(name: &str) -> Result<String, CommandError> {
    let program = lookup_program(name)?;
    Ok(program.build().to_string())
}

/// One line per catalog entry: name, then description.
pub fn list_programs() -> String {
    let width = programs::catalog()
        .iter()
        .map(|p| p.name.len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for program in programs::catalog() {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "  {:<width$}  {}", program.name, program.description);
    }
    out
}
