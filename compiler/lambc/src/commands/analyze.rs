//! The `analyze` command.

use lamb_analysis::{analyze, AnalysisReport};
use lamb_eval::PrintHandlerImpl;

use super::{lookup_program, CommandError};

/// Run the static analyzer over a catalog program and emit its two report
/// lines. The program is never executed.
pub fn analyze_program(
    name: &str,
    handler: &PrintHandlerImpl,
) -> Result<AnalysisReport, CommandError> {
    let program = lookup_program(name)?;
    let report = analyze(&program.build());
    for line in report.lines() {
        handler.emit(&line);
    }
    Ok(report)
}
