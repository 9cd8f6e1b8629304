//! Line sources for the breakpoint loop.
//!
//! The breakpoint loop reads one raw line per prompt. In the binary that
//! line comes from stdin; tests and `--debug-input` feed a script instead.

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Where breakpoint input comes from.
#[derive(Default)]
pub enum DebugInput {
    /// Block on the process's standard input.
    #[default]
    Stdin,
    /// Replay a fixed list of lines, then report end of input.
    Scripted(VecDeque<String>),
}

impl DebugInput {
    /// A scripted source replaying `lines` in order.
    pub fn scripted<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        DebugInput::Scripted(lines.into_iter().map(Into::into).collect())
    }

    /// Read the next line without its line terminator.
    ///
    /// Returns `Ok(None)` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        match self {
            DebugInput::Stdin => {
                let mut line = String::new();
                if io::stdin().lock().read_line(&mut line)? == 0 {
                    return Ok(None);
                }
                let trimmed = line.trim_end_matches(['\n', '\r']).len();
                line.truncate(trimmed);
                Ok(Some(line))
            }
            DebugInput::Scripted(lines) => Ok(lines.pop_front()),
        }
    }
}
