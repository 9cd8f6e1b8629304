//! Destinations for interpreter output.
//!
//! Every line the interpreter emits carries [`OUTPUT_PREFIX`] so it can be
//! told apart from other console noise. Output can go to:
//! - stdout (the `lamb` binary)
//! - a buffer (tests, and anything that wants to inspect output)
//! - nowhere (benchmarks)
//!
//! Enum dispatch keeps the set closed and avoids a vtable on a path hit once
//! per `print`.

use std::io::{self, Write};

use lamb_ir::OUTPUT_PREFIX;
use parking_lot::Mutex;

/// Writes prefixed lines to stdout.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    pub fn emit(&self, msg: &str) {
        println!("{OUTPUT_PREFIX}{msg}");
    }

    pub fn flush(&self) -> io::Result<()> {
        io::stdout().flush()
    }
}

/// Captures prefixed lines in memory.
#[derive(Default)]
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&self, msg: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(OUTPUT_PREFIX);
        buf.push_str(msg);
        buf.push('\n');
    }

    /// Everything emitted so far, prefixes included.
    pub fn get_output(&self) -> String {
        self.buffer.lock().clone()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

/// Print handler implementation using enum dispatch.
pub enum PrintHandlerImpl {
    Stdout(StdoutPrintHandler),
    Buffer(BufferPrintHandler),
    /// Discards everything.
    Silent,
}

impl PrintHandlerImpl {
    /// Emit one line of output behind the output prefix.
    pub fn emit(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.emit(msg),
            Self::Buffer(h) => h.emit(msg),
            Self::Silent => {}
        }
    }

    /// Make sure everything emitted so far is visible. Called before the
    /// breakpoint loop blocks on input.
    pub fn flush(&self) -> io::Result<()> {
        match self {
            Self::Stdout(h) => h.flush(),
            Self::Buffer(_) | Self::Silent => Ok(()),
        }
    }

    /// Captured output. Empty for handlers that do not capture.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(h) => h.get_output(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }

    /// Captured output as lines with the prefix stripped.
    pub fn messages(&self) -> Vec<String> {
        self.get_output()
            .lines()
            .map(|line| line.strip_prefix(OUTPUT_PREFIX).unwrap_or(line).to_owned())
            .collect()
    }

    pub fn clear(&self) {
        if let Self::Buffer(h) = self {
            h.clear();
        }
    }
}

/// Shared print handler that can be passed around.
pub type SharedPrintHandler = std::sync::Arc<PrintHandlerImpl>;

/// Create a stdout print handler.
pub fn stdout_handler() -> SharedPrintHandler {
    std::sync::Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

/// Create a buffer print handler for capturing output.
pub fn buffer_handler() -> SharedPrintHandler {
    std::sync::Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

/// Create a print handler that discards all output.
pub fn silent_handler() -> SharedPrintHandler {
    std::sync::Arc::new(PrintHandlerImpl::Silent)
}
