//! Lamb driver library.
//!
//! Lamb has no surface syntax: programs are syntax trees built with
//! [`lamb_ir::build`]. This crate ships a catalog of such programs and the
//! commands the `lamb` binary runs over them.
//!
//! # Modules
//!
//! - `programs`: the named program catalog
//! - `commands`: `run`, `analyze`, `show`, and `list`

pub mod commands;
pub mod programs;

use std::sync::Once;

pub use programs::Program;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Nothing is installed unless `LAMB_LOG` is
/// set, e.g. `LAMB_LOG=lamb_eval=trace`. Logs go to stderr so program output
/// on stdout stays clean.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        if std::env::var_os("LAMB_LOG").is_some() {
            let filter = EnvFilter::from_env("LAMB_LOG");
            let layer = HierarchicalLayer::new(2)
                .with_writer(std::io::stderr)
                .with_targets(true)
                .with_indent_lines(true);
            // Another subscriber may already be installed (embedding, tests).
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init();
        }
    });
}
