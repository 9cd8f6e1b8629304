//! Stack growth for recursive walks over Lamb syntax trees.
//!
//! Programs are built in Rust code, so nothing bounds how deeply an `Expr`
//! or a left-nested `Sequence` can nest. The evaluator, the interpreter, and
//! the analyzer wrap their recursive steps in [`ensure_sufficient_stack`],
//! which moves onto a fresh heap-allocated stack segment when the current
//! one runs low.
//!
//! On `wasm32` the guard is a plain call.

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone is left.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
