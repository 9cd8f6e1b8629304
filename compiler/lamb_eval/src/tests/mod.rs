//! Crate-level tests for expression evaluation and operator dispatch.

mod eval_tests;
