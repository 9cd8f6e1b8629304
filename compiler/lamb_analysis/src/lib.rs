//! Static reference counting over Lamb programs.
//!
//! A single forward walk over the syntax tree that never evaluates anything.
//! It answers two questions:
//! - which assigned variables are never read after their last assignment
//!   ("unused variables")
//! - which variables are read before any assignment to them has been seen
//!   ("referenced before initialization")
//!
//! # Counting rules
//!
//! Every assignment resets the name's count to 0, so a later assignment
//! discards the reads of the earlier one. A read of a name that has a count
//! increments it; a read of a name that has never been assigned is appended
//! to the before-initialization list instead (duplicates kept, in encounter
//! order).
//!
//! The walk is flow-insensitive: both branches of an `if` are scanned in
//! order, and a `while` body is scanned once.
//!
//! Function names are not tracked. A function body is scanned for reads,
//! and since parameters are never assigned, reads of parameters inside the
//! body land in the before-initialization list. `Call` statements are not
//! visited at all, so neither the function name nor the result binding
//! appears in the report.

use std::fmt;

use rustc_hash::FxHashMap;

use lamb_ir::{Expr, Name, Stmt, OUTPUT_PREFIX};
use lamb_stack::ensure_sufficient_stack;

/// Accumulated state of one analysis pass.
#[derive(Debug, Default)]
pub struct Analyzer {
    /// Reads since the most recent assignment, per assigned name.
    ref_counts: FxHashMap<Name, u32>,
    /// Names read before any assignment was seen, in encounter order.
    before_init: Vec<Name>,
}

impl Analyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record every variable read in `expr`.
    pub fn scan_expr(&mut self, expr: &Expr) {
        ensure_sufficient_stack(|| match expr {
            Expr::Const(_) => {}
            Expr::Arith(_, lhs, rhs) | Expr::Bool(_, lhs, rhs) | Expr::Compare(_, lhs, rhs) => {
                self.scan_expr(lhs);
                self.scan_expr(rhs);
            }
            Expr::Var(name) => self.record_read(name),
            Expr::Lambda { body, .. } => self.scan_expr(body),
        });
    }

    /// Record the reads and assignments made by `stmt`.
    pub fn scan_stmt(&mut self, stmt: &Stmt) {
        let mut current = stmt;
        loop {
            match current {
                Stmt::Assign { name, value } => {
                    self.scan_expr(value);
                    self.ref_counts.insert(name.clone(), 0);
                    return;
                }
                Stmt::Function { body, .. } => {
                    self.scan_expr(body);
                    return;
                }
                Stmt::Print(name) => {
                    self.record_read(name);
                    return;
                }
                Stmt::Sequence(first, second) => {
                    ensure_sufficient_stack(|| self.scan_stmt(first));
                    current = &**second;
                }
                Stmt::If {
                    cond,
                    then_branch,
                    else_branch,
                } => {
                    self.scan_expr(cond);
                    ensure_sufficient_stack(|| self.scan_stmt(then_branch));
                    current = &**else_branch;
                }
                Stmt::While { cond, body } => {
                    self.scan_expr(cond);
                    current = &**body;
                }
                Stmt::Call { .. } | Stmt::Break | Stmt::Pass => return,
            }
        }
    }

    fn record_read(&mut self, name: &str) {
        match self.ref_counts.get_mut(name) {
            Some(count) => *count = count.saturating_add(1),
            None => {
                tracing::trace!(name, "read before initialization");
                self.before_init.push(name.to_owned());
            }
        }
    }

    /// Current read count for `name`, if it has been assigned.
    pub fn ref_count(&self, name: &str) -> Option<u32> {
        self.ref_counts.get(name).copied()
    }

    /// Produce the report.
    pub fn finish(self) -> AnalysisReport {
        let mut unused: Vec<Name> = self
            .ref_counts
            .iter()
            .filter(|(_, count)| **count == 0)
            .map(|(name, _)| name.clone())
            .collect();
        unused.sort_unstable();

        AnalysisReport {
            unused,
            referenced_before_init: self.before_init,
            ref_counts: self.ref_counts,
        }
    }
}

/// Run the analyzer over a whole program.
#[tracing::instrument(level = "debug", skip_all)]
pub fn analyze(program: &Stmt) -> AnalysisReport {
    let mut analyzer = Analyzer::new();
    analyzer.scan_stmt(program);
    let report = analyzer.finish();
    tracing::debug!(
        unused = report.unused.len(),
        before_init = report.referenced_before_init.len(),
        "analysis finished"
    );
    report
}

/// Result of an analysis pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisReport {
    /// Assigned names whose final read count is 0, sorted.
    pub unused: Vec<Name>,
    /// Names read before any assignment, in encounter order with duplicates.
    pub referenced_before_init: Vec<Name>,
    ref_counts: FxHashMap<Name, u32>,
}

impl AnalysisReport {
    /// Final read count for `name`, if it was ever assigned.
    pub fn ref_count(&self, name: &str) -> Option<u32> {
        self.ref_counts.get(name).copied()
    }

    /// The two report lines, without the output prefix.
    pub fn lines(&self) -> [String; 2] {
        [
            format!("Unused variables: [{}]", self.unused.join(", ")),
            format!(
                "Referenced before initialization: [{}]",
                self.referenced_before_init.join(", ")
            ),
        ]
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{OUTPUT_PREFIX}{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
