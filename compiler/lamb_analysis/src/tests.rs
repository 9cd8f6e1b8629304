use super::*;
use lamb_ir::build::{
    add, assign, breakpoint, call, function, gt, if_else, int, lambda, pass, print, seq, sub, var,
    while_loop,
};
use lamb_ir::Value;
use pretty_assertions::assert_eq;

fn names(list: &[&str]) -> Vec<Name> {
    list.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn test_assigned_then_printed_is_used() {
    let report = analyze(&seq([assign("a", int(1)), print("a")]));
    assert!(report.unused.is_empty());
    assert_eq!(report.ref_count("a"), Some(1));
    assert!(report.referenced_before_init.is_empty());
}

#[test]
fn test_print_before_assignment() {
    let report = analyze(&print("b"));
    assert_eq!(report.referenced_before_init, names(&["b"]));
    assert!(report.unused.is_empty());
    assert_eq!(report.ref_count("b"), None);
}

#[test]
fn test_reassignment_resets_count() {
    let report = analyze(&seq([
        assign("a", int(1)),
        print("a"),
        print("a"),
        assign("a", int(2)),
    ]));
    assert_eq!(report.ref_count("a"), Some(0));
    assert_eq!(report.unused, names(&["a"]));
}

#[test]
fn test_assignment_scans_value_before_binding() {
    // `x = x + 1` reads x before it has ever been assigned.
    let report = analyze(&assign("x", add(var("x"), int(1))));
    assert_eq!(report.referenced_before_init, names(&["x"]));
    assert_eq!(report.unused, names(&["x"]));
}

#[test]
fn test_before_init_keeps_duplicates_in_order() {
    let report = analyze(&seq([
        print("z"),
        assign("a", add(var("y"), var("z"))),
        print("y"),
    ]));
    assert_eq!(report.referenced_before_init, names(&["z", "y", "z", "y"]));
    assert_eq!(report.unused, names(&["a"]));
}

#[test]
fn test_unused_is_sorted() {
    let report = analyze(&seq([
        assign("zeta", int(1)),
        assign("alpha", int(2)),
        assign("mid", int(3)),
    ]));
    assert_eq!(report.unused, names(&["alpha", "mid", "zeta"]));
}

#[test]
fn test_if_and_while_scan_condition_and_bodies() {
    let report = analyze(&seq([
        assign("n", int(3)),
        assign("hits", int(0)),
        while_loop(
            gt(var("n"), int(0)),
            assign("n", sub(var("n"), int(1))),
        ),
        if_else(gt(var("n"), int(0)), print("hits"), print("missing")),
    ]));
    // The loop body reassigns `n`, and the later condition reads it once.
    assert_eq!(report.ref_count("n"), Some(1));
    assert_eq!(report.ref_count("hits"), Some(1));
    assert_eq!(report.referenced_before_init, names(&["missing"]));
    assert!(report.unused.is_empty());
}

#[test]
fn test_function_bodies_are_scanned_but_names_untracked() {
    let report = analyze(&seq([
        assign("scale", int(2)),
        function("f", ["p"], add(var("p"), var("scale"))),
    ]));
    assert_eq!(report.ref_count("scale"), Some(1));
    assert_eq!(report.ref_count("f"), None);
    // Parameters are never assigned.
    assert_eq!(report.referenced_before_init, names(&["p"]));
}

#[test]
fn test_lambda_bodies_are_scanned() {
    let report = analyze(&seq([
        assign("k", int(1)),
        assign("g", lambda(["v"], add(var("v"), var("k")))),
    ]));
    assert_eq!(report.ref_count("k"), Some(1));
    assert_eq!(report.unused, names(&["g"]));
    assert_eq!(report.referenced_before_init, names(&["v"]));
}

#[test]
fn test_calls_are_not_visited() {
    let report = analyze(&seq([
        assign("f", lambda(["v"], int(0))),
        call("f", [Value::Int(1)], "result"),
        call("undefined", Vec::new(), "other"),
    ]));
    assert_eq!(report.ref_count("f"), Some(0));
    assert_eq!(report.ref_count("result"), None);
    assert_eq!(report.unused, names(&["f"]));
    assert!(report.referenced_before_init.is_empty());
}

#[test]
fn test_break_and_pass_are_noops() {
    assert_eq!(analyze(&seq([breakpoint(), pass()])), Analyzer::new().finish());
}

#[test]
fn test_incremental_scanning() {
    let mut analyzer = Analyzer::new();
    analyzer.scan_stmt(&assign("a", int(1)));
    analyzer.scan_expr(&add(var("a"), var("a")));
    assert_eq!(analyzer.ref_count("a"), Some(2));
    analyzer.scan_stmt(&assign("a", int(2)));
    assert_eq!(analyzer.ref_count("a"), Some(0));
}

#[test]
fn test_report_lines() {
    let report = analyze(&seq([assign("a", int(1)), print("b"), print("c")]));
    assert_eq!(
        report.lines(),
        [
            "Unused variables: [a]".to_owned(),
            "Referenced before initialization: [b, c]".to_owned(),
        ]
    );
    assert_eq!(
        report.to_string(),
        "λ> Unused variables: [a]\nλ> Referenced before initialization: [b, c]\n"
    );
}
