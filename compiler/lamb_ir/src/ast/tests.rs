use crate::build::{
    add, and, assign, boolean, breakpoint, call, div, eq, function, gt, if_else, int, lambda, lt,
    mul, not, or, pass, print, seq, sub, var, while_loop,
};
use crate::Value;
use pretty_assertions::assert_eq;

#[test]
fn test_expr_display() {
    assert_eq!(add(int(1), mul(var("x"), int(2))).to_string(), "(1 + (x * 2))");
    assert_eq!(sub(int(4), div(int(8), int(2))).to_string(), "(4 - (8 / 2))");
    assert_eq!(
        or(and(boolean(true), var("p")), boolean(false)).to_string(),
        "((true && p) || false)"
    );
    assert_eq!(eq(var("a"), int(0)).to_string(), "(a == 0)");
    assert_eq!(lt(var("a"), gt(int(1), int(2))).to_string(), "(a < (1 > 2))");
    assert_eq!(lambda(["a", "b"], var("b")).to_string(), "fn(a, b) => b");
}

#[test]
fn test_not_renders_as_negation() {
    assert_eq!(not(var("done")).to_string(), "!done");
}

#[test]
fn test_stmt_display_indents_blocks() {
    let program = seq([
        assign("n", int(2)),
        function("inc", ["x"], add(var("x"), int(1))),
        while_loop(
            gt(var("n"), int(0)),
            seq([
                call("inc", [Value::Int(1)], "r"),
                if_else(eq(var("n"), int(1)), breakpoint(), print("n")),
                assign("n", sub(var("n"), int(1))),
            ]),
        ),
        if_else(boolean(false), pass(), print("n")),
    ]);

    let expected = "\
n = 2
fn inc(x) = (x + 1)
while (n > 0) {
    r = inc(1)
    if (n == 1) {
        break
    } else {
        print n
    }
    n = (n - 1)
}
if false {
    pass
} else {
    print n
}
";
    assert_eq!(program.to_string(), expected);
}

#[test]
fn test_if_without_else_omits_else_block() {
    let stmt = if_else(var("p"), print("p"), pass());
    assert_eq!(stmt.to_string(), "if p {\n    print p\n}\n");
}

// Deep trees. Dropping or rendering these must not exhaust the stack.

const DEEP: usize = 200_000;

#[test]
fn test_drop_deep_expressions() {
    let mut right = int(0);
    let mut left = int(0);
    for _ in 0..DEEP {
        right = add(int(1), right);
        left = sub(left, var("x"));
    }
    drop(right);
    drop(left);

    let mut nested = int(0);
    for _ in 0..DEEP {
        nested = lambda(["x"], not(nested));
    }
    drop(nested);
}

#[test]
fn test_drop_deep_closure_constants() {
    let mut expr = int(0);
    for _ in 0..DEEP {
        expr = crate::Expr::Const(Value::closure(Vec::new(), expr));
    }
    drop(expr);
}

#[test]
fn test_drop_deep_statements() {
    let mut right = pass();
    let mut left = pass();
    let mut branches = pass();
    let mut loops = pass();
    for _ in 0..DEEP {
        right = print("x").then(right);
        left = left.then(print("x"));
        branches = if_else(boolean(true), branches, breakpoint());
        loops = while_loop(boolean(false), loops);
    }
    drop(right);
    drop(left);
    drop(branches);
    drop(loops);
}

#[test]
fn test_display_deep_trees() {
    let mut left = pass();
    for _ in 0..DEEP {
        left = left.then(print("x"));
    }
    let rendered = left.to_string();
    assert_eq!(rendered.lines().count(), DEEP + 1);
    assert!(rendered.starts_with("pass\nprint x\n"));

    let mut expr = int(0);
    for _ in 0..DEEP {
        expr = add(int(1), expr);
    }
    let rendered = expr.to_string();
    assert!(rendered.starts_with("(1 + (1 + "));
    assert!(rendered.ends_with("0))"));
}
