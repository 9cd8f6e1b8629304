//! Built-in program catalog.
//!
//! Each entry builds a fresh syntax tree on demand.

use lamb_ir::build::{
    add, and, assign, boolean, breakpoint, call, div, eq, function, gt, if_else, int, lambda, lt,
    mul, not, or, print, seq, sub, var, while_loop,
};
use lamb_ir::{Stmt, Value};

/// A named program the driver can run, analyze, or show.
#[derive(Clone, Copy, Debug)]
pub struct Program {
    pub name: &'static str,
    pub description: &'static str,
    pub build: fn() -> Stmt,
}

impl Program {
    pub fn build(&self) -> Stmt {
        (self.build)()
    }
}

const CATALOG: &[Program] = &[
    Program {
        name: "countdown",
        description: "while loop printing 3, 2, 1",
        build: countdown,
    },
    Program {
        name: "closures",
        description: "named functions, lambdas, and dynamic lookup at call time",
        build: closures,
    },
    Program {
        name: "branches",
        description: "if/else with comparisons and boolean operators",
        build: branches,
    },
    Program {
        name: "inspect",
        description: "stops at a breakpoint so variables can be inspected",
        build: inspect,
    },
    Program {
        name: "analysis",
        description: "unused bindings and reads before initialization",
        build: analysis,
    },
    Program {
        name: "failure",
        description: "division by zero ends the program with an uncaught exception",
        build: failure,
    },
];

/// Every catalog entry, in display order.
pub fn catalog() -> &'static [Program] {
    CATALOG
}

/// Look up a catalog entry by name.
pub fn find(name: &str) -> Option<&'static Program> {
    CATALOG.iter().find(|program| program.name == name)
}

fn countdown() -> Stmt {
    seq([
        assign("n", int(3)),
        while_loop(
            gt(var("n"), int(0)),
            seq([print("n"), assign("n", sub(var("n"), int(1)))]),
        ),
        assign("done", boolean(true)),
    ])
}

fn closures() -> Stmt {
    seq([
        function("add", ["a", "b"], add(var("a"), var("b"))),
        call("add", [Value::Int(2), Value::Int(3)], "sum"),
        assign("scale", int(10)),
        // `scale` is looked up when `scaled` runs, not when it is defined.
        function("scaled", ["x"], mul(var("x"), var("scale"))),
        call("scaled", [Value::Int(4)], "big"),
        assign("double", lambda(["v"], add(var("v"), var("v")))),
        call("double", [Value::Int(21)], "twice"),
    ])
}

fn branches() -> Stmt {
    seq([
        assign("x", int(7)),
        if_else(
            gt(var("x"), int(5)),
            assign("label", int(1)),
            assign("label", int(0)),
        ),
        assign("even", boolean(false)),
        if_else(
            or(not(var("even")), eq(var("x"), int(0))),
            print("x"),
            print("label"),
        ),
        assign("small", and(lt(var("x"), int(3)), not(var("even")))),
    ])
}

fn inspect() -> Stmt {
    seq([
        assign("a", int(1)),
        assign("b", boolean(true)),
        breakpoint(),
        assign("c", add(var("a"), int(1))),
        print("c"),
    ])
}

fn analysis() -> Stmt {
    seq([
        assign("used", int(1)),
        assign("unused", int(2)),
        print("used"),
        print("ghost"),
        assign("total", add(var("used"), var("later"))),
        assign("later", int(3)),
    ])
}

fn failure() -> Stmt {
    seq([
        assign("x", int(10)),
        assign("y", int(0)),
        print("x"),
        assign("z", div(var("x"), var("y"))),
        print("z"),
    ])
}
