//! Tests for expression evaluation.

#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use crate::errors::EvalError;
use crate::{evaluate, Environment};
use lamb_ir::build::{
    add, and, boolean, div, double, eq, gt, int, lambda, lt, mul, not, or, sub, var,
};
use lamb_ir::Value;
use pretty_assertions::assert_eq;

fn env_with(pairs: &[(&str, Value)]) -> Environment {
    pairs
        .iter()
        .map(|(name, value)| (*name, value.clone()))
        .collect()
}

#[test]
fn test_literals_evaluate_to_themselves() {
    let env = Environment::new();
    assert_eq!(evaluate(&int(7), &env).unwrap(), Value::Int(7));
    assert_eq!(evaluate(&boolean(false), &env).unwrap(), Value::Bool(false));
    assert_eq!(evaluate(&double(1.5), &env).unwrap(), Value::Double(1.5));
}

#[test]
fn test_nested_arithmetic() {
    let env = env_with(&[("x", Value::Int(6))]);
    // (x * 2 - 4) / 2
    let expr = div(sub(mul(var("x"), int(2)), int(4)), int(2));
    assert_eq!(evaluate(&expr, &env).unwrap(), Value::Int(4));
    assert_eq!(evaluate(&add(var("x"), int(1)), &env).unwrap(), Value::Int(7));
}

#[test]
fn test_double_is_not_arithmetic() {
    let env = Environment::new();
    assert_eq!(
        evaluate(&add(double(1.0), int(1)), &env),
        Err(EvalError::TypeError("type error in arithmetic expression"))
    );
}

#[test]
fn test_unknown_variable_has_no_default() {
    let env = Environment::new();
    assert_eq!(
        evaluate(&var("ghost"), &env),
        Err(EvalError::UnknownVariable("ghost".into()))
    );
    assert_eq!(
        EvalError::UnknownVariable("ghost".into()).to_string(),
        "unknown variable: ghost"
    );
}

#[test]
fn test_boolean_logic_and_negation() {
    let env = env_with(&[("p", Value::Bool(true)), ("q", Value::Bool(false))]);
    assert_eq!(evaluate(&and(var("p"), var("q")), &env).unwrap(), Value::Bool(false));
    assert_eq!(evaluate(&or(var("p"), var("q")), &env).unwrap(), Value::Bool(true));
    assert_eq!(evaluate(&not(var("q")), &env).unwrap(), Value::Bool(true));
    assert_eq!(evaluate(&not(not(var("q"))), &env).unwrap(), Value::Bool(false));
}

#[test]
fn test_not_requires_bool() {
    assert_eq!(
        evaluate(&not(int(0)), &Environment::new()),
        Err(EvalError::TypeError("type error in boolean expression"))
    );
}

#[test]
fn test_no_short_circuit() {
    // The right side is evaluated even when the left decides the result.
    let env = Environment::new();
    assert_eq!(
        evaluate(&and(boolean(false), var("unbound")), &env),
        Err(EvalError::UnknownVariable("unbound".into()))
    );
    assert_eq!(
        evaluate(&or(boolean(true), int(1)), &env),
        Err(EvalError::TypeError("type error in boolean expression"))
    );
}

#[test]
fn test_left_operand_error_reported_first() {
    let env = Environment::new();
    assert_eq!(
        evaluate(&add(var("left"), var("right")), &env),
        Err(EvalError::UnknownVariable("left".into()))
    );
}

#[test]
fn test_comparisons_produce_bool() {
    let env = env_with(&[("x", Value::Int(5))]);
    assert_eq!(evaluate(&gt(var("x"), int(0)), &env).unwrap(), Value::Bool(true));
    assert_eq!(evaluate(&lt(var("x"), int(0)), &env).unwrap(), Value::Bool(false));
    assert_eq!(evaluate(&eq(var("x"), int(5)), &env).unwrap(), Value::Bool(true));
}

#[test]
fn test_lambda_evaluates_to_closure_without_capture() {
    let env = env_with(&[("y", Value::Int(1))]);
    let value = evaluate(&lambda(["a"], add(var("a"), var("y"))), &env).unwrap();
    assert_eq!(
        value,
        Value::closure(vec!["a".into()], add(var("a"), var("y")))
    );
}

#[test]
fn test_division_by_zero_through_variables() {
    let env = env_with(&[("zero", Value::Int(0))]);
    assert_eq!(
        evaluate(&div(int(10), var("zero")), &env),
        Err(EvalError::DivisionByZero)
    );
}

#[test]
fn test_deep_expression() {
    let mut expr = int(0);
    for _ in 0..100_000 {
        expr = add(int(1), expr);
    }
    assert_eq!(evaluate(&expr, &Environment::new()).unwrap(), Value::Int(100_000));
}
