use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_value_display() {
    assert_eq!(Value::Int(-7).to_string(), "-7");
    assert_eq!(Value::Bool(true).to_string(), "true");
    assert_eq!(Value::Double(2.0).to_string(), "2.0");
    assert_eq!(Value::Double(0.25).to_string(), "0.25");
}

#[test]
fn test_closure_display_lists_params() {
    let f = Value::closure(vec!["a".into(), "b".into()], Expr::Var("a".into()));
    assert_eq!(f.to_string(), "<closure(a, b)>");

    let thunk = Value::closure(Vec::new(), Expr::Const(Value::Int(1)));
    assert_eq!(thunk.to_string(), "<closure()>");
}

#[test]
fn test_type_names() {
    assert_eq!(Value::Int(0).type_name(), "Int");
    assert_eq!(Value::Bool(false).type_name(), "Bool");
    assert_eq!(Value::Double(1.5).type_name(), "Double");
    assert_eq!(
        Value::closure(Vec::new(), Expr::Const(Value::Int(0))).type_name(),
        "Closure"
    );
}

#[test]
fn test_from_conversions() {
    assert_eq!(Value::from(3_i64), Value::Int(3));
    assert_eq!(Value::from(false), Value::Bool(false));
    assert_eq!(Value::from(0.5), Value::Double(0.5));
}
