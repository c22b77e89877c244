use semset::{
    error::RuntimeError,
    set::Set,
    value::{binary::BinaryOperator, core::Value, vector::Vector3},
};

fn set(items: impl IntoIterator<Item = Value>) -> Value {
    Value::set_of(items)
}

fn int_set(items: &[i64]) -> Value {
    set(items.iter().map(|&i| Value::from(i)))
}

fn assert_invalid_argument(result: Result<impl std::fmt::Debug, RuntimeError>) {
    match result {
        Err(RuntimeError::InvalidArgumentType { .. }) => {},
        other => panic!("Expected an invalid argument type error, got {other:?}"),
    }
}

#[test]
fn structural_equality_on_values() {
    assert_eq!(Value::from(2), Value::from(2.0));
    assert_eq!(Value::from(f64::NAN), Value::from(f64::NAN));
    assert_eq!(Value::from("hi"), Value::from(String::from("hi")));
    assert_eq!(Value::from(vec![Value::from(1), Value::Nil]),
               Value::from(vec![Value::from(1.0), Value::Nil]));
    assert_eq!(int_set(&[1, 2]), int_set(&[2, 1]));

    assert_ne!(Value::from(1), Value::from(true));
    assert_ne!(Value::from("1"), Value::from(1));
    assert_ne!(Value::from(i64::MAX), Value::from(i64::MAX as f64));
}

#[test]
fn large_integers_equal_reals_exactly() {
    for power in [53, 60, 62] {
        let integer = 1i64 << power;
        let real = 2f64.powi(power);

        assert_eq!(Value::from(integer), Value::from(real), "2^{power}");
        assert_eq!(Value::from(-integer), Value::from(-real), "-2^{power}");
        assert_ne!(Value::from(integer + 1), Value::from(real), "2^{power} + 1");
    }

    assert_eq!(Value::from(i64::MIN), Value::from(-2f64.powi(63)));
    assert_ne!(Value::from(i64::MAX), Value::from(i64::MAX as f64));
    assert_ne!(Value::from(i64::MAX), Value::from(f64::INFINITY));
    assert_ne!(Value::from(0), Value::from(f64::NAN));

    let members = set([Value::from(1i64 << 60), Value::from(2f64.powi(60))]);
    let Value::Set(inner) = &members else {
        panic!("Expected a set");
    };
    assert_eq!(inner.len(), 1);
}

#[test]
fn value_sets_collapse_equal_content() {
    let members = set([Value::from(1),
                       Value::from(1.0),
                       Value::from(Vector3::new(0.0, 0.0, 1.0)),
                       Value::from(Vector3::new(0.0, 0.0, 1.0)),
                       Value::from(vec![Value::from("a")]),
                       Value::from(vec![Value::from("a")]),
                       int_set(&[1, 2]),
                       int_set(&[2, 1])]);

    let Value::Set(inner) = &members else {
        panic!("Expected a set");
    };
    assert_eq!(inner.len(), 4);
}

#[test]
fn nan_is_a_single_member() {
    let mut reals: Set<Value> = Set::new();
    reals.add(Value::from(f64::NAN));
    reals.add(Value::from(f64::NAN));

    assert_eq!(reals.len(), 1);
    assert!(reals.contains(&Value::from(f64::NAN)));
}

#[test]
fn operators_dispatch_to_set_operations() {
    let a = int_set(&[1, 2, 3]);
    let b = int_set(&[2, 3, 4]);

    assert_eq!(a.eval_set_op(BinaryOperator::Add, &b).unwrap(), int_set(&[1, 2, 3, 4]));
    assert_eq!(a.eval_set_op(BinaryOperator::Sub, &b).unwrap(), int_set(&[1]));
    assert_eq!(a.eval_set_op(BinaryOperator::Div, &b).unwrap(), int_set(&[1]));
    assert_eq!(a.eval_set_op(BinaryOperator::Mul, &b).unwrap(), int_set(&[2, 3]));
}

#[test]
fn non_set_operands_are_rejected() {
    let a = int_set(&[1]);

    assert_invalid_argument(a.eval_set_op(BinaryOperator::Add, &Value::from(1)));
    assert_invalid_argument(Value::Nil.eval_set_op(BinaryOperator::Mul, &a));
    assert_invalid_argument(Value::from(vec![Value::from(1)]).eval_set_op(BinaryOperator::Sub,
                                                                           &a));
}

#[test]
fn rejection_names_the_operation_and_types() {
    let err = int_set(&[1]).eval_set_op(BinaryOperator::Mul, &Value::from("x"))
                           .unwrap_err();

    assert_eq!(err,
               RuntimeError::InvalidArgumentType { operation: "intersection",
                                                   expected:  "set",
                                                   found:     "string", });
    assert_eq!(err.to_string(),
               "Invalid argument type for intersection: expected set, found string.");
}

#[test]
fn edit_distance_on_values() {
    assert_eq!(Value::from("cot").edit_distance(&Value::from("cost")).unwrap(), 1);

    let a = Value::from(vec![Value::from(1), Value::from(2), Value::from(3)]);
    let b = Value::from(vec![Value::from(1.0), Value::from(3)]);
    assert_eq!(a.edit_distance(&b).unwrap(), 1);
}

#[test]
fn edit_distance_rejects_non_sequences() {
    assert_invalid_argument(Value::from(1).edit_distance(&Value::from(2)));
    assert_invalid_argument(Value::from("abc").edit_distance(&Value::Nil));
    assert_invalid_argument(Value::from("abc").edit_distance(&Value::from(vec![Value::from("a")])));
    assert_invalid_argument(int_set(&[1]).edit_distance(&int_set(&[1])));
}

#[test]
fn display_of_values() {
    assert_eq!(Value::Nil.to_string(), "nil");
    assert_eq!(Value::from(vec![Value::from(1), Value::from("b")]).to_string(), "[1, b]");
    assert_eq!(Value::from(Vector3::new(1.0, 2.5, -3.0)).to_string(), "(1, 2.5, -3)");
    assert_eq!(int_set(&[3, 1]).to_string(), "{3, 1}");
}

#[test]
fn type_names() {
    assert_eq!(Value::Nil.type_name(), "nil");
    assert_eq!(Value::from(true).type_name(), "boolean");
    assert_eq!(Value::from(1).type_name(), "integer");
    assert_eq!(Value::from(1.5).type_name(), "real");
    assert_eq!(Value::from("s").type_name(), "string");
    assert_eq!(Value::from(Vector3::new(0.0, 0.0, 0.0)).type_name(), "vector");
    assert_eq!(Value::from(Vec::new()).type_name(), "array");
    assert_eq!(int_set(&[]).type_name(), "set");
}

#[test]
fn vector_arithmetic() {
    let a = Vector3::new(1.0, 2.0, 3.0);
    let b = Vector3::new(4.0, 5.0, 6.0);

    assert_eq!(a + b, Vector3::new(5.0, 7.0, 9.0));
    assert_eq!(b - a, Vector3::new(3.0, 3.0, 3.0));
    assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
    assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));
    assert_eq!(a.dot(&b), 32.0);
    assert_eq!(semset::value::vector::ZERO.length(), 0.0);
}
