//! Showcase scenario catalog.
//!
//! A fixed suite of expected/actual pairs exercising every comparison
//! outcome: primitive equality and mismatch, type-tag mismatches, sequence
//! length/element/flattening behavior, key-set symmetry, nested path
//! diagnostics, null and NaN handling, and undefined-valued members.

use deep_assert::Value;
use serde_json::json;

/// One showcase assertion: a labelled expected/actual pair.
pub struct Scenario {
    pub message: String,
    pub expected: Value,
    pub actual: Value,
}

fn scenario(message: &str, expected: Value, actual: Value) -> Scenario {
    Scenario {
        message: message.to_string(),
        expected,
        actual,
    }
}

/// Converts a JSON fixture and inserts an undefined-valued member at the
/// front of the mapping.
fn with_leading_undefined(fixture: serde_json::Value, key: &str) -> Value {
    let mut converted = Value::from(fixture);
    if let Value::Obj(map) = &mut converted {
        map.shift_insert(0, key.to_string(), Value::Undefined);
    }
    converted
}

/// The showcase suite, in run order.
pub fn showcase_scenarios() -> Vec<Scenario> {
    let complex = json!({
        "propA": 1,
        "propB": {
            "propA": [1, {"propA": "a", "propB": "b"}, 3],
            "propB": 1,
            "propC": 2
        }
    });
    // Same members as `complex`, reordered keys, one nested leaf changed.
    let complex_changed_leaf = json!({
        "propA": 1,
        "propB": {
            "propB": 1,
            "propA": [1, {"propA": "a", "propB": "c"}, 3],
            "propC": 2
        }
    });
    let complex_missing_nested = json!({
        "propA": 1,
        "propB": {
            "propA": [1, {"propA": "a", "propB": "b"}, 3],
            "propB": 1
        }
    });
    let complex_extra_top = json!({
        "propA": 1,
        "propB": {
            "propA": [1, {"propA": "a", "propB": "b"}, 3],
            "propB": 1
        },
        "propC": 1
    });
    let undefined_member = json!({
        "propB": {
            "propA": [1, {"propA": "a", "propB": "b"}, 3],
            "propB": 1
        }
    });

    vec![
        scenario(
            "Test 01: ",
            Value::from(json!("abc")),
            Value::from(json!("abc")),
        ),
        scenario(
            "Test 02: ",
            Value::from(json!("abcdef")),
            Value::from(json!("abc")),
        ),
        scenario(
            "Test 03: ",
            Value::from(json!(["a"])),
            Value::from(json!({"0": "a"})),
        ),
        scenario(
            "Test 04: ",
            Value::from(json!(["a", "b"])),
            Value::from(json!(["a", "b", "c"])),
        ),
        scenario(
            "Test 05: ",
            Value::from(json!(["a", "b", "c"])),
            Value::from(json!(["a", "b", "c"])),
        ),
        scenario(
            "Test 06: ",
            Value::from(complex.clone()),
            Value::from(complex.clone()),
        ),
        scenario(
            "Test 07: ",
            Value::from(complex.clone()),
            Value::from(complex_changed_leaf),
        ),
        scenario(
            "Test 08: ",
            Value::from(complex),
            Value::from(complex_missing_nested.clone()),
        ),
        scenario("Test 09: ", Value::Null, Value::from(json!({}))),
        scenario(
            "Test 10: ",
            Value::from(json!(["a", "b", "c"])),
            Value::from(json!(["x", "y", "z"])),
        ),
        scenario(
            "Test 11: ",
            Value::from(json!(["a", ["b", "c"]])),
            Value::from(json!(["a", ["b", "c"]])),
        ),
        scenario(
            "Test 12: ",
            Value::from(json!({"propA": 1, "propB": 2, "propC": 1})),
            Value::from(json!({"propA": 1, "propB": 3, "propC": 1})),
        ),
        scenario(
            "Test 13: ",
            Value::from(json!({"propA": 1, "propB": [1, 2, 3], "propC": 1})),
            Value::from(json!({"propA": 1, "propB": [1, 2, 3], "propC": 1})),
        ),
        scenario(
            "Test 14: ",
            with_leading_undefined(undefined_member.clone(), "propA"),
            with_leading_undefined(undefined_member, "propA"),
        ),
        scenario(
            "Test 15: ",
            Value::from(complex_missing_nested),
            Value::from(complex_extra_top),
        ),
        scenario("Test 16: ", Value::Num(f64::NAN), Value::Num(f64::NAN)),
        scenario("Test 17: ", Value::Null, Value::Null),
        scenario("Test 18: ", Value::from(json!(1)), Value::from(json!(1))),
        scenario("Test 19: ", Value::from(json!(2)), Value::from(json!(1))),
        scenario(
            "Test 20: ",
            Value::from(json!(true)),
            Value::from(json!(1)),
        ),
        scenario(
            "Test 21: ",
            Value::from(json!(true)),
            Value::from(json!(true)),
        ),
        scenario(
            "Test 22: ",
            Value::from(json!(true)),
            Value::from(json!(false)),
        ),
    ]
}
