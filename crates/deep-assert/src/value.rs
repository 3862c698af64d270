//! Dynamic value model for assertion inputs.
//!
//! Assertion inputs are arbitrarily shaped — scalars, ordered sequences,
//! nested mappings — so the comparator operates over an explicit tagged
//! union rather than probing types at every step. A [`Value`] is built once
//! per input at the boundary (usually via `From<serde_json::Value>`) and is
//! read-only during comparison.

use indexmap::IndexMap;
use serde_json::Value as JsonValue;
use std::fmt;

/// A dynamically-typed assertion input.
///
/// `Undefined` has no JSON spelling and is constructed directly; it is the
/// result of resolving a missing key and may appear as a mapping member.
/// Numbers are `f64` — a single number type, NaN representable.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Num(f64),
    Str(String),
    Arr(Vec<Value>),
    Obj(IndexMap<String, Value>),
}

pub(crate) static UNDEFINED: Value = Value::Undefined;

impl Value {
    /// The dynamic type word: `"undefined"`, `"object"`, `"boolean"`,
    /// `"number"` or `"string"`. Null, sequences and mappings all report
    /// `"object"`.
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null | Value::Arr(_) | Value::Obj(_) => "object",
            Value::Bool(_) => "boolean",
            Value::Num(_) => "number",
            Value::Str(_) => "string",
        }
    }

    /// The constructing-type name used by type-mismatch diagnostics.
    ///
    /// `Null` and `Undefined` have no constructor; they render as their own
    /// names.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "Boolean",
            Value::Num(_) => "Number",
            Value::Str(_) => "String",
            Value::Arr(_) => "Array",
            Value::Obj(_) => "Object",
        }
    }

    /// Whether the value carries own enumerable properties to descend into.
    pub fn is_structured(&self) -> bool {
        matches!(self, Value::Arr(_) | Value::Obj(_))
    }

    /// Own enumerable keys: mapping keys in insertion order, sequence
    /// indices as decimal strings. Every other variant has none.
    pub fn keys(&self) -> Vec<String> {
        match self {
            Value::Obj(map) => map.keys().cloned().collect(),
            Value::Arr(items) => (0..items.len()).map(|i| i.to_string()).collect(),
            _ => Vec::new(),
        }
    }

    /// Resolves `key` against a mapping or sequence; anything else (or a
    /// missing key) resolves to `Undefined`.
    pub fn get(&self, key: &str) -> &Value {
        match self {
            Value::Obj(map) => map.get(key).unwrap_or(&UNDEFINED),
            Value::Arr(items) => key
                .parse::<usize>()
                .ok()
                .and_then(|index| items.get(index))
                .unwrap_or(&UNDEFINED),
            _ => &UNDEFINED,
        }
    }

    /// Whether `key` is an own property of this value.
    pub fn has_own(&self, key: &str) -> bool {
        match self {
            Value::Obj(map) => map.contains_key(key),
            Value::Arr(items) => key
                .parse::<usize>()
                .map(|index| index < items.len())
                .unwrap_or(false),
            _ => false,
        }
    }

    fn flatten_into<'a>(&'a self, out: &mut Vec<&'a Value>) {
        match self {
            Value::Arr(items) => {
                for item in items {
                    item.flatten_into(out);
                }
            }
            other => out.push(other),
        }
    }
}

/// Recursively collapses nested sequences into one flat ordered sequence,
/// arbitrary depth. Mappings are not descended into.
pub fn flatten(items: &[Value]) -> Vec<&Value> {
    let mut out = Vec::new();
    for item in items {
        item.flatten_into(&mut out);
    }
    out
}

/// Structural deep equality.
///
/// Mapping comparison is key-set symmetric and order-independent; sequence
/// comparison is order-dependent. NaN equals NaN, so equality is reflexive
/// for every value.
pub fn deep_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined, Value::Undefined) => true,
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Num(a), Value::Num(b)) => num_eq(*a, *b),
        (Value::Str(a), Value::Str(b)) => a == b,
        (Value::Arr(arr_a), Value::Arr(arr_b)) => {
            arr_a.len() == arr_b.len()
                && arr_a.iter().zip(arr_b.iter()).all(|(x, y)| deep_eq(x, y))
        }
        (Value::Obj(obj_a), Value::Obj(obj_b)) => {
            if obj_a.len() != obj_b.len() {
                return false;
            }
            obj_a.iter().all(|(key, val_a)| match obj_b.get(key) {
                Some(val_b) => deep_eq(val_a, val_b),
                None => false,
            })
        }
        // Different types are never equal
        _ => false,
    }
}

/// Strict equality for leaf comparison: same variant, equal scalar payload.
///
/// Two structured values are never strictly equal — reference identity is
/// unobservable across independently built values, so structured leaves
/// always mismatch here and are caught by the recursive passes instead.
pub(crate) fn strict_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined, Value::Undefined) => true,
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Num(a), Value::Num(b)) => num_eq(*a, *b),
        (Value::Str(a), Value::Str(b)) => a == b,
        _ => false,
    }
}

// NaN-equals-NaN; see DESIGN.md.
fn num_eq(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || a == b
}

fn fmt_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // Integer-valued floats render without a fraction: 1, not 1.0.
    if n == n.trunc() && n.abs() < 9_007_199_254_740_992.0 {
        return format!("{}", n as i64);
    }
    format!("{n}")
}

/// Diagnostic string coercion, used inside failure messages.
///
/// Strings render raw (the message templates add their own quotes),
/// sequences render as comma-joined elements with `Null`/`Undefined`
/// rendering empty, and mappings render as `[object Object]`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Num(n) => f.write_str(&fmt_number(*n)),
            Value::Str(s) => f.write_str(s),
            Value::Arr(items) => {
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(",")?;
                    }
                    match item {
                        Value::Null | Value::Undefined => {}
                        other => write!(f, "{other}")?,
                    }
                }
                Ok(())
            }
            Value::Obj(_) => f.write_str("[object Object]"),
        }
    }
}

impl From<JsonValue> for Value {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(n) => Value::Num(n.as_f64().unwrap_or(f64::NAN)),
            JsonValue::String(s) => Value::Str(s),
            JsonValue::Array(items) => Value::Arr(items.into_iter().map(Value::from).collect()),
            JsonValue::Object(map) => Value::Obj(
                map.into_iter()
                    .map(|(key, val)| (key, Value::from(val)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn type_words() {
        assert_eq!(Value::Null.type_of(), "object");
        assert_eq!(Value::Undefined.type_of(), "undefined");
        assert_eq!(Value::from(json!({})).type_of(), "object");
        assert_eq!(Value::from(json!([])).type_of(), "object");
        assert_eq!(Value::from(json!(1)).type_of(), "number");
        assert_eq!(Value::from(json!("a")).type_of(), "string");
        assert_eq!(Value::from(json!(true)).type_of(), "boolean");
    }

    #[test]
    fn type_names() {
        assert_eq!(Value::from(json!([1])).type_name(), "Array");
        assert_eq!(Value::from(json!({"a": 1})).type_name(), "Object");
        assert_eq!(Value::from(json!(1)).type_name(), "Number");
        assert_eq!(Value::from(json!("a")).type_name(), "String");
        assert_eq!(Value::from(json!(false)).type_name(), "Boolean");
        assert_eq!(Value::Null.type_name(), "null");
        assert_eq!(Value::Undefined.type_name(), "undefined");
    }

    #[test]
    fn keys_of_mapping_follow_insertion_order() {
        let v = Value::from(json!({"b": 1, "a": 2, "c": 3}));
        assert_eq!(v.keys(), vec!["b", "a", "c"]);
    }

    #[test]
    fn keys_of_sequence_are_indices() {
        let v = Value::from(json!(["x", "y"]));
        assert_eq!(v.keys(), vec!["0", "1"]);
        assert!(v.has_own("1"));
        assert!(!v.has_own("2"));
    }

    #[test]
    fn scalars_have_no_keys() {
        assert!(Value::from(json!(5)).keys().is_empty());
        assert!(Value::from(json!("abc")).keys().is_empty());
        assert!(Value::Null.keys().is_empty());
        assert!(Value::Undefined.keys().is_empty());
    }

    #[test]
    fn get_resolves_missing_to_undefined() {
        let v = Value::from(json!({"a": 1}));
        assert_eq!(v.get("a"), &Value::Num(1.0));
        assert_eq!(v.get("b"), &Value::Undefined);
        assert_eq!(Value::from(json!(5)).get("a"), &Value::Undefined);
        assert_eq!(Value::Undefined.get("a"), &Value::Undefined);
    }

    #[test]
    fn flatten_collapses_arbitrary_depth() {
        let v = Value::from(json!([1, [2, [3, 4]], 5]));
        if let Value::Arr(items) = &v {
            let flat: Vec<String> = flatten(items).iter().map(|v| v.to_string()).collect();
            assert_eq!(flat, vec!["1", "2", "3", "4", "5"]);
        } else {
            panic!("expected sequence");
        }
    }

    #[test]
    fn flatten_keeps_mappings_opaque() {
        let v = Value::from(json!([1, [{"a": 1}], 2]));
        if let Value::Arr(items) = &v {
            let flat = flatten(items);
            assert_eq!(flat.len(), 3);
            assert!(matches!(flat[1], Value::Obj(_)));
        } else {
            panic!("expected sequence");
        }
    }

    #[test]
    fn display_numbers() {
        assert_eq!(Value::Num(1.0).to_string(), "1");
        assert_eq!(Value::Num(-2.0).to_string(), "-2");
        assert_eq!(Value::Num(1.5).to_string(), "1.5");
        assert_eq!(Value::Num(f64::NAN).to_string(), "NaN");
        assert_eq!(Value::Num(f64::INFINITY).to_string(), "Infinity");
    }

    #[test]
    fn display_sequences_join_elements() {
        assert_eq!(Value::from(json!([1, 2, 3])).to_string(), "1,2,3");
        assert_eq!(Value::from(json!([1, [2, 3]])).to_string(), "1,2,3");
        assert_eq!(Value::from(json!([1, null, 3])).to_string(), "1,,3");
        assert_eq!(Value::from(json!({"a": 1})).to_string(), "[object Object]");
    }

    #[test]
    fn deep_eq_mapping_is_order_independent() {
        let a = Value::from(json!({"a": 1, "b": [2, 3]}));
        let b = Value::from(json!({"b": [2, 3], "a": 1}));
        assert!(deep_eq(&a, &b));
    }

    #[test]
    fn deep_eq_sequence_is_order_dependent() {
        let a = Value::from(json!([1, 2]));
        let b = Value::from(json!([2, 1]));
        assert!(!deep_eq(&a, &b));
    }

    #[test]
    fn deep_eq_nan_is_reflexive() {
        assert!(deep_eq(&Value::Num(f64::NAN), &Value::Num(f64::NAN)));
    }

    #[test]
    fn strict_eq_structured_values_never_match() {
        let a = Value::from(json!({"a": 1}));
        let b = Value::from(json!({"a": 1}));
        assert!(!strict_eq(&a, &b));
        assert!(strict_eq(&Value::Undefined, &Value::Undefined));
        assert!(strict_eq(&Value::Null, &Value::Null));
        assert!(!strict_eq(&Value::Num(0.0), &Value::Bool(false)));
    }
}
