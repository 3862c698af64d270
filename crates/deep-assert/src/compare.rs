//! The comparator: deep-equality checks with diagnostic messages.
//!
//! [`assert_equals`] classifies the expected value and dispatches: null and
//! undefined short-circuit, a type-tag check wins over every structural
//! difference, scalars compare strictly, and structured values run the
//! sequence pass (top-level sequences only), the key-set pass, and the
//! recursive value pass, in that order. The first mismatch is the result.

use crate::error::AssertError;
use crate::path::{segment_for, Path};
use crate::value::{deep_eq, flatten, strict_eq, Value, UNDEFINED};

/// Compares `expected` against `actual`, failing with a diagnostic on the
/// first difference found.
///
/// `message` prefixes every diagnostic. No side effects; each call is
/// independent and reentrant.
///
/// # Examples
///
/// ```
/// use deep_assert::{assert_equals, Value};
/// use serde_json::json;
///
/// let expected = Value::from(json!({"propA": 1}));
/// let actual = Value::from(json!({"propA": 2}));
/// let err = assert_equals("", &expected, &actual).unwrap_err();
/// assert_eq!(err.to_string(), "Expected propA \"1\" but found \"2\"");
/// ```
pub fn assert_equals(message: &str, expected: &Value, actual: &Value) -> Result<(), AssertError> {
    if let Value::Null = expected {
        // A null expected value is never compared structurally.
        return if let Value::Null = actual {
            Ok(())
        } else {
            Err(AssertError::NullMismatch {
                message: message.to_string(),
                actual_type: actual.type_of(),
            })
        };
    }

    if let Value::Undefined = expected {
        return Err(AssertError::UndefinedExpected {
            message: message.to_string(),
        });
    }

    if expected.type_name() != actual.type_name() {
        return Err(AssertError::TypeMismatch {
            message: message.to_string(),
            expected: expected.type_name(),
            actual: actual.type_name(),
        });
    }

    match expected {
        Value::Num(_) | Value::Bool(_) => {
            if strict_eq(expected, actual) {
                Ok(())
            } else {
                Err(AssertError::ValueMismatch {
                    message: message.to_string(),
                    expected: expected.clone(),
                    actual: actual.clone(),
                })
            }
        }
        Value::Str(_) => {
            if strict_eq(expected, actual) {
                Ok(())
            } else {
                Err(AssertError::StringMismatch {
                    message: message.to_string(),
                    expected: expected.to_string(),
                    actual: actual.to_string(),
                })
            }
        }
        Value::Arr(expected_items) => {
            if let Value::Arr(actual_items) = actual {
                compare_arrays(message, expected_items, actual_items)?;
            }
            compare_object_keys(message, expected, actual)?;
            compare_object_values(message, &Path::new(), expected, actual)
        }
        Value::Obj(_) => {
            compare_object_keys(message, expected, actual)?;
            compare_object_values(message, &Path::new(), expected, actual)
        }
        _ => Ok(()),
    }
}

/// Top-level length check, then element-wise comparison of the fully
/// flattened sequences.
fn compare_arrays(
    message: &str,
    expected: &[Value],
    actual: &[Value],
) -> Result<(), AssertError> {
    if expected.len() != actual.len() {
        return Err(AssertError::ArrayLength {
            message: message.to_string(),
            expected: expected.len(),
            actual: actual.len(),
        });
    }

    let flat_expected = flatten(expected);
    let flat_actual = flatten(actual);

    for (index, item) in flat_expected.iter().copied().enumerate() {
        let found = flat_actual.get(index).copied().unwrap_or(&UNDEFINED);
        if !deep_eq(item, found) {
            // The diagnostic reads the unflattened input at the flattened index.
            let shown = actual.get(index).cloned().unwrap_or(Value::Undefined);
            return Err(AssertError::ArrayElement {
                message: message.to_string(),
                expected: item.clone(),
                actual: shown,
            });
        }
    }
    Ok(())
}

/// Key-set symmetry: every expected key (plus one extra nested level) must
/// exist in the actual value, and the actual value must carry no extras.
/// Values are never compared here.
fn compare_object_keys(
    message: &str,
    expected: &Value,
    actual: &Value,
) -> Result<(), AssertError> {
    for key in expected.keys() {
        if !actual.has_own(&key) {
            return Err(AssertError::MissingKey {
                message: message.to_string(),
                key,
            });
        }
        let expected_child = expected.get(&key);
        let actual_child = actual.get(&key);
        for nested in expected_child.keys() {
            if !actual_child.has_own(&nested) {
                return Err(AssertError::MissingNestedKey {
                    message: message.to_string(),
                    key,
                    nested,
                });
            }
        }
    }

    for key in actual.keys() {
        if !expected.has_own(&key) {
            return Err(AssertError::ExtraKey {
                message: message.to_string(),
                key,
            });
        }
    }
    Ok(())
}

/// Recursive leaf-value comparison. Structured members extend the path and
/// recurse; everything else compares strictly. A member missing from the
/// actual side resolves to `Undefined` and mismatches as such.
fn compare_object_values(
    message: &str,
    path: &Path,
    expected: &Value,
    actual: &Value,
) -> Result<(), AssertError> {
    for key in expected.keys() {
        let expected_child = expected.get(&key);
        let actual_child = actual.get(&key);
        if expected_child.is_structured() {
            let child_path = path.child(segment_for(&key));
            compare_object_values(message, &child_path, expected_child, actual_child)?;
        } else if !strict_eq(expected_child, actual_child) {
            return Err(AssertError::ValueAtPath {
                message: message.to_string(),
                path: path.clone(),
                leaf: key,
                expected: expected_child.clone(),
                actual: actual_child.clone(),
            });
        }
    }
    Ok(())
}
