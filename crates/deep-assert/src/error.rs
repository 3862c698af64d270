//! Failure taxonomy for assertion mismatches.
//!
//! Every mismatch kind carries the caller's message prefix plus structured
//! snapshots of what differed; `Display` renders the one-line diagnostic the
//! harness accumulates. Comparison fails on the first mismatch — there is no
//! aggregation inside a single assertion.

use crate::path::Path;
use crate::value::Value;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AssertError {
    /// Expected was null and actual was not; reports the dynamic type word
    /// of the actual value.
    #[error("{message}Expected type null but found type {actual_type}")]
    NullMismatch {
        message: String,
        actual_type: &'static str,
    },

    /// An undefined expected value cannot anchor a comparison.
    #[error("{message}Cannot compare against undefined expected value")]
    UndefinedExpected { message: String },

    /// The constructing types of the two values differ.
    #[error("{message}Expected type {expected} but found {actual}")]
    TypeMismatch {
        message: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// Same type, different number or boolean value.
    #[error("{message}Expected {expected} found {actual}")]
    ValueMismatch {
        message: String,
        expected: Value,
        actual: Value,
    },

    /// Same type, different string content.
    #[error("{message}Expected \"{expected}\" found \"{actual}\"")]
    StringMismatch {
        message: String,
        expected: String,
        actual: String,
    },

    /// Top-level sequence lengths differ.
    #[error("{message}Expected array length {expected} found {actual}")]
    ArrayLength {
        message: String,
        expected: usize,
        actual: usize,
    },

    /// Flattened element-wise mismatch. `actual` is read from the original
    /// unflattened input at the flattened index.
    #[error("{message}Expected array element \"{expected}\" but found \"{actual}\"")]
    ArrayElement {
        message: String,
        expected: Value,
        actual: Value,
    },

    /// A key of the expected mapping is absent from the actual one.
    #[error("{message}Expected {key} but was not found")]
    MissingKey { message: String, key: String },

    /// A nested key, one level below `key`, is absent from the actual value.
    #[error("{message}Expected {key}.{nested} but was not found")]
    MissingNestedKey {
        message: String,
        key: String,
        nested: String,
    },

    /// The actual mapping carries a key the expected one lacks.
    #[error("{message}Expected no property but found {key}")]
    ExtraKey { message: String, key: String },

    /// A leaf value differs at some path inside a structured value.
    #[error("{}", render_value_at_path(.message, .path, .leaf, .expected, .actual))]
    ValueAtPath {
        message: String,
        path: Path,
        leaf: String,
        expected: Value,
        actual: Value,
    },
}

impl AssertError {
    /// The rendered diagnostic — what a failure-collecting caller stores.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

fn render_value_at_path(
    message: &str,
    path: &Path,
    leaf: &str,
    expected: &Value,
    actual: &Value,
) -> String {
    let located = path.render(&format!("{message}Expected "));
    format!("{located}{leaf} \"{expected}\" but found \"{actual}\"")
}
