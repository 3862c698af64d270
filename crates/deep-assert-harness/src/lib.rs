//! Failure-collecting runner around [`deep_assert::assert_equals`].
//!
//! The comparator itself never aggregates — each call fails on the first
//! mismatch. The harness owns the cross-assertion failure list: it runs a
//! sequence of checks, collects each rendered diagnostic, and leaves
//! rendering of the final list to the caller (see the `deep-assert-demo`
//! binary).

mod fixtures;

pub use fixtures::{showcase_scenarios, Scenario};

use deep_assert::{assert_equals, Value};

/// Accumulates failure messages across independent assertions.
#[derive(Debug, Default)]
pub struct Harness {
    failures: Vec<String>,
}

impl Harness {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs one assertion. A mismatch appends its rendered diagnostic to
    /// the failure list; success leaves no trace.
    pub fn check(&mut self, message: &str, expected: &Value, actual: &Value) {
        if let Err(failure) = assert_equals(message, expected, actual) {
            self.failures.push(failure.to_string());
        }
    }

    /// The failures collected so far, in execution order.
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    pub fn into_failures(self) -> Vec<String> {
        self.failures
    }
}
