//! deep-assert — deep equality assertions over dynamic values.
//!
//! Compares an expected value against an actual value of arbitrary shape
//! (scalars, ordered sequences, nested mappings) and reports a
//! human-readable diagnostic on the first difference. [`assert_equals`] is
//! the single entry point; [`Value`] is the dynamic input domain, usually
//! built from [`serde_json::Value`] at the boundary.
//!
//! The comparator is a pure pass/fail predicate: no side effects, no
//! aggregation across mismatches, no recovery. Callers that want a failure
//! list run many assertions and collect the rendered [`AssertError`]s.

mod compare;
mod error;
mod path;
mod value;

pub use compare::assert_equals;
pub use error::AssertError;
pub use path::{Path, Segment};
pub use value::{deep_eq, flatten, Value};
