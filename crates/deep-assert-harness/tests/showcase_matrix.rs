//! End-to-end oracle: runs the full showcase suite through the harness and
//! asserts the exact ordered failure list.

use deep_assert_harness::{showcase_scenarios, Harness};

#[test]
fn showcase_suite_produces_the_expected_failure_list() {
    let mut harness = Harness::new();
    for scenario in showcase_scenarios() {
        harness.check(&scenario.message, &scenario.expected, &scenario.actual);
    }

    let expected: Vec<&str> = vec![
        "Test 02: Expected \"abcdef\" found \"abc\"",
        "Test 03: Expected type Array but found Object",
        "Test 04: Expected array length 2 found 3",
        "Test 07: Expected propB.propA[1].propB \"b\" but found \"c\"",
        "Test 08: Expected propB.propC but was not found",
        "Test 09: Expected type null but found type object",
        "Test 10: Expected array element \"a\" but found \"x\"",
        "Test 12: Expected propB \"2\" but found \"3\"",
        "Test 15: Expected no property but found propC",
        "Test 19: Expected 2 found 1",
        "Test 20: Expected type Boolean but found Number",
        "Test 22: Expected true found false",
    ];
    assert_eq!(harness.failures(), expected.as_slice());
}

#[test]
fn passing_scenarios_include_nan_and_undefined_members() {
    let mut harness = Harness::new();
    for scenario in showcase_scenarios() {
        let before = harness.failures().len();
        harness.check(&scenario.message, &scenario.expected, &scenario.actual);
        let passed = harness.failures().len() == before;
        match scenario.message.as_str() {
            // NaN equals NaN, and undefined-valued members are equal to
            // each other.
            "Test 16: " | "Test 14: " => assert!(passed, "{} should pass", scenario.message),
            "Test 06: " | "Test 11: " | "Test 13: " => {
                assert!(passed, "{} should pass", scenario.message)
            }
            _ => {}
        }
    }
}
