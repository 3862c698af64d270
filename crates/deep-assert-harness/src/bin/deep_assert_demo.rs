//! Runs the showcase suite and prints the collected failure list, one
//! diagnostic per line.

use deep_assert_harness::{showcase_scenarios, Harness};

fn main() {
    let mut harness = Harness::new();
    for scenario in showcase_scenarios() {
        harness.check(&scenario.message, &scenario.expected, &scenario.actual);
    }
    for failure in harness.failures() {
        println!("{failure}");
    }
}
