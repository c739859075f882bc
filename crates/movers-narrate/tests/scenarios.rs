// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use movers_core::Direction;
use movers_narrate::{TrendContext, VariableSummarizer};

#[test]
fn long_with_reversal_counts_run_after_last_decrease() {
    let s = VariableSummarizer::new(
        "Long test variable",
        vec![1.0, 2.0, 3.0, 2.0, 5.0, 6.0, 7.0, 6.0],
    );
    let observed = s
        .long_quantitative_summary()
        .expect("long summary should render");
    assert!(observed.contains("following 3 consecutive months"), "{observed}");
}

#[test]
fn long_with_early_reversal_counts_whole_run() {
    let s = VariableSummarizer::new(
        "Long test variable",
        vec![1.0, 0.5, 3.0, 4.0, 5.0, 6.0, 7.0, 6.0],
    );
    let observed = s
        .long_quantitative_summary()
        .expect("long summary should render");
    assert!(observed.contains("following 5 consecutive months"), "{observed}");
}

#[test]
fn two_decreases_after_an_increase_read_as_one_off() {
    let s = VariableSummarizer::new("Test variable", vec![1.0, 2.0, 4.0, 3.0, 2.0]);
    assert_eq!(
        s.short_quantitative_summary().expect("short summary should render"),
        "Test variable decreased by 1.0 (33.3%) to 2.0."
    );
    assert_eq!(
        s.trend_context().expect("context should classify"),
        TrendContext::NoTrend {
            previous: Direction::Decrease,
            previous_change: -1.0,
        }
    );
}

#[test]
fn run_spanning_whole_history_continues() {
    let s = VariableSummarizer::new("Payrolls", vec![100.0, 101.0, 102.5, 104.0, 106.0]);
    assert_eq!(s.prior_run_length(), Ok(2));
    assert_eq!(
        s.long_qualitative_summary().expect("long summary should render"),
        "Payrolls increased, the 3 consecutive months of increases."
    );
}

#[test]
fn negative_levels_format_with_sign_only_on_current_value() {
    let s = VariableSummarizer::new("Balance", vec![-2.0, -4.0, -5.0, -8.0]);
    assert_eq!(
        s.short_quantitative_summary().expect("short summary should render"),
        "Balance decreased by 3.0 (60.0%) to -8.0."
    );
}
