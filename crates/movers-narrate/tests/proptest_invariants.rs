// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use movers_core::{changes, Direction};
use movers_narrate::{TrendContext, VariableSummarizer};
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;

const MIN_PROPTEST_CASES: u32 = 512;
const NAME: &str = "Generated";

fn proptest_cases() -> u32 {
    std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|raw| raw.parse::<u32>().ok())
        .map(|parsed| parsed.max(MIN_PROPTEST_CASES))
        .unwrap_or(MIN_PROPTEST_CASES)
}

// Small integer levels make flat months and long runs common.
fn stepped_series(min_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec((-6i32..=6).prop_map(f64::from), min_len..28)
}

fn naive_run_months(series: &[f64]) -> usize {
    let c = changes(series);
    let history = &c[..c.len() - 1];
    let reference = Direction::of(history[history.len() - 1]);
    history
        .iter()
        .rev()
        .take_while(|&&change| !Direction::of(change).is_opposite(reference))
        .count()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(proptest_cases()))]

    #[test]
    fn short_qualitative_verb_follows_final_sign(series in stepped_series(2)) {
        let s = VariableSummarizer::new(NAME, series.clone());
        let observed = s.short_qualitative_summary().expect("two observations suffice");
        let last = series[series.len() - 1] - series[series.len() - 2];
        let verb = if last > 0.0 {
            "increased"
        } else if last < 0.0 {
            "decreased"
        } else {
            "did not change"
        };
        prop_assert_eq!(observed, format!("{NAME} {verb}."));
    }

    #[test]
    fn long_quantitative_extends_short_quantitative(series in stepped_series(4)) {
        prop_assume!(series[series.len() - 2] != 0.0);
        let s = VariableSummarizer::new(NAME, series);
        let short = s.short_quantitative_summary().expect("nonzero prior renders");
        let long = s.long_quantitative_summary().expect("four observations render");
        let prefix = short.strip_suffix('.').expect("short form ends with a period");
        prop_assert!(long.starts_with(prefix), "{} vs {}", long, short);
        prop_assert!(long.ends_with('.'));
        prop_assert!(!long.ends_with(".."));
    }

    #[test]
    fn change_label_matches_both_main_clauses(series in stepped_series(2)) {
        prop_assume!(series[series.len() - 2] != 0.0);
        let s = VariableSummarizer::new(NAME, series);
        let c = s.changes();
        let verb = VariableSummarizer::change_label(c[c.len() - 1]).verb();
        let qualitative = s.short_qualitative_summary().expect("renders");
        let quantitative = s.short_quantitative_summary().expect("renders");
        let qualitative_prefix = format!("{NAME} {verb}");
        prop_assert!(qualitative.starts_with(&qualitative_prefix));
        let quantitative_prefix = format!("{NAME} {verb} by ");
        prop_assert!(quantitative.starts_with(&quantitative_prefix));
    }

    #[test]
    fn run_months_match_backward_count(series in stepped_series(4)) {
        let s = VariableSummarizer::new(NAME, series.clone());
        match s.trend_context().expect("four observations classify") {
            TrendContext::Continuing { direction, months } => {
                prop_assert!(direction.is_nonzero());
                prop_assert_eq!(direction, s.most_recent_change_label().expect("has change"));
                prop_assert_eq!(months, naive_run_months(&series));
                prop_assert!(months >= 2);
            }
            TrendContext::Breaking { direction, months } => {
                prop_assert!(direction.is_nonzero());
                prop_assert_eq!(direction, s.previous_change_label().expect("has change"));
                prop_assert_ne!(direction, s.most_recent_change_label().expect("has change"));
                prop_assert_eq!(months, naive_run_months(&series));
                prop_assert!(months >= 2);
            }
            TrendContext::NoTrend { previous, previous_change } => {
                prop_assert_eq!(previous, Direction::of(previous_change));
                prop_assert_eq!(Some(previous_change), s.previous_change().ok());
            }
        }
    }

    #[test]
    fn arbitrary_finite_series_never_panic(
        series in prop::collection::vec(-1.0e6..1.0e6_f64, 0..16),
    ) {
        let s = VariableSummarizer::new(NAME, series);
        let _ = s.short_qualitative_summary();
        let _ = s.long_qualitative_summary();
        let _ = s.short_quantitative_summary();
        let _ = s.long_quantitative_summary();
        let _ = s.prior_run_length();
    }
}
