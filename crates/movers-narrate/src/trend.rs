// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use movers_core::{Direction, MoversError};
use std::fmt;
use tracing::debug;

/// How the most recent change relates to the changes before it.
///
/// `months` counts the previous month plus every earlier month that moved in
/// the same direction without an intervening reversal.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TrendContext {
    /// The last three changes share one nonzero direction.
    Continuing { direction: Direction, months: usize },
    /// The two changes before the latest share one nonzero direction and the
    /// latest does not.
    Breaking { direction: Direction, months: usize },
    /// No two-month run precedes the latest change.
    NoTrend {
        previous: Direction,
        previous_change: f64,
    },
}

impl TrendContext {
    /// Detail clause without a trailing period.
    pub fn render(&self) -> String {
        match self {
            Self::Continuing { direction, months } => format!(
                "the {months} consecutive months of {}",
                direction.plural_noun()
            ),
            Self::Breaking { direction, months } => format!(
                "following {months} consecutive months of {}",
                direction.plural_noun()
            ),
            Self::NoTrend {
                previous,
                previous_change,
            } => match previous {
                Direction::Increase => format!(
                    "following an increase of {:.1} the previous month",
                    previous_change
                ),
                Direction::Decrease => format!(
                    "following a decrease of {:.1} the previous month",
                    previous_change.abs()
                ),
                Direction::NoChange => "following no change the previous month".to_string(),
            },
        }
    }
}

impl fmt::Display for TrendContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Number of months before the previous one that share its direction.
///
/// Scans `changes[..last]` backward for the latest change opposite to the
/// previous change's direction. Zero changes never end a run. A zero
/// previous change counts as non-increasing, so only an increase ends it.
pub fn prior_run_length(changes: &[f64]) -> Result<usize, MoversError> {
    ensure_detail_history("prior run length", changes)?;

    let n = changes.len();
    let history = &changes[..n - 1];
    let ends_run = match Direction::of(history[n - 2]) {
        Direction::Increase => Direction::Decrease,
        Direction::Decrease | Direction::NoChange => Direction::Increase,
    };

    let reversal = history
        .iter()
        .rposition(|&change| Direction::of(change) == ends_run);

    // Series length is n + 1; a reversal at r leaves (n + 1) - r - 4 months.
    Ok(match reversal {
        Some(r) => n.saturating_sub(r + 3),
        None => n - 2,
    })
}

/// Classifies the latest change against the two changes before it.
pub fn classify(changes: &[f64]) -> Result<TrendContext, MoversError> {
    ensure_detail_history("trend classification", changes)?;

    let n = changes.len();
    let current = Direction::of(changes[n - 1]);
    let previous = Direction::of(changes[n - 2]);
    let before = Direction::of(changes[n - 3]);

    let recent_trend = previous.is_nonzero() && previous == before;
    let continues = current.is_nonzero() && current == previous && previous == before;

    let context = match (recent_trend, continues) {
        (true, true) => TrendContext::Continuing {
            direction: current,
            months: prior_run_length(changes)? + 1,
        },
        (true, false) => TrendContext::Breaking {
            direction: previous,
            months: prior_run_length(changes)? + 1,
        },
        (false, false) => TrendContext::NoTrend {
            previous,
            previous_change: changes[n - 2],
        },
        (false, true) => unreachable!("three-month run without its two-month prefix"),
    };

    debug!(?context, n_changes = n, "classified trend");
    Ok(context)
}

fn ensure_detail_history(operation: &'static str, changes: &[f64]) -> Result<(), MoversError> {
    if changes.len() < 3 {
        return Err(MoversError::insufficient_history(
            operation,
            crate::MIN_OBSERVATIONS_FOR_DETAIL,
            changes.len() + 1,
        ));
    }
    Ok(())
}
