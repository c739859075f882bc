// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::trend::{self, TrendContext};
use movers_core::{changes, Direction, MoversError, SeriesView};

/// Observations needed for a most-recent change.
pub const MIN_OBSERVATIONS_FOR_CHANGE: usize = 2;
/// Observations needed for the change before the most recent one.
pub const MIN_OBSERVATIONS_FOR_PREVIOUS: usize = 3;
/// Observations needed to tell a continuing run from a broken one.
pub const MIN_OBSERVATIONS_FOR_DETAIL: usize = 4;

const DETAIL_SEPARATOR: &str = ", ";

/// All four sentence forms for one variable.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Summaries {
    pub short_qualitative: String,
    pub long_qualitative: String,
    pub short_quantitative: String,
    pub long_quantitative: String,
}

/// A named series and the sentences derived from it.
///
/// The series is fixed at construction. Every query recomputes what it needs
/// from the stored observations.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableSummarizer {
    name: String,
    historical_data: Vec<f64>,
}

impl VariableSummarizer {
    pub fn new(name: impl Into<String>, historical_data: impl Into<Vec<f64>>) -> Self {
        Self {
            name: name.into(),
            historical_data: historical_data.into(),
        }
    }

    /// Builds a summarizer from a one-column view.
    pub fn from_view(name: impl Into<String>, view: &SeriesView<'_>) -> Result<Self, MoversError> {
        view.ensure_univariate()?;
        Ok(Self::new(name, view.to_f64_vec()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn historical_data(&self) -> &[f64] {
        &self.historical_data
    }

    pub fn len(&self) -> usize {
        self.historical_data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.historical_data.is_empty()
    }

    pub fn current_value(&self) -> Result<f64, MoversError> {
        self.historical_data
            .last()
            .copied()
            .ok_or_else(|| MoversError::insufficient_history("current value", 1, 0))
    }

    pub fn changes(&self) -> Vec<f64> {
        changes(&self.historical_data)
    }

    /// Sign class of a single change.
    pub fn change_label(change: f64) -> Direction {
        Direction::of(change)
    }

    pub fn most_recent_change(&self) -> Result<f64, MoversError> {
        self.require("most recent change", MIN_OBSERVATIONS_FOR_CHANGE)?;
        let n = self.len();
        Ok(self.historical_data[n - 1] - self.historical_data[n - 2])
    }

    pub fn previous_change(&self) -> Result<f64, MoversError> {
        self.require("previous change", MIN_OBSERVATIONS_FOR_PREVIOUS)?;
        let n = self.len();
        Ok(self.historical_data[n - 2] - self.historical_data[n - 3])
    }

    pub fn most_recent_change_label(&self) -> Result<Direction, MoversError> {
        self.most_recent_change().map(Self::change_label)
    }

    pub fn previous_change_label(&self) -> Result<Direction, MoversError> {
        self.previous_change().map(Self::change_label)
    }

    /// Most recent change as a percentage of the observation before it.
    ///
    /// A zero prior observation is a [`MoversError::DivideByZero`].
    pub fn percent_change(&self) -> Result<f64, MoversError> {
        let change = self.most_recent_change()?;
        let prior = self.historical_data[self.len() - 2];
        if prior == 0.0 {
            return Err(MoversError::divide_by_zero(format!(
                "percentage change of '{}' against a zero prior observation",
                self.name
            )));
        }
        Ok(100.0 * change / prior)
    }

    /// Months before the previous one that moved in the previous month's direction.
    pub fn prior_run_length(&self) -> Result<usize, MoversError> {
        self.require("prior run length", MIN_OBSERVATIONS_FOR_DETAIL)?;
        trend::prior_run_length(&self.changes())
    }

    pub fn trend_context(&self) -> Result<TrendContext, MoversError> {
        self.require("trend context", MIN_OBSERVATIONS_FOR_DETAIL)?;
        trend::classify(&self.changes())
    }

    /// Detail clause appended to long summaries.
    pub fn detail(&self) -> Result<String, MoversError> {
        self.trend_context().map(|context| context.render())
    }

    pub fn short_qualitative_summary(&self) -> Result<String, MoversError> {
        Ok(format!("{}.", self.qualitative_main()?))
    }

    pub fn long_qualitative_summary(&self) -> Result<String, MoversError> {
        self.require("long qualitative summary", MIN_OBSERVATIONS_FOR_DETAIL)?;
        Ok(format!(
            "{}{DETAIL_SEPARATOR}{}.",
            self.qualitative_main()?,
            self.detail()?
        ))
    }

    pub fn short_quantitative_summary(&self) -> Result<String, MoversError> {
        Ok(format!("{}.", self.quantitative_main()?))
    }

    pub fn long_quantitative_summary(&self) -> Result<String, MoversError> {
        self.require("long quantitative summary", MIN_OBSERVATIONS_FOR_DETAIL)?;
        Ok(format!(
            "{}{DETAIL_SEPARATOR}{}.",
            self.quantitative_main()?,
            self.detail()?
        ))
    }

    /// All four forms; fails if any one of them fails.
    pub fn summaries(&self) -> Result<Summaries, MoversError> {
        Ok(Summaries {
            short_qualitative: self.short_qualitative_summary()?,
            long_qualitative: self.long_qualitative_summary()?,
            short_quantitative: self.short_quantitative_summary()?,
            long_quantitative: self.long_quantitative_summary()?,
        })
    }

    fn qualitative_main(&self) -> Result<String, MoversError> {
        self.require("summary", MIN_OBSERVATIONS_FOR_CHANGE)?;
        Ok(format!(
            "{} {}",
            self.name,
            self.most_recent_change_label()?.verb()
        ))
    }

    fn quantitative_main(&self) -> Result<String, MoversError> {
        self.require("summary", MIN_OBSERVATIONS_FOR_CHANGE)?;
        let change = self.most_recent_change()?;
        Ok(format!(
            "{} {} by {:.1} ({:.1}%) to {:.1}",
            self.name,
            Self::change_label(change).verb(),
            change.abs(),
            self.percent_change()?.abs(),
            self.current_value()?
        ))
    }

    fn require(&self, operation: &'static str, required: usize) -> Result<(), MoversError> {
        if self.len() < required {
            return Err(MoversError::insufficient_history(
                operation,
                required,
                self.len(),
            ));
        }
        Ok(())
    }
}
