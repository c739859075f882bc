// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

//! Recency-weighted surprisingness of a univariate series.
//!
//! The score is the dot product of exponentially decaying recency weights
//! with the absolute z-scores of the NaN-free observations, so a variable
//! whose latest values sit far from its own history ranks highest.

mod diagnostics;

pub use diagnostics::{ScoreDiagnostics, DIAGNOSTICS_SCHEMA_VERSION};

use movers_core::{MoversError, SeriesView};
use tracing::{debug, warn};

/// Score plus the metadata gathered while computing it.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Scored {
    pub score: f64,
    pub diagnostics: ScoreDiagnostics,
}

/// Removes NaN entries, preserving the order of the remaining values.
pub fn strip_nan(x: &SeriesView<'_>) -> Result<Vec<f64>, MoversError> {
    x.ensure_univariate()?;
    Ok(x.to_f64_vec().into_iter().filter(|v| !v.is_nan()).collect())
}

/// Absolute z-score of every value against the whole slice.
///
/// Uses the population standard deviation. A slice holding a single distinct
/// value yields all zeros, even when rounding leaves a tiny nonzero spread.
pub fn abs_zscores(values: &[f64]) -> Vec<f64> {
    if is_constant(values) {
        return vec![0.0; values.len()];
    }
    match mean_std(values) {
        Some((mean, std)) if std > 0.0 => {
            values.iter().map(|v| ((v - mean) / std).abs()).collect()
        }
        _ => vec![0.0; values.len()],
    }
}

/// `exp(-k / time_window)` for `k = 0..len`; index 0 is the most recent point.
pub fn recency_weights(len: usize, time_window: f64) -> Vec<f64> {
    (0..len).map(|k| (-(k as f64) / time_window).exp()).collect()
}

/// Recency-weighted anomaly score of a one-dimensional series.
///
/// Fails with [`MoversError::Shape`] for multi-column views and with
/// [`MoversError::InvalidInput`] when `time_window` is not a positive finite
/// number.
pub fn surprisingness(series: &SeriesView<'_>, time_window: f64) -> Result<f64, MoversError> {
    surprisingness_with_diagnostics(series, time_window).map(|scored| scored.score)
}

/// Same as [`surprisingness`] for a plain slice; an empty slice scores zero.
pub fn surprisingness_slice(values: &[f64], time_window: f64) -> Result<f64, MoversError> {
    validate_time_window(time_window)?;
    let cleaned: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    Ok(score_cleaned(&cleaned, time_window))
}

/// Computes the score and reports cleaning and spread statistics.
pub fn surprisingness_with_diagnostics(
    series: &SeriesView<'_>,
    time_window: f64,
) -> Result<Scored, MoversError> {
    series.ensure_univariate()?;
    validate_time_window(time_window)?;

    let cleaned = strip_nan(series)?;
    let mut diagnostics = ScoreDiagnostics::new(series.n, cleaned.len(), time_window);

    if diagnostics.n_dropped > 0 {
        diagnostics
            .warnings
            .push(format!("dropped {} NaN observations", diagnostics.n_dropped));
    }

    if let Some((mean, std)) = mean_std(&cleaned) {
        diagnostics.mean = Some(mean);
        diagnostics.std = Some(std);
        if is_constant(&cleaned) || std <= 0.0 {
            diagnostics.degenerate = true;
            diagnostics
                .warnings
                .push("series has zero spread; anomalies are zero".to_string());
            warn!(n_cleaned = cleaned.len(), "constant series scored as unsurprising");
        }
    }

    let score = score_cleaned(&cleaned, time_window);
    debug!(
        n_input = diagnostics.n_input,
        n_cleaned = diagnostics.n_cleaned,
        time_window,
        score,
        "computed surprisingness"
    );

    Ok(Scored { score, diagnostics })
}

fn validate_time_window(time_window: f64) -> Result<(), MoversError> {
    if !time_window.is_finite() || time_window <= 0.0 {
        return Err(MoversError::invalid_input(format!(
            "time_window must be a positive finite number, got {time_window}"
        )));
    }
    Ok(())
}

fn score_cleaned(cleaned: &[f64], time_window: f64) -> f64 {
    let anomalies = abs_zscores(cleaned);
    let weights = recency_weights(anomalies.len(), time_window);
    // Latest anomaly pairs with weight index 0.
    anomalies
        .iter()
        .rev()
        .zip(weights.iter())
        .map(|(anomaly, weight)| anomaly * weight)
        .sum()
}

fn is_constant(values: &[f64]) -> bool {
    match values.first() {
        Some(first) => values.iter().all(|v| v == first),
        None => false,
    }
}

fn mean_std(values: &[f64]) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    Some((mean, variance.sqrt()))
}
