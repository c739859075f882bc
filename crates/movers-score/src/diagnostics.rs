// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

/// Diagnostics schema version for scoring metadata.
pub const DIAGNOSTICS_SCHEMA_VERSION: u32 = 1;

/// Structured metadata captured alongside a surprisingness score.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreDiagnostics {
    pub schema_version: u32,
    pub n_input: usize,
    pub n_cleaned: usize,
    pub n_dropped: usize,
    pub time_window: f64,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    /// Set when the cleaned series has zero spread and every anomaly is zero.
    pub degenerate: bool,
    pub warnings: Vec<String>,
}

impl ScoreDiagnostics {
    pub(crate) fn new(n_input: usize, n_cleaned: usize, time_window: f64) -> Self {
        Self {
            schema_version: DIAGNOSTICS_SCHEMA_VERSION,
            n_input,
            n_cleaned,
            n_dropped: n_input - n_cleaned,
            time_window,
            mean: None,
            std: None,
            degenerate: false,
            warnings: vec![],
        }
    }

    /// Fraction of input points removed by cleaning, or 0 for empty input.
    pub fn dropped_fraction(&self) -> f64 {
        if self.n_input == 0 {
            0.0
        } else {
            self.n_dropped as f64 / self.n_input as f64
        }
    }
}
