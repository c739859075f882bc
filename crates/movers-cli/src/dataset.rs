// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::{CliError, ReportConfig};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::path::Path;
use tracing::debug;

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];
const MISSING_MARKERS: [&str; 5] = ["nan", "na", "n/a", "null", "none"];

#[derive(Clone, Copy, Debug, PartialEq)]
struct Observation {
    date: NaiveDate,
    value: f64,
}

/// Long-format observations grouped per variable and ordered by date.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    order: Vec<String>,
    observations: HashMap<String, Vec<Observation>>,
}

impl Dataset {
    pub fn load(path: &Path, config: &ReportConfig) -> Result<Self, CliError> {
        let file = File::open(path)
            .map_err(|source| {
                CliError::io(format!("failed to read '{}'", path.display()), source)
            })?;
        Self::from_reader(file, config)
    }

    /// Reads a headered CSV holding the configured variable/date/value columns.
    pub fn from_reader<R: io::Read>(reader: R, config: &ReportConfig) -> Result<Self, CliError> {
        let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let headers = csv_reader
            .headers()
            .map_err(|source| CliError::csv("failed to read CSV header", source))?
            .clone();

        let column = |name: &str| {
            headers.iter().position(|h| h == name).ok_or_else(|| {
                CliError::invalid_input(format!("CSV header has no column named '{name}'"))
            })
        };
        let variable_idx = column(&config.variable_column_name)?;
        let date_idx = column(&config.date_column_name)?;
        let value_idx = column(&config.value_column_name)?;

        let mut dataset = Self::default();
        for (row_idx, record) in csv_reader.records().enumerate() {
            // Header is line 1.
            let line = row_idx + 2;
            let record = record.map_err(|source| {
                CliError::csv(format!("failed to read CSV line {line}"), source)
            })?;

            let cell = |idx: usize| record.get(idx).unwrap_or("");
            let variable = cell(variable_idx);
            if variable.is_empty() {
                return Err(CliError::invalid_input(format!(
                    "CSV line {line} has an empty variable name"
                )));
            }
            let date = parse_date(cell(date_idx)).ok_or_else(|| {
                CliError::invalid_input(format!(
                    "CSV line {line} has an unrecognized date: '{}'",
                    cell(date_idx)
                ))
            })?;
            let value = parse_value(cell(value_idx)).ok_or_else(|| {
                CliError::invalid_input(format!(
                    "CSV line {line} has a value that is not a valid float: '{}'",
                    cell(value_idx)
                ))
            })?;

            dataset.push(variable, Observation { date, value });
        }

        for series in dataset.observations.values_mut() {
            series.sort_by_key(|obs| obs.date);
        }

        debug!(variables = dataset.order.len(), "loaded dataset");
        Ok(dataset)
    }

    fn push(&mut self, variable: &str, observation: Observation) {
        if let Some(series) = self.observations.get_mut(variable) {
            series.push(observation);
            return;
        }
        self.order.push(variable.to_string());
        self.observations.insert(variable.to_string(), vec![observation]);
    }

    /// Variable names in order of first appearance.
    pub fn variable_names(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Values of one variable in chronological order, NaN included.
    pub fn series(&self, variable: &str) -> Option<Vec<f64>> {
        self.observations
            .get(variable)
            .map(|series| series.iter().map(|obs| obs.value).collect())
    }
}

/// Parses a calendar date; datetime strings are cut to their date part.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let candidates = [Some(raw), raw.get(..10)];
    for candidate in candidates.into_iter().flatten() {
        for format in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(candidate, format) {
                return Some(date);
            }
        }
    }
    // Year-month only.
    NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d").ok()
}

/// Parses a numeric cell; empty cells and missing markers become NaN.
pub fn parse_value(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty()
        || MISSING_MARKERS
            .iter()
            .any(|marker| raw.eq_ignore_ascii_case(marker))
    {
        return Some(f64::NAN);
    }
    raw.parse::<f64>().ok()
}
