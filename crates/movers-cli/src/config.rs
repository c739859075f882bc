// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::CliError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const DEFAULT_NUM_LONG_FORM: usize = 3;
const DEFAULT_NUM_SHORT_FORM: usize = 5;

/// How many ranked variables get long and short summaries.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct FormattingConfig {
    #[serde(default = "default_num_long_form")]
    pub num_long_form: usize,
    #[serde(default = "default_num_short_form")]
    pub num_short_form: usize,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            num_long_form: DEFAULT_NUM_LONG_FORM,
            num_short_form: DEFAULT_NUM_SHORT_FORM,
        }
    }
}

fn default_num_long_form() -> usize {
    DEFAULT_NUM_LONG_FORM
}

fn default_num_short_form() -> usize {
    DEFAULT_NUM_SHORT_FORM
}

/// Report configuration loaded from JSON.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ReportConfig {
    pub dataset_name: String,
    pub variable_column_name: String,
    pub date_column_name: String,
    pub value_column_name: String,
    #[serde(default)]
    pub main_outcome_name: Option<String>,
    pub surprisingness_time_window: f64,
    #[serde(default)]
    pub formatting: FormattingConfig,
}

impl ReportConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, CliError> {
        let config: Self = serde_json::from_str(raw)
            .map_err(|source| CliError::json("invalid config JSON", source))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, CliError> {
        let raw = fs::read_to_string(path)
            .map_err(|source| {
                CliError::io(format!("failed to read '{}'", path.display()), source)
            })?;
        Self::from_json_str(&raw)
    }

    fn validate(&self) -> Result<(), CliError> {
        for (field, value) in [
            ("variable_column_name", &self.variable_column_name),
            ("date_column_name", &self.date_column_name),
            ("value_column_name", &self.value_column_name),
        ] {
            if value.trim().is_empty() {
                return Err(CliError::invalid_input(format!("config {field} must not be empty")));
            }
        }

        let window = self.surprisingness_time_window;
        if !window.is_finite() || window <= 0.0 {
            return Err(CliError::invalid_input(format!(
                "config surprisingness_time_window must be a positive finite number, got {window}"
            )));
        }

        Ok(())
    }
}
