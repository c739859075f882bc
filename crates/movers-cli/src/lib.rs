// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

//! Driver for the movers scorer and narrator: loads a long-format CSV, ranks
//! its variables by surprisingness, and assembles summary sentences.

mod config;
mod dataset;
mod error;
mod report;

pub use config::{FormattingConfig, ReportConfig};
pub use dataset::{parse_date, parse_value, Dataset};
pub use error::{CliError, ErrorEnvelope, ErrorPayload};
pub use report::{
    build_report, describe, rank, Description, RankedVariable, Ranking, Rendered, Report,
    SummaryEntry,
};

use serde::Serialize;
use std::fs;
use std::path::Path;

/// Writes pretty JSON to `output_path`, or to stdout when none is given.
pub fn write_json_output<T: Serialize>(
    payload: &T,
    output_path: Option<&Path>,
) -> Result<(), CliError> {
    let encoded = serde_json::to_string_pretty(payload)
        .map_err(|source| CliError::json("failed to serialize JSON output", source))?;

    if let Some(path) = output_path {
        fs::write(path, format!("{encoded}\n"))
            .map_err(|source| CliError::io(format!("failed to write '{}'", path.display()), source))
    } else {
        println!("{encoded}");
        Ok(())
    }
}
