// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::{CliError, Dataset, ErrorPayload, ReportConfig};
use movers_core::{MoversError, SeriesView};
use movers_narrate::{TrendContext, VariableSummarizer};
use movers_score::{strip_nan, surprisingness_with_diagnostics};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, warn};

/// One variable's score.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RankedVariable {
    pub name: String,
    pub surprisingness: f64,
    pub n_observations: usize,
    pub n_dropped: usize,
}

/// Variables ordered from most to least surprising.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Ranking {
    pub dataset_name: String,
    pub variables: Vec<RankedVariable>,
}

/// A rendered sentence, or the reason it could not be rendered.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Rendered {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorPayload>,
}

impl From<Result<String, MoversError>> for Rendered {
    fn from(result: Result<String, MoversError>) -> Self {
        match result {
            Ok(text) => Self {
                text: Some(text),
                error: None,
            },
            Err(err) => Self {
                text: None,
                error: Some(ErrorPayload::from(&err)),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SummaryEntry {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surprisingness: Option<f64>,
    #[serde(flatten)]
    pub summary: Rendered,
}

/// Structured report: main outcome plus long and short summaries of the
/// top-ranked variables.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    pub dataset_name: String,
    pub main_outcome: Option<SummaryEntry>,
    pub long_form: Vec<SummaryEntry>,
    pub short_form: Vec<SummaryEntry>,
}

/// Every sentence form and the trend context for one variable.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Description {
    pub name: String,
    pub surprisingness: f64,
    pub n_observations: usize,
    pub short_qualitative: Rendered,
    pub long_qualitative: Rendered,
    pub short_quantitative: Rendered,
    pub long_quantitative: Rendered,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<TrendContext>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Form {
    Long,
    Short,
}

/// Scores every variable in parallel and sorts by descending score.
///
/// Ties and NaN scores fall back to name order; NaN sorts last.
pub fn rank(dataset: &Dataset, config: &ReportConfig) -> Result<Ranking, CliError> {
    let time_window = config.surprisingness_time_window;
    let mut variables = dataset
        .variable_names()
        .par_iter()
        .map(|name| {
            let series = lookup(dataset, name)?;
            let view = SeriesView::univariate(&series)?;
            let scored = surprisingness_with_diagnostics(&view, time_window)?;
            Ok(RankedVariable {
                name: name.clone(),
                surprisingness: scored.score,
                n_observations: scored.diagnostics.n_input,
                n_dropped: scored.diagnostics.n_dropped,
            })
        })
        .collect::<Result<Vec<_>, CliError>>()?;

    variables.sort_by(|a, b| {
        rank_key(b.surprisingness)
            .total_cmp(&rank_key(a.surprisingness))
            .then_with(|| a.name.cmp(&b.name))
    });
    debug!(variables = variables.len(), "ranked variables");

    Ok(Ranking {
        dataset_name: config.dataset_name.clone(),
        variables,
    })
}

/// Builds the report sections from the ranking.
///
/// A variable whose summary fails is kept with an `error` payload; only a
/// configured main outcome missing from the dataset is fatal.
pub fn build_report(dataset: &Dataset, config: &ReportConfig) -> Result<Report, CliError> {
    let ranking = rank(dataset, config)?;

    let main_outcome = match &config.main_outcome_name {
        Some(name) => Some(summarize_entry(dataset, name, None, Form::Long)?),
        None => None,
    };

    let num_long = config.formatting.num_long_form;
    let num_short = config.formatting.num_short_form;
    let long_form = ranking
        .variables
        .iter()
        .take(num_long)
        .map(|ranked| {
            summarize_entry(dataset, &ranked.name, Some(ranked.surprisingness), Form::Long)
        })
        .collect::<Result<Vec<_>, CliError>>()?;
    let short_form = ranking
        .variables
        .iter()
        .skip(num_long)
        .take(num_short)
        .map(|ranked| {
            summarize_entry(dataset, &ranked.name, Some(ranked.surprisingness), Form::Short)
        })
        .collect::<Result<Vec<_>, CliError>>()?;

    Ok(Report {
        dataset_name: config.dataset_name.clone(),
        main_outcome,
        long_form,
        short_form,
    })
}

/// Renders all four forms and the trend context for one variable.
pub fn describe(
    dataset: &Dataset,
    config: &ReportConfig,
    variable: &str,
) -> Result<Description, CliError> {
    let series = lookup(dataset, variable)?;
    let view = SeriesView::univariate(&series)?;
    let scored = surprisingness_with_diagnostics(&view, config.surprisingness_time_window)?;
    let summarizer = VariableSummarizer::new(variable, strip_nan(&view)?);

    Ok(Description {
        name: variable.to_string(),
        surprisingness: scored.score,
        n_observations: scored.diagnostics.n_input,
        short_qualitative: summarizer.short_qualitative_summary().into(),
        long_qualitative: summarizer.long_qualitative_summary().into(),
        short_quantitative: summarizer.short_quantitative_summary().into(),
        long_quantitative: summarizer.long_quantitative_summary().into(),
        trend: summarizer.trend_context().ok(),
    })
}

fn summarize_entry(
    dataset: &Dataset,
    name: &str,
    surprisingness: Option<f64>,
    form: Form,
) -> Result<SummaryEntry, CliError> {
    let series = lookup(dataset, name)?;
    let view = SeriesView::univariate(&series)?;
    let summarizer = VariableSummarizer::new(name, strip_nan(&view)?);

    let result = match form {
        Form::Long => summarizer.long_quantitative_summary(),
        Form::Short => summarizer.short_quantitative_summary(),
    };
    if let Err(err) = &result {
        warn!(variable = name, code = err.code(), error = %err, "summary unavailable");
    }

    Ok(SummaryEntry {
        name: name.to_string(),
        surprisingness,
        summary: result.into(),
    })
}

fn lookup(dataset: &Dataset, name: &str) -> Result<Vec<f64>, CliError> {
    dataset
        .series(name)
        .ok_or_else(|| CliError::invalid_input(format!("variable '{name}' not found in dataset")))
}

fn rank_key(score: f64) -> f64 {
    if score.is_nan() {
        f64::NEG_INFINITY
    } else {
        score
    }
}
