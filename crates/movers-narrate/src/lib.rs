// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

//! Sentences describing a variable's most recent change.
//!
//! [`VariableSummarizer`] renders four forms (short/long, qualitative/
//! quantitative). Long forms append a detail clause that says whether the
//! latest change continues a same-direction run, breaks one, or follows a
//! one-off move; [`trend`] holds that classification.

pub mod summarizer;
pub mod trend;

pub use summarizer::{
    Summaries, VariableSummarizer, MIN_OBSERVATIONS_FOR_CHANGE, MIN_OBSERVATIONS_FOR_DETAIL,
    MIN_OBSERVATIONS_FOR_PREVIOUS,
};
pub use trend::{classify, prior_run_length, TrendContext};
