// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use thiserror::Error;

/// Failure conditions surfaced by the scorer and the narrator.
///
/// Every variant is fatal to the single call that produced it; callers pick
/// their own per-variable degradation policy.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum MoversError {
    /// The input is not a one-dimensional series.
    #[error("series must be one-dimensional, got {d} columns")]
    Shape { d: usize },

    /// The series is too short for the requested operation.
    #[error("{operation} requires at least {required} observations, got {actual}")]
    InsufficientHistory {
        operation: &'static str,
        required: usize,
        actual: usize,
    },

    /// An arithmetic step divided by an exact zero.
    #[error("division by zero: {0}")]
    DivideByZero(String),

    /// Malformed arguments, such as a non-positive time window.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl MoversError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn divide_by_zero(msg: impl Into<String>) -> Self {
        Self::DivideByZero(msg.into())
    }

    pub fn shape(d: usize) -> Self {
        Self::Shape { d }
    }

    pub fn insufficient_history(operation: &'static str, required: usize, actual: usize) -> Self {
        Self::InsufficientHistory {
            operation,
            required,
            actual,
        }
    }

    /// Stable machine-readable code for error envelopes.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Shape { .. } => "shape_error",
            Self::InsufficientHistory { .. } => "insufficient_history",
            Self::DivideByZero(_) => "divide_by_zero",
            Self::InvalidInput(_) => "invalid_input",
        }
    }
}
