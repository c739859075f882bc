// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

//! Shared types for the movers scorer and narrator.

pub mod change;
pub mod error;
pub mod series;

pub use change::{changes, Direction};
pub use error::MoversError;
pub use series::{DTypeView, SeriesView};
