// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::MoversError;

/// Borrowed numeric data view over either f32 or f64 values.
#[derive(Clone, Copy, Debug)]
pub enum DTypeView<'a> {
    F32(&'a [f32]),
    F64(&'a [f64]),
}

impl DTypeView<'_> {
    pub fn len(&self) -> usize {
        match self {
            Self::F32(slice) => slice.len(),
            Self::F64(slice) => slice.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Row-major view over `n` periods of `d` columns each.
///
/// Only `d == 1` views are series in the scoring sense; wider views exist so
/// that callers holding tabular buffers get a typed shape error instead of a
/// silently flattened series.
#[derive(Clone, Copy, Debug)]
pub struct SeriesView<'a> {
    pub values: DTypeView<'a>,
    pub n: usize,
    pub d: usize,
}

impl<'a> SeriesView<'a> {
    /// Constructs a validated `SeriesView`.
    pub fn new(values: DTypeView<'a>, n: usize, d: usize) -> Result<Self, MoversError> {
        if n == 0 {
            return Err(MoversError::invalid_input("n must be >= 1"));
        }
        if d == 0 {
            return Err(MoversError::invalid_input("d must be >= 1"));
        }

        let expected_len = n
            .checked_mul(d)
            .ok_or_else(|| MoversError::invalid_input("n*d overflow while validating shape"))?;

        let value_len = values.len();
        if value_len != expected_len {
            return Err(MoversError::invalid_input(format!(
                "value length mismatch: got {value_len}, expected {expected_len} (n={n}, d={d})"
            )));
        }

        Ok(Self { values, n, d })
    }

    pub fn from_f32(values: &'a [f32], n: usize, d: usize) -> Result<Self, MoversError> {
        Self::new(DTypeView::F32(values), n, d)
    }

    pub fn from_f64(values: &'a [f64], n: usize, d: usize) -> Result<Self, MoversError> {
        Self::new(DTypeView::F64(values), n, d)
    }

    /// One column, one row per observation.
    pub fn univariate(values: &'a [f64]) -> Result<Self, MoversError> {
        Self::from_f64(values, values.len(), 1)
    }

    /// Returns true when `d == 1`.
    pub fn is_univariate(&self) -> bool {
        self.d == 1
    }

    /// Returns true when `d > 1`.
    pub fn is_multivariate(&self) -> bool {
        self.d > 1
    }

    /// Fails with [`MoversError::Shape`] unless the view is one-dimensional.
    pub fn ensure_univariate(&self) -> Result<(), MoversError> {
        if self.is_multivariate() {
            return Err(MoversError::shape(self.d));
        }
        Ok(())
    }

    /// Copies the values out as f64 in row-major order.
    pub fn to_f64_vec(&self) -> Vec<f64> {
        match self.values {
            DTypeView::F32(slice) => slice.iter().copied().map(f64::from).collect(),
            DTypeView::F64(slice) => slice.to_vec(),
        }
    }
}
