use crate::error::{PeakMapError, Result};

/// Row-major `rows × cols` matrix, one cell per acquisition position.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

/// Lay `values` out row-major: element `i` lands at `(i / cols, i % cols)`.
///
/// No padding or truncation: `values.len()` must equal `rows * cols`.
pub fn reshape_to_grid(values: Vec<f64>, rows: usize, cols: usize) -> Result<Grid> {
    check_shape(values.len(), rows, cols)?;
    Ok(Grid { rows, cols, values })
}

/// Fails with `ShapeMismatch` unless `len == rows * cols`.
pub fn check_shape(len: usize, rows: usize, cols: usize) -> Result<()> {
    match rows.checked_mul(cols) {
        Some(n) if n == len => Ok(()),
        _ => Err(PeakMapError::ShapeMismatch { rows, cols, len }),
    }
}

impl Grid {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[cfg(test)]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.cols + col]
    }

    /// Iterate rows top to bottom.
    pub fn row_iter(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks(self.cols.max(1))
    }

    /// Smallest and largest finite value.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Row-major values; inverse of [`reshape_to_grid`].
    #[cfg(test)]
    pub fn flatten(self) -> Vec<f64> {
        self.values
    }
}
