use crate::error::{PeakMapError, Result};

// ---------------------------------------------------------------------------
// SpectralTable – the complete loaded file
// ---------------------------------------------------------------------------

/// A spectral map: one shared x-axis and one intensity column per
/// acquisition position. Stored column-major so that per-position scans
/// walk contiguous memory.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectralTable {
    /// X-axis values, in file order (not necessarily sorted).
    x: Vec<f64>,
    /// `columns[c][r]` is the intensity of position `c` at row `r`.
    columns: Vec<Vec<f64>>,
}

impl SpectralTable {
    /// Build a table from an x-axis and its intensity columns.
    ///
    /// Every column must have exactly `x.len()` samples.
    pub fn new(x: Vec<f64>, columns: Vec<Vec<f64>>) -> Result<Self> {
        if x.is_empty() {
            return Err(PeakMapError::EmptyInput);
        }
        if columns.is_empty() {
            return Err(PeakMapError::NoDataColumns);
        }
        if let Some((c, col)) = columns
            .iter()
            .enumerate()
            .find(|(_, col)| col.len() != x.len())
        {
            return Err(PeakMapError::ColumnLength {
                column: c,
                expected: x.len(),
                found: col.len(),
            });
        }
        Ok(SpectralTable { x, columns })
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    #[cfg(test)]
    pub fn column(&self, index: usize) -> &[f64] {
        &self.columns[index]
    }

    pub fn columns(&self) -> impl Iterator<Item = &[f64]> {
        self.columns.iter().map(Vec::as_slice)
    }

    /// Number of sample points (rows in the file).
    pub fn n_rows(&self) -> usize {
        self.x.len()
    }

    /// Number of intensity columns (acquisition positions).
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Smallest and largest x value, ignoring NaN.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        self.x
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

// ---------------------------------------------------------------------------
// Region – inclusive x-axis interval
// ---------------------------------------------------------------------------

/// Closed interval `[start, end]` restricting the peak search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    start: f64,
    end: f64,
}

impl Region {
    pub fn new(start: f64, end: f64) -> Result<Self> {
        if !start.is_finite() || !end.is_finite() || start > end {
            return Err(PeakMapError::InvalidRegion { start, end });
        }
        Ok(Region { start, end })
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    /// Inclusive on both ends.
    pub fn contains(&self, x: f64) -> bool {
        x >= self.start && x <= self.end
    }
}

// ---------------------------------------------------------------------------
// PeakResult – one per intensity column
// ---------------------------------------------------------------------------

/// Peak summary for one acquisition position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeakResult {
    /// X value of the single largest sample inside the region.
    pub representative_x: f64,
    /// Mean of the (up to) three largest samples inside the region.
    pub top3_avg: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_rejects_mismatched_column() {
        let err = SpectralTable::new(vec![1.0, 2.0], vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(
            err,
            PeakMapError::ColumnLength {
                column: 1,
                expected: 2,
                found: 1,
            }
        ));
    }

    #[test]
    fn test_table_requires_data_columns() {
        assert!(matches!(
            SpectralTable::new(vec![1.0], vec![]),
            Err(PeakMapError::NoDataColumns)
        ));
        assert!(matches!(
            SpectralTable::new(vec![], vec![vec![]]),
            Err(PeakMapError::EmptyInput)
        ));
    }

    #[test]
    fn test_x_range_ignores_nan() {
        let table =
            SpectralTable::new(vec![5.0, f64::NAN, -2.0, 3.0], vec![vec![0.0; 4]]).unwrap();
        assert_eq!(table.x_range(), Some((-2.0, 5.0)));
    }

    #[test]
    fn test_region_bounds() {
        let region = Region::new(240.0, 254.0).unwrap();
        assert!(region.contains(240.0));
        assert!(region.contains(254.0));
        assert!(!region.contains(254.0001));
        assert!(Region::new(3.0, 3.0).is_ok());
        assert!(matches!(
            Region::new(5.0, 1.0),
            Err(PeakMapError::InvalidRegion { .. })
        ));
        assert!(Region::new(f64::NAN, 1.0).is_err());
    }
}
