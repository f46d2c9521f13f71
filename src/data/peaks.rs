use std::cmp::Ordering;

use crate::error::{PeakMapError, Result};

use super::model::{PeakResult, Region, SpectralTable};

/// How many of the largest samples contribute to a column's intensity.
pub const TOP_N: usize = 3;

/// Mean across all intensity columns, row by row.
///
/// NaN readings are skipped; a row with no finite reading averages to NaN.
pub fn compute_average_spectrum(table: &SpectralTable) -> Vec<f64> {
    let mut sums = vec![0.0; table.n_rows()];
    let mut counts = vec![0usize; table.n_rows()];

    for column in table.columns() {
        for (row, &v) in column.iter().enumerate() {
            if !v.is_nan() {
                sums[row] += v;
                counts[row] += 1;
            }
        }
    }

    sums.into_iter()
        .zip(counts)
        .map(|(sum, n)| if n == 0 { f64::NAN } else { sum / n as f64 })
        .collect()
}

/// Row indices whose x value falls inside `region`, in file order.
pub fn region_mask(table: &SpectralTable, region: &Region) -> Vec<usize> {
    table
        .x()
        .iter()
        .enumerate()
        .filter(|&(_, &x)| region.contains(x))
        .map(|(i, _)| i)
        .collect()
}

/// Find the peak of every intensity column inside `region`.
///
/// Returns exactly one [`PeakResult`] per column, in column order.
pub fn extract_region_peaks(table: &SpectralTable, region: &Region) -> Result<Vec<PeakResult>> {
    let rows = region_mask(table, region);
    if rows.is_empty() {
        return Err(PeakMapError::EmptyRegion {
            start: region.start(),
            end: region.end(),
        });
    }

    let n_columns = table.n_columns();
    let mut results = Vec::with_capacity(n_columns);
    for (c, column) in table.columns().enumerate() {
        let top = top_rows(column, &rows, TOP_N);
        let Some(&best) = top.first() else {
            return Err(PeakMapError::NoFiniteSamples { column: c });
        };
        let top3_avg = top.iter().map(|&r| column[r]).sum::<f64>() / top.len() as f64;
        results.push(PeakResult {
            representative_x: table.x()[best],
            top3_avg,
        });
        log::debug!("column {}/{}: peak at x={}", c + 1, n_columns, table.x()[best]);
    }
    Ok(results)
}

/// The `n` rows (out of `candidates`) with the largest values in `column`,
/// largest first.
///
/// NaN values are never selected. Equal values keep their order in
/// `candidates`, so ties go to the earlier row.
fn top_rows(column: &[f64], candidates: &[usize], n: usize) -> Vec<usize> {
    let mut finite: Vec<usize> = candidates
        .iter()
        .copied()
        .filter(|&r| !column[r].is_nan())
        .collect();
    // Stable sort: ties stay in candidate order.
    finite.sort_by(|&a, &b| {
        column[b]
            .partial_cmp(&column[a])
            .unwrap_or(Ordering::Equal)
    });
    finite.truncate(n);
    finite
}
