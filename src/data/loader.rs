use std::path::Path;

use crate::error::{PeakMapError, Result};

use super::model::SpectralTable;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a spectral map from a whitespace-delimited text file.
///
/// Layout (no header row):
///
/// ```text
/// 240.0   12.1  13.4  11.9 ...
/// 240.5   12.8  14.0  12.2 ...
/// ```
///
/// Column 0 is the x-axis, columns 1..N are one intensity reading per
/// acquisition position.
pub fn load_file(path: &Path) -> Result<SpectralTable> {
    let text = std::fs::read_to_string(path).map_err(|e| PeakMapError::io(path, e))?;
    let table = parse_table(&text)?;
    log::debug!(
        "Parsed {}: {} rows x {} columns",
        path.display(),
        table.n_rows(),
        table.n_columns()
    );
    Ok(table)
}

/// Parse the text body of a spectral map.
///
/// Blank lines are skipped. Every non-blank line must have the same number
/// of fields as the first one. Line numbers in errors are 1-based.
pub fn parse_table(text: &str) -> Result<SpectralTable> {
    let mut x = Vec::new();
    let mut columns: Vec<Vec<f64>> = Vec::new();
    let mut width: Option<usize> = None;

    for (line_no, line) in text.lines().enumerate() {
        let line_no = line_no + 1;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }

        let expected = *width.get_or_insert_with(|| {
            columns = vec![Vec::new(); tokens.len().saturating_sub(1)];
            tokens.len()
        });
        if tokens.len() != expected {
            return Err(PeakMapError::RaggedRow {
                line: line_no,
                expected,
                found: tokens.len(),
            });
        }

        x.push(parse_float(tokens[0], line_no, 0)?);
        for (c, tok) in tokens[1..].iter().enumerate() {
            columns[c].push(parse_float(tok, line_no, c + 1)?);
        }
    }

    match width {
        None => Err(PeakMapError::EmptyInput),
        Some(1) => Err(PeakMapError::NoDataColumns),
        Some(_) => SpectralTable::new(x, columns),
    }
}

fn parse_float(tok: &str, line: usize, column: usize) -> Result<f64> {
    tok.parse::<f64>().map_err(|_| PeakMapError::Parse {
        line,
        column,
        token: tok.to_string(),
    })
}
