use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a load or an analysis run.
#[derive(Debug, Error)]
pub enum PeakMapError {
    #[error("Please select both input file and output directory ({0} missing)")]
    MissingSelection(&'static str),

    #[error("{} could not be loaded; select a valid spectral file", .0.display())]
    InputNotLoaded(PathBuf),

    #[error("Invalid input for {name}: '{value}'")]
    InvalidParameter { name: &'static str, value: String },

    #[error("Region [{start}, {end}] is invalid: start must not exceed end")]
    InvalidRegion { start: f64, end: f64 },

    #[error("No x values fall inside region [{start}, {end}]")]
    EmptyRegion { start: f64, end: f64 },

    #[error("Column {column} has no finite intensity inside the region")]
    NoFiniteSamples { column: usize },

    #[error("Cannot reshape {len} values into a {rows} x {cols} grid")]
    ShapeMismatch { rows: usize, cols: usize, len: usize },

    #[error("Input file contains no data rows")]
    EmptyInput,

    #[error("Input file has an x column but no intensity columns")]
    NoDataColumns,

    #[error("Line {line}, column {column}: '{token}' is not a number")]
    Parse {
        line: usize,
        column: usize,
        token: String,
    },

    #[error("Line {line}: expected {expected} columns, found {found}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Column {column} has {found} samples but the x-axis has {expected}")]
    ColumnLength {
        column: usize,
        expected: usize,
        found: usize,
    },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Rendering {}: {message}", .path.display())]
    Render { path: PathBuf, message: String },

    #[error("Writing results table: {0}")]
    Export(#[from] csv::Error),

    #[error("Writing results workbook: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),
}

impl PeakMapError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PeakMapError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PeakMapError>;
