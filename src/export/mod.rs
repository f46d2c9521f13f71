/// Output artifacts: heatmap images and the results table.
pub mod heatmap;
pub mod table;

pub const RESULTS_XLSX: &str = "results.xlsx";
pub const RESULTS_CSV: &str = "results.csv";
