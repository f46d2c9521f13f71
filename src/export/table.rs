use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};
use serde::Serialize;

use crate::data::model::PeakResult;
use crate::error::{PeakMapError, Result};

pub const CENTER_HEADER: &str = "Center (X-axis)";
pub const INTENSITY_HEADER: &str = "Intensity";

/// Peak results laid out as two parallel columns, one row per position.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsTable {
    pub centers: Vec<f64>,
    pub intensities: Vec<f64>,
}

/// One CSV record; field names are the column headers.
#[derive(Serialize)]
struct Row {
    #[serde(rename = "Center (X-axis)")]
    center: f64,
    #[serde(rename = "Intensity")]
    intensity: f64,
}

pub fn export_results(results: &[PeakResult]) -> ResultsTable {
    let (centers, intensities) = results
        .iter()
        .map(|r| (r.representative_x, r.top3_avg))
        .unzip();
    ResultsTable {
        centers,
        intensities,
    }
}

impl ResultsTable {
    pub fn headers(&self) -> [&'static str; 2] {
        [CENTER_HEADER, INTENSITY_HEADER]
    }

    /// Write as CSV with a header row.
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        for (&center, &intensity) in self.centers.iter().zip(&self.intensities) {
            writer.serialize(Row { center, intensity })?;
        }
        writer.flush().map_err(|e| PeakMapError::io(path, e))?;
        Ok(())
    }

    /// Write a single-sheet workbook: bold header row, then one row per position.
    pub fn write_xlsx(&self, path: &Path) -> Result<()> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        let bold = Format::new().set_bold();

        for (col, header) in (0u16..).zip(self.headers()) {
            sheet.write_string_with_format(0, col, header, &bold)?;
        }
        for (row, (&center, &intensity)) in (1u32..).zip(self.centers.iter().zip(&self.intensities)) {
            sheet.write_number(row, 0, center)?;
            sheet.write_number(row, 1, intensity)?;
        }

        workbook.save(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<PeakResult> {
        vec![
            PeakResult {
                representative_x: 2.0,
                top3_avg: 40.0,
            },
            PeakResult {
                representative_x: 4.0,
                top3_avg: 15.0,
            },
        ]
    }

    #[test]
    fn test_export_keeps_order() {
        let table = export_results(&sample());
        assert_eq!(table.headers(), ["Center (X-axis)", "Intensity"]);
        assert_eq!(table.centers, vec![2.0, 4.0]);
        assert_eq!(table.intensities, vec![40.0, 15.0]);
    }

    #[test]
    fn test_write_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");
        export_results(&sample()).write_csv(&path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<String> = reader
            .headers()
            .unwrap()
            .iter()
            .map(str::to_string)
            .collect();
        assert_eq!(headers, vec!["Center (X-axis)", "Intensity"]);

        let rows: Vec<(f64, f64)> = reader
            .records()
            .map(|r| {
                let r = r.unwrap();
                (r[0].parse().unwrap(), r[1].parse().unwrap())
            })
            .collect();
        assert_eq!(rows, vec![(2.0, 40.0), (4.0, 15.0)]);
    }

    #[test]
    fn test_write_csv_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("results.csv");
        assert!(export_results(&sample()).write_csv(&path).is_err());
    }

    #[test]
    fn test_write_xlsx() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.xlsx");
        export_results(&sample()).write_xlsx(&path).unwrap();

        // xlsx is a zip container
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"PK\x03\x04"));
    }

    #[test]
    fn test_write_xlsx_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("results.xlsx");
        assert!(matches!(
            export_results(&sample()).write_xlsx(&path),
            Err(PeakMapError::Workbook(_))
        ));
    }
}
