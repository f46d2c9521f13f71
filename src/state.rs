use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::analysis::{run_analysis, AnalysisJob, AnalysisReport};
use crate::data::loader;
use crate::data::model::SpectralTable;
use crate::data::peaks::compute_average_spectrum;
use crate::error::PeakMapError;
use crate::export::heatmap::{PngHeatmap, CENTER_HEATMAP, INTENSITY_HEATMAP};
use crate::params::ParamInputs;

// ---------------------------------------------------------------------------
// Status line
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Info(String),
    Error(String),
}

/// A generated heatmap, kept in memory for display.
#[derive(Debug, Clone)]
pub struct HeatmapPreview {
    pub label: &'static str,
    /// Unique per run so egui does not serve a cached image.
    pub uri: String,
    pub bytes: Arc<[u8]>,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Selected input file.
    pub input_path: Option<PathBuf>,

    /// Selected output directory.
    pub output_dir: Option<PathBuf>,

    /// Loaded table (None until a file loads successfully). Shared by the
    /// preview plot and the analysis.
    pub table: Option<SpectralTable>,

    /// Row-wise mean across all positions, for the preview plot.
    pub average_spectrum: Vec<f64>,

    /// Parameter fields as typed.
    pub inputs: ParamInputs,

    /// Status / error message shown in the UI.
    pub status: Option<Status>,

    /// Heatmaps from the last successful run.
    pub previews: Vec<HeatmapPreview>,

    runs: u64,
}

impl AppState {
    /// Load `path` once and keep the table for both preview and analysis.
    pub fn open_file(&mut self, path: PathBuf) {
        self.previews.clear();
        match load_table(&path) {
            Ok(table) => {
                log::info!(
                    "Loaded {}: {} rows, {} positions",
                    path.display(),
                    table.n_rows(),
                    table.n_columns()
                );
                self.set_table(table);
                self.status = None;
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.table = None;
                self.average_spectrum.clear();
                self.status = Some(Status::Error(format!("Error: {e:#}")));
            }
        }
        self.input_path = Some(path);
    }

    /// Ingest a newly loaded table and compute its average spectrum.
    pub fn set_table(&mut self, table: SpectralTable) {
        self.average_spectrum = compute_average_spectrum(&table);
        self.table = Some(table);
    }

    pub fn set_output_dir(&mut self, dir: PathBuf) {
        log::info!("Output directory: {}", dir.display());
        self.output_dir = Some(dir);
    }

    /// Run the analysis with the current selections and report the outcome.
    pub fn analyze(&mut self) {
        match self.try_analyze() {
            Ok(report) => {
                self.previews = load_previews(&report, self.runs).unwrap_or_else(|e| {
                    log::warn!("Could not load heatmap previews: {e:#}");
                    Vec::new()
                });
                if let Some((lo, hi)) = report.intensities.value_range() {
                    log::info!("Peak intensity range: [{lo}, {hi}]");
                }
                self.status = Some(Status::Info(format!(
                    "Analysis complete! {} positions ({} x {}) saved to {} and {}.",
                    report.results.len(),
                    report.centers.rows(),
                    report.centers.cols(),
                    file_label(&report.results_xlsx),
                    file_label(&report.results_csv),
                )));
            }
            Err(e) => {
                log::error!("Analysis failed: {e:#}");
                self.status = Some(Status::Error(format!("Error: {e:#}")));
            }
        }
    }

    fn try_analyze(&mut self) -> Result<AnalysisReport> {
        let (Some(table), Some(output_dir)) = (&self.table, &self.output_dir) else {
            return Err(match (&self.input_path, &self.table) {
                (Some(path), None) => PeakMapError::InputNotLoaded(path.clone()),
                (None, None) => PeakMapError::MissingSelection("input file"),
                _ => PeakMapError::MissingSelection("output directory"),
            }
            .into());
        };
        let params = self.inputs.parse()?;

        self.runs += 1;
        let job = AnalysisJob {
            table,
            params,
            output_dir,
        };
        let report = run_analysis(&job, &PngHeatmap::default()).context("running analysis")?;
        Ok(report)
    }
}

fn load_table(path: &Path) -> Result<SpectralTable> {
    let table = loader::load_file(path).with_context(|| format!("loading {}", path.display()))?;
    Ok(table)
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn load_previews(report: &AnalysisReport, run: u64) -> Result<Vec<HeatmapPreview>> {
    [
        (&report.center_png, CENTER_HEATMAP.title),
        (&report.intensity_png, INTENSITY_HEATMAP.title),
    ]
    .into_iter()
    .map(|(path, label)| -> Result<HeatmapPreview> {
        let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        Ok(HeatmapPreview {
            label,
            uri: format!("bytes://run{run}/{}", path.display()),
            bytes: bytes.into(),
        })
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_requires_selections() {
        let mut state = AppState::default();
        state.analyze();
        match &state.status {
            Some(Status::Error(msg)) => assert!(msg.contains("input file missing"), "{msg}"),
            other => panic!("unexpected status {other:?}"),
        }

        state.set_table(SpectralTable::new(vec![1.0], vec![vec![2.0]]).unwrap());
        state.analyze();
        match &state.status {
            Some(Status::Error(msg)) => assert!(msg.contains("output directory missing"), "{msg}"),
            other => panic!("unexpected status {other:?}"),
        }
    }

    #[test]
    fn test_invalid_parameter_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = AppState::default();
        state.set_table(SpectralTable::new(vec![1.0], vec![vec![2.0]]).unwrap());
        state.set_output_dir(dir.path().to_path_buf());
        state.inputs.points_per_line = "1.5".into();
        state.analyze();
        match &state.status {
            Some(Status::Error(msg)) => assert!(msg.contains("points per line"), "{msg}"),
            other => panic!("unexpected status {other:?}"),
        }
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_open_file_caches_table_and_average() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.txt");
        std::fs::write(&path, "1 2 4\n2 6 8\n").unwrap();

        let mut state = AppState::default();
        state.open_file(path.clone());
        assert_eq!(state.input_path.as_deref(), Some(path.as_path()));
        assert_eq!(state.table.as_ref().map(|t| t.n_columns()), Some(2));
        assert_eq!(state.average_spectrum, vec![3.0, 7.0]);
        assert!(state.status.is_none());
    }

    #[test]
    fn test_open_bad_file_clears_table() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.txt");
        let bad = dir.path().join("bad.txt");
        std::fs::write(&good, "1 2\n").unwrap();
        std::fs::write(&bad, "1 2\n3\n").unwrap();

        let mut state = AppState::default();
        state.open_file(good);
        assert!(state.table.is_some());
        state.open_file(bad);
        assert!(state.table.is_none());
        assert!(state.average_spectrum.is_empty());
        assert!(matches!(state.status, Some(Status::Error(_))));
    }

    #[test]
    fn test_analyze_after_failed_load_reports_load_failure() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("bad.txt");
        std::fs::write(&bad, "1 2\n3\n").unwrap();

        let mut state = AppState::default();
        state.set_output_dir(dir.path().to_path_buf());
        state.open_file(bad);
        state.analyze();
        match &state.status {
            Some(Status::Error(msg)) => {
                assert!(msg.contains("bad.txt could not be loaded"), "{msg}");
                assert!(!msg.contains("input file missing"), "{msg}");
            }
            other => panic!("unexpected status {other:?}"),
        }
    }

    #[test]
    fn test_oversized_grid_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = AppState::default();
        state.set_table(SpectralTable::new(vec![1.0], vec![vec![2.0]]).unwrap());
        state.set_output_dir(dir.path().to_path_buf());
        state.inputs.points_per_line = "2".into();
        state.inputs.lines_per_image = usize::MAX.to_string();
        state.inputs.region_start = "0".into();
        state.inputs.region_end = "5".into();
        state.analyze();
        match &state.status {
            Some(Status::Error(msg)) => assert!(msg.contains("Cannot reshape 1 values"), "{msg}"),
            other => panic!("unexpected status {other:?}"),
        }
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
