use std::io;
use std::path::{Path, PathBuf};

use crate::data::grid::{check_shape, reshape_to_grid, Grid};
use crate::data::model::{PeakResult, SpectralTable};
use crate::data::peaks::extract_region_peaks;
use crate::error::{PeakMapError, Result};
use crate::export::heatmap::{HeatmapRenderer, CENTER_HEATMAP, INTENSITY_HEATMAP};
use crate::export::table::export_results;
use crate::export::{RESULTS_CSV, RESULTS_XLSX};
use crate::params::AnalysisParams;

// ---------------------------------------------------------------------------
// One analysis run
// ---------------------------------------------------------------------------

/// Everything an analysis run needs, passed explicitly.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisJob<'a> {
    pub table: &'a SpectralTable,
    pub params: AnalysisParams,
    pub output_dir: &'a Path,
}

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub results: Vec<PeakResult>,
    pub centers: Grid,
    pub intensities: Grid,
    pub center_png: PathBuf,
    pub intensity_png: PathBuf,
    pub results_xlsx: PathBuf,
    pub results_csv: PathBuf,
}

/// Extract peaks, then write both heatmaps and the results table.
///
/// All validation (grid shape, region, output directory) happens before the
/// first file is written, so a failed run leaves no partial artifacts.
pub fn run_analysis(job: &AnalysisJob, renderer: &dyn HeatmapRenderer) -> Result<AnalysisReport> {
    let AnalysisParams {
        region,
        points_per_line: cols,
        lines_per_image: rows,
    } = job.params;

    check_shape(job.table.n_columns(), rows, cols)?;

    log::info!(
        "Analyzing {} columns in region [{}, {}] as {} x {} grid",
        job.table.n_columns(),
        region.start(),
        region.end(),
        rows,
        cols
    );
    let results = extract_region_peaks(job.table, &region)?;

    let centers = reshape_to_grid(results.iter().map(|r| r.representative_x).collect(), rows, cols)?;
    let intensities = reshape_to_grid(results.iter().map(|r| r.top3_avg).collect(), rows, cols)?;

    if !job.output_dir.is_dir() {
        return Err(PeakMapError::io(
            job.output_dir,
            io::Error::new(io::ErrorKind::NotFound, "output directory does not exist"),
        ));
    }

    let center_png = job.output_dir.join(CENTER_HEATMAP.file_name);
    let intensity_png = job.output_dir.join(INTENSITY_HEATMAP.file_name);
    let results_xlsx = job.output_dir.join(RESULTS_XLSX);
    let results_csv = job.output_dir.join(RESULTS_CSV);

    renderer.render(&center_png, &centers, &CENTER_HEATMAP)?;
    renderer.render(&intensity_png, &intensities, &INTENSITY_HEATMAP)?;
    let table = export_results(&results);
    table.write_xlsx(&results_xlsx)?;
    table.write_csv(&results_csv)?;
    log::info!(
        "Wrote {} and {}",
        results_xlsx.display(),
        results_csv.display()
    );

    Ok(AnalysisReport {
        results,
        centers,
        intensities,
        center_png,
        intensity_png,
        results_xlsx,
        results_csv,
    })
}
