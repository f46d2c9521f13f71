use std::path::Path;

use plotters::prelude::*;

use crate::color::{ColorMap, ValueScale};
use crate::data::grid::Grid;
use crate::error::{PeakMapError, Result};

/// Title and colour-bar label of one heatmap figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatmapStyle {
    pub title: &'static str,
    pub colorbar_label: &'static str,
    pub file_name: &'static str,
}

pub const CENTER_HEATMAP: HeatmapStyle = HeatmapStyle {
    title: "Center Heatmap",
    colorbar_label: "Peak Center (X-axis)",
    file_name: "center_heatmap.png",
};

pub const INTENSITY_HEATMAP: HeatmapStyle = HeatmapStyle {
    title: "Intensity Heatmap",
    colorbar_label: "Peak Intensity",
    file_name: "intensity_heatmap.png",
};

/// Something that can turn a grid into an image file.
pub trait HeatmapRenderer {
    fn render(&self, path: &Path, grid: &Grid, style: &HeatmapStyle) -> Result<()>;
}

// ---------------------------------------------------------------------------
// PNG renderer
// ---------------------------------------------------------------------------

const FIGURE_SIZE: (u32, u32) = (800, 600);
const COLORBAR_STEPS: usize = 256;
const FONT: &str = "sans-serif";

/// Renders heatmaps as PNG figures with a colour bar, row 0 at the top.
#[derive(Debug, Clone)]
pub struct PngHeatmap {
    cmap: ColorMap,
    size: (u32, u32),
}

impl Default for PngHeatmap {
    fn default() -> Self {
        Self {
            cmap: ColorMap::plasma(),
            size: FIGURE_SIZE,
        }
    }
}

impl HeatmapRenderer for PngHeatmap {
    fn render(&self, path: &Path, grid: &Grid, style: &HeatmapStyle) -> Result<()> {
        self.draw(path, grid, style)
            .map_err(|e| PeakMapError::Render {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        log::info!("Wrote {}", path.display());
        Ok(())
    }
}

impl PngHeatmap {
    fn draw(
        &self,
        path: &Path,
        grid: &Grid,
        style: &HeatmapStyle,
    ) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let (lo, hi) = grid.value_range().unwrap_or((0.0, 1.0));
        let scale = ValueScale::new(lo, hi);
        let rows = grid.rows();
        let cols = grid.cols();

        let root = BitMapBackend::new(path, self.size).into_drawing_area();
        root.fill(&WHITE)?;
        let (main, bar) = root.split_horizontally(self.size.0 * 4 / 5);

        // ---- Image ----
        let mut chart = ChartBuilder::on(&main)
            .caption(style.title, (FONT, 22))
            .margin(12)
            .x_label_area_size(30)
            .y_label_area_size(40)
            .build_cartesian_2d(0f64..cols as f64, 0f64..rows as f64)?;

        chart
            .configure_mesh()
            .disable_mesh()
            .label_style((FONT, 12))
            .y_label_formatter(&|y: &f64| format!("{:.0}", rows as f64 - y))
            .draw()?;

        let cmap = &self.cmap;
        chart.draw_series(grid.row_iter().enumerate().flat_map(|(r, line)| {
            // Flip vertically so that grid row 0 is the top of the image.
            let y0 = (rows - r - 1) as f64;
            line.iter().enumerate().map(move |(c, &v)| {
                let x0 = c as f64;
                Rectangle::new(
                    [(x0, y0), (x0 + 1.0, y0 + 1.0)],
                    cell_color(v, &scale, cmap).filled(),
                )
            })
        }))?;

        // ---- Colour bar ----
        let mut colorbar = ChartBuilder::on(&bar)
            .margin_top(46)
            .margin_bottom(42)
            .margin_right(24)
            .y_label_area_size(70)
            .build_cartesian_2d(0f64..1f64, scale.min..scale.max)?;

        colorbar
            .configure_mesh()
            .disable_mesh()
            .disable_x_axis()
            .y_desc(style.colorbar_label)
            .axis_desc_style((FONT, 14))
            .label_style((FONT, 12))
            .draw()?;

        let span = scale.max - scale.min;
        colorbar.draw_series((0..COLORBAR_STEPS).map(|i| {
            let t0 = i as f64 / COLORBAR_STEPS as f64;
            let t1 = (i + 1) as f64 / COLORBAR_STEPS as f64;
            let [r, g, b] = cmap.color_at((t0 + t1) / 2.0);
            Rectangle::new(
                [(0.0, scale.min + t0 * span), (1.0, scale.min + t1 * span)],
                RGBColor(r, g, b).filled(),
            )
        }))?;

        root.present()?;
        Ok(())
    }
}

/// Non-finite cells are left white.
fn cell_color(v: f64, scale: &ValueScale, cmap: &ColorMap) -> RGBColor {
    if !v.is_finite() {
        return WHITE;
    }
    let [r, g, b] = cmap.color_at(scale.normalize(v));
    RGBColor(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_color_follows_scale() {
        let cmap = ColorMap::plasma();
        let scale = ValueScale::new(0.0, 10.0);
        let RGBColor(r, g, b) = cell_color(0.0, &scale, &cmap);
        assert_eq!([r, g, b], cmap.color_at(0.0));
        let RGBColor(r, g, b) = cell_color(10.0, &scale, &cmap);
        assert_eq!([r, g, b], cmap.color_at(1.0));
    }

    #[test]
    fn test_non_finite_cells_are_white() {
        let cmap = ColorMap::plasma();
        let scale = ValueScale::new(0.0, 1.0);
        assert_eq!(cell_color(f64::NAN, &scale, &cmap), WHITE);
        assert_eq!(cell_color(f64::INFINITY, &scale, &cmap), WHITE);
    }

    #[test]
    fn test_styles_match_artifact_names() {
        assert_eq!(CENTER_HEATMAP.file_name, "center_heatmap.png");
        assert_eq!(CENTER_HEATMAP.colorbar_label, "Peak Center (X-axis)");
        assert_eq!(INTENSITY_HEATMAP.file_name, "intensity_heatmap.png");
        assert_eq!(INTENSITY_HEATMAP.colorbar_label, "Peak Intensity");
    }

    #[test]
    fn test_render_png_places_row_zero_on_top() {
        use crate::data::grid::reshape_to_grid;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("center_heatmap.png");
        let grid = reshape_to_grid(vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0], 2, 3).unwrap();
        let renderer = PngHeatmap::default();
        renderer.render(&path, &grid, &CENTER_HEATMAP).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"));

        let img = image::load_from_memory(&bytes).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), FIGURE_SIZE);

        // Plot area spans x 52..628 in the left 4/5 and roughly y 50..558,
        // so these points sit well inside the first column of each row.
        let scale = ValueScale::new(0.0, 5.0);
        let cmap = ColorMap::plasma();
        let RGBColor(r, g, b) = cell_color(grid.get(0, 0), &scale, &cmap);
        assert_eq!(img.get_pixel(148, 150).0, [r, g, b]);
        let RGBColor(r, g, b) = cell_color(grid.get(1, 0), &scale, &cmap);
        assert_eq!(img.get_pixel(148, 450).0, [r, g, b]);
    }
}
