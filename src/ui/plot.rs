use eframe::egui::{self, Color32, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints, VLine};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Average spectrum (central panel, top)
// ---------------------------------------------------------------------------

/// Render the average spectrum, with the current region marked when the
/// region fields parse.
pub fn average_plot(ui: &mut Ui, state: &AppState, height: f32) {
    let Some(table) = &state.table else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Select a spectral file to view its average spectrum  (File → Open…)");
        });
        return;
    };

    let points: PlotPoints = table
        .x()
        .iter()
        .zip(&state.average_spectrum)
        .filter(|(_, y)| !y.is_nan())
        .map(|(&x, &y)| [x, y])
        .collect();

    let region = state.inputs.region();

    Plot::new("average_spectrum")
        .height(height)
        .legend(Legend::default())
        .x_axis_label("X-axis")
        .y_axis_label("Intensity")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(points)
                    .name("Average Spectrum")
                    .color(Color32::LIGHT_BLUE)
                    .width(1.5),
            );
            if let Some(region) = region {
                for x in [region.start(), region.end()] {
                    plot_ui.vline(
                        VLine::new(x)
                            .name("Region")
                            .color(Color32::from_rgb(230, 140, 40)),
                    );
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Heatmaps (central panel, bottom)
// ---------------------------------------------------------------------------

/// Show the heatmaps written by the last analysis run side by side.
pub fn heatmap_previews(ui: &mut Ui, state: &AppState) {
    if state.previews.is_empty() {
        return;
    }
    let width = (ui.available_width() / state.previews.len() as f32) - 8.0;
    let height = ui.available_height() - 24.0;
    ui.horizontal(|ui: &mut Ui| {
        for preview in &state.previews {
            ui.vertical(|ui: &mut Ui| {
                ui.strong(preview.label);
                ui.add(
                    egui::Image::from_bytes(preview.uri.clone(), preview.bytes.clone())
                        .max_width(width)
                        .max_height(height),
                );
            });
        }
    });
}
