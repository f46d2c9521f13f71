use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct PeakMapApp {
    pub state: AppState,
}

impl eframe::App for PeakMapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: selections and parameters ----
        egui::SidePanel::left("analysis_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: average spectrum, then heatmaps ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let plot_height = if self.state.previews.is_empty() {
                ui.available_height()
            } else {
                ui.available_height() * 0.5
            };
            plot::average_plot(ui, &self.state, plot_height);
            plot::heatmap_previews(ui, &self.state);
        });
    }
}
