mod analysis;
mod app;
mod color;
mod data;
mod error;
mod export;
mod params;
mod state;
mod ui;

use app::PeakMapApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    log::info!("Starting Peak Map v{}", env!("CARGO_PKG_VERSION"));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 750.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Peak Map – Spectra Analysis",
        options,
        Box::new(|cc| {
            // Image loaders decode the heatmap PNGs shown after a run.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(PeakMapApp::default()))
        }),
    )
}
