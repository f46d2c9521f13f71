use std::path::Path;

use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::{AppState, Status};

// ---------------------------------------------------------------------------
// Left side panel – selections and analysis inputs
// ---------------------------------------------------------------------------

/// Render the left panel: file selection, parameters, Analyze button.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("(1) File + Directory");
    ui.separator();

    ui.strong("Spectral file (.txt)");
    ui.horizontal(|ui: &mut Ui| {
        if ui.button("Browse…").clicked() {
            open_file_dialog(state);
        }
        ui.label(path_label(state.input_path.as_deref(), "No file selected"));
    });

    ui.add_space(4.0);
    ui.strong("Output directory");
    ui.horizontal(|ui: &mut Ui| {
        if ui.button("Browse…").clicked() {
            choose_output_dir(state);
        }
        ui.label(path_label(state.output_dir.as_deref(), "No directory selected"));
    });

    ui.add_space(12.0);
    ui.heading("(2) Analysis Inputs");
    ui.separator();

    egui::Grid::new("analysis_inputs")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui: &mut Ui| {
            let inputs = &mut state.inputs;
            for (label, text) in [
                ("Region Start:", &mut inputs.region_start),
                ("Region End:", &mut inputs.region_end),
                ("Points per Line:", &mut inputs.points_per_line),
                ("Lines per Image:", &mut inputs.lines_per_image),
            ] {
                ui.label(label);
                ui.add(egui::TextEdit::singleline(text).desired_width(80.0));
                ui.end_row();
            }
        });

    ui.add_space(8.0);
    if ui
        .add_enabled(state.table.is_some(), egui::Button::new("Analyze"))
        .clicked()
    {
        state.analyze();
    }

    ui.add_space(8.0);
    match &state.status {
        Some(Status::Info(msg)) => {
            ui.label(RichText::new(msg).color(Color32::from_rgb(60, 160, 60)));
        }
        Some(Status::Error(msg)) => {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
        None => {}
    }
}

fn path_label(path: Option<&Path>, empty: &str) -> String {
    match path {
        Some(p) => p
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| p.display().to_string()),
        None => empty.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open spectral file…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Choose output directory…").clicked() {
                choose_output_dir(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(table) = &state.table {
            ui.label(format!(
                "{} points × {} positions loaded",
                table.n_rows(),
                table.n_columns()
            ));
            if let Some((lo, hi)) = table.x_range() {
                ui.label(format!("x ∈ [{lo}, {hi}]"));
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui: &mut Ui| {
            egui::widgets::global_theme_preference_switch(ui);
        });
    });
}

// ---------------------------------------------------------------------------
// Dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Select the .txt file")
        .add_filter("Text files", &["txt"])
        .add_filter("All files", &["*"])
        .pick_file();

    if let Some(path) = file {
        state.open_file(path);
    }
}

pub fn choose_output_dir(state: &mut AppState) {
    let dir = rfd::FileDialog::new()
        .set_title("Select the directory to save results")
        .pick_folder();

    if let Some(dir) = dir {
        state.set_output_dir(dir);
    }
}
