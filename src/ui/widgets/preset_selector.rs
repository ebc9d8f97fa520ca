use crate::ui::services::PresetLoader;
use crate::ui::state::AppState;

pub struct PresetSelector;

impl PresetSelector {
    pub fn show(ui: &mut egui::Ui, state: &mut AppState) {
        ui.horizontal(|ui| {
            if ui.button("Load JSON File...").clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .set_title("Select a JSON file with sickness data")
                    .add_filter("JSON files", &["json"])
                    .add_filter("All files", &["*"])
                    .pick_file()
                {
                    PresetLoader::load_into(state, &path);
                } else {
                    state.status_message = "No file selected. Using default values.".to_string();
                }
            }

            if ui.button("Reset").clicked() {
                PresetLoader::reset(state);
            }
        });

        // Display current file info
        if let Some(path) = &state.preset_file_path {
            ui.label(format!("File: {}", path.file_name().unwrap_or_default().to_string_lossy()));

            if let Some(report) = &state.last_merge {
                ui.label(format!("Updated: {}", report.updated.len()));
                ui.label(format!("Added: {}", report.added.len()));
                if !report.skipped.is_empty() {
                    ui.colored_label(
                        egui::Color32::YELLOW,
                        format!("Skipped: {}", report.skipped.join(", ")),
                    );
                }
            }
        } else {
            ui.label("Built-in presets");
        }
    }
}
