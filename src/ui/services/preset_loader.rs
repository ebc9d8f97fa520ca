use crate::data::PresetCatalog;
use crate::ui::state::AppState;
use std::path::Path;

pub struct PresetLoader;

impl PresetLoader {
    /// Merge a preset file into the state's catalog.
    ///
    /// Failures are reported in the status line and the catalog keeps its
    /// current contents.
    pub fn load_into(state: &mut AppState, path: &Path) -> bool {
        match state.catalog.load_file(path) {
            Ok(report) => {
                state.status_message = format!(
                    "Data updated successfully from {} ({} updated, {} added, {} skipped)",
                    path.display(),
                    report.updated.len(),
                    report.added.len(),
                    report.skipped.len()
                );
                state.preset_file_path = Some(path.to_path_buf());
                state.last_merge = Some(report);
                true
            }
            Err(e) => {
                log::warn!("{}", e);
                state.status_message = format!("Failed to update data: {}. Using default values.", e);
                false
            }
        }
    }

    /// Drop any imported presets and go back to the built-in table.
    pub fn reset(state: &mut AppState) {
        state.catalog = PresetCatalog::builtin();
        state.preset_file_path = None;
        state.last_merge = None;
        state.status_message = "Using built-in presets".to_string();
    }
}
