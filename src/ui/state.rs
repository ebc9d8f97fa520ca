use crate::config::{AppConfig, DisplayConfig};
use crate::data::{MergeReport, PresetCatalog, UserOverrides};
use crate::engines::simulation::{PathogenParams, SimulationRecord};
use std::path::PathBuf;

/// Central application state for the UI
pub struct AppState {
    // Preset Data
    pub catalog: PresetCatalog,
    pub preset_file_path: Option<PathBuf>,
    pub last_merge: Option<MergeReport>,

    // Sickness Selection
    pub selection_input: String,
    pub selection_error: Option<String>,

    // Parameter Overrides
    pub overrides: UserOverrides,

    // Simulation Configuration
    pub generations: usize,
    pub adaptation_rate: f64,
    pub immune_strength: f64,
    pub seed_input: String,

    // Display
    pub display: DisplayConfig,

    // Execution State
    pub run_requested: bool,
    pub status_message: String,

    // Results
    pub record: Option<SimulationRecord>,
    pub resolved_params: Option<PathogenParams>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            catalog: PresetCatalog::builtin(),
            preset_file_path: None,
            last_merge: None,

            selection_input: String::new(),
            selection_error: None,

            overrides: UserOverrides::default(),

            generations: config.simulation.generations,
            adaptation_rate: config.simulation.adaptation_rate,
            immune_strength: config.simulation.immune_strength,
            seed_input: config
                .simulation
                .seed
                .map(|s| s.to_string())
                .unwrap_or_default(),

            display: config.display.clone(),

            run_requested: false,
            status_message: "Ready".to_string(),

            record: None,
            resolved_params: None,
        }
    }

    /// Name of the preset the current menu input points at, if valid.
    pub fn selected_name(&self) -> Option<&str> {
        self.catalog
            .select(&self.selection_input)
            .ok()
            .map(|p| p.name.as_str())
    }
}
