use crate::config::simulation::SimulationConfig;
use crate::config::traits::ConfigSection;
use crate::engines::simulation::PathogenParams;
use crate::error::{Result, VirusEvolveError};
use crate::ui::state::AppState;

pub struct ConfigBridge;

impl ConfigBridge {
    /// Convert AppState to SimulationConfig
    pub fn to_simulation_config(state: &AppState) -> Result<SimulationConfig> {
        let config = SimulationConfig {
            generations: state.generations,
            adaptation_rate: state.adaptation_rate,
            immune_strength: state.immune_strength,
            seed: Self::parse_seed(&state.seed_input)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Resolve the selected preset and overrides into validated pathogen parameters
    pub fn to_pathogen_params(state: &AppState) -> Result<(String, PathogenParams)> {
        let preset = state.catalog.select(&state.selection_input)?;
        let params = preset.resolve(&state.overrides);
        params.validate()?;
        Ok((preset.name.clone(), params))
    }

    /// Blank seed means "fresh entropy"
    pub fn parse_seed(input: &str) -> Result<Option<u64>> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        trimmed.parse::<u64>().map(Some).map_err(|_| {
            VirusEvolveError::Configuration(format!(
                "Seed must be a non-negative integer, got '{}'",
                trimmed
            ))
        })
    }
}
