use super::{
    display::DisplayConfig,
    simulation::SimulationConfig,
    traits::ConfigSection,
};
use crate::error::VirusEvolveError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Prefix for environment overrides, e.g. `VIRUSEVOLVE_SIMULATION__GENERATIONS=50`.
pub const ENV_PREFIX: &str = "VIRUSEVOLVE";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub simulation: SimulationConfig,
    pub display: DisplayConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), VirusEvolveError> {
        validate_section(&self.simulation)?;
        validate_section(&self.display)?;
        Ok(())
    }
}

fn validate_section<S: ConfigSection>(section: &S) -> Result<(), VirusEvolveError> {
    section.validate().map_err(|e| {
        VirusEvolveError::Configuration(format!("[{}] {}", S::section_name(), e))
    })
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    /// Load a TOML file layered with `VIRUSEVOLVE_*` environment variables.
    ///
    /// A missing file is not an error; the defaults plus any environment
    /// overrides are used instead.
    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), VirusEvolveError> {
        let settings = ::config::Config::builder()
            .add_source(
                ::config::File::from(path.as_ref())
                    .format(::config::FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;

        log::info!("Configuration loaded from {}", path.as_ref().display());
        *self.config.write().unwrap_or_else(|e| e.into_inner()) = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), VirusEvolveError> {
        let config = self.get();
        let toml_str = toml::to_string_pretty(&config)?;
        std::fs::write(path, toml_str)?;
        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Apply `f` to a copy of the configuration and keep it only if it validates.
    pub fn update<F>(&self, f: F) -> Result<(), VirusEvolveError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.config.write().unwrap_or_else(|e| e.into_inner());
        let mut candidate = config.clone();
        f(&mut candidate);
        candidate.validate()?;
        *config = candidate;
        Ok(())
    }
}
