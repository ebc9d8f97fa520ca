use thiserror::Error;

#[derive(Error, Debug)]
pub enum VirusEvolveError {
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Preset loading error: {0}")]
    PresetLoading(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),

    #[error("Config error: {0}")]
    Config(#[from] ::config::ConfigError),
}

pub type Result<T> = std::result::Result<T, VirusEvolveError>;
