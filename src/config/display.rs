use super::traits::ConfigSection;
use crate::error::VirusEvolveError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub window_width: f32,
    pub window_height: f32,
    pub line_width: f32,
    pub show_legend: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            window_width: 1200.0,
            window_height: 720.0,
            line_width: 2.0,
            show_legend: true,
        }
    }
}

impl ConfigSection for DisplayConfig {
    fn section_name() -> &'static str {
        "display"
    }

    fn validate(&self) -> Result<(), VirusEvolveError> {
        if self.window_width < 400.0 || self.window_height < 300.0 {
            return Err(VirusEvolveError::Configuration(
                "Window must be at least 400x300".to_string()
            ));
        }
        if self.line_width <= 0.0 {
            return Err(VirusEvolveError::Configuration(
                "Line width must be positive".to_string()
            ));
        }
        Ok(())
    }
}
