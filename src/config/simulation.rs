use super::traits::ConfigSection;
use crate::engines::simulation::immune::{DEFAULT_ADAPTATION_RATE, DEFAULT_STRENGTH};
use crate::error::VirusEvolveError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub generations: usize,
    pub adaptation_rate: f64,
    pub immune_strength: f64,
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            generations: 100,
            adaptation_rate: DEFAULT_ADAPTATION_RATE,
            immune_strength: DEFAULT_STRENGTH,
            seed: None,
        }
    }
}

impl ConfigSection for SimulationConfig {
    fn section_name() -> &'static str {
        "simulation"
    }

    fn validate(&self) -> Result<(), VirusEvolveError> {
        if self.generations == 0 {
            return Err(VirusEvolveError::Configuration(
                "Generations must be at least 1".to_string()
            ));
        }
        if !self.adaptation_rate.is_finite() || self.adaptation_rate < 0.0 {
            return Err(VirusEvolveError::Configuration(
                "Adaptation rate must be a non-negative number".to_string()
            ));
        }
        if !self.immune_strength.is_finite() || self.immune_strength < 0.0 {
            return Err(VirusEvolveError::Configuration(
                "Immune strength must be a non-negative number".to_string()
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_reference_configuration() {
        let config = SimulationConfig::default();
        assert_eq!(config.generations, 100);
        assert_eq!(config.adaptation_rate, 0.1);
        assert_eq!(config.immune_strength, 0.8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = SimulationConfig::default();
        config.adaptation_rate = f64::NAN;
        assert!(config.validate().is_err());

        let config = SimulationConfig {
            immune_strength: -0.1,
            ..SimulationConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
