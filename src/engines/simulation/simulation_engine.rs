use crate::config::simulation::SimulationConfig;
use crate::config::traits::ConfigSection;
use crate::engines::simulation::{
    immune::ImmuneSystem,
    pathogen::{Pathogen, PathogenParams},
    random::{RandomSource, SeededRandom},
    record::{GenerationSample, SimulationRecord},
};
use crate::error::Result;

pub struct SimulationEngine {
    config: SimulationConfig,
    rng: Box<dyn RandomSource>,
}

pub trait ProgressCallback {
    fn on_generation_complete(&mut self, sample: &GenerationSample);
    fn on_run_complete(&mut self, _record: &SimulationRecord) {}
}

impl SimulationEngine {
    /// Create an engine seeded from `config.seed` (OS entropy when unset).
    pub fn new(config: SimulationConfig) -> Result<Self> {
        let rng = Box::new(SeededRandom::new(config.seed));
        Self::with_source(config, rng)
    }

    /// Create an engine drawing from an injected random source.
    pub fn with_source(config: SimulationConfig, rng: Box<dyn RandomSource>) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Build a pathogen whose initial genome comes from this engine's source.
    pub fn spawn_pathogen(&mut self, name: &str, params: &PathogenParams) -> Pathogen {
        Pathogen::new(name, params, self.rng.as_mut())
    }

    /// Build the immune system described by the configuration.
    pub fn spawn_immune_system(&self) -> ImmuneSystem {
        ImmuneSystem::with_strength(self.config.adaptation_rate, self.config.immune_strength)
    }

    /// Convenience: spawn both participants and run.
    ///
    /// Parameters are checked before any draw is taken from the source.
    pub fn simulate<C: ProgressCallback>(
        &mut self,
        name: &str,
        params: &PathogenParams,
        callback: C,
    ) -> Result<SimulationRecord> {
        params.validate()?;
        let pathogen = self.spawn_pathogen(name, params);
        let immune_system = self.spawn_immune_system();
        self.run(pathogen, immune_system, callback)
    }

    /// Run the simulation loop
    ///
    /// Each generation mutates the pathogen, lets the immune system respond
    /// and records resistance, effectiveness, infectiousness and virulence.
    /// Generation `k + 1` always sees the state left by generation `k`.
    ///
    /// Fails before the first generation if the pathogen's parameters are
    /// not finite or its mutation rate is outside `[0, 1]`.
    pub fn run<C: ProgressCallback>(
        &mut self,
        mut pathogen: Pathogen,
        mut immune_system: ImmuneSystem,
        mut callback: C,
    ) -> Result<SimulationRecord> {
        pathogen.params().validate()?;

        let generations = self.config.generations;
        let mut record = SimulationRecord::new(pathogen.name.clone(), generations);

        log::info!(
            "Simulating {} for {} generations (mutation rate {}, resistance {})",
            pathogen.name,
            generations,
            pathogen.mutation_rate,
            pathogen.resistance_level
        );

        for generation in 0..generations {
            pathogen.mutate(self.rng.as_mut());

            let (effectiveness, adapted) = immune_system.respond_with_adaptation(&pathogen);

            let sample = GenerationSample {
                generation,
                resistance: pathogen.resistance_level,
                effectiveness,
                infectiousness: pathogen.infectiousness,
                virulence: pathogen.virulence,
                adapted,
            };

            record.push(&sample);
            callback.on_generation_complete(&sample);
        }

        log::info!(
            "Simulation of {} complete: final resistance {:.3}, {} adaptation events",
            record.pathogen_name,
            pathogen.resistance_level,
            record.adaptation_events
        );

        callback.on_run_complete(&record);
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::simulation::genome::GENOME_LENGTH;
    use crate::engines::simulation::progress::SilentProgressCallback;
    use crate::engines::simulation::random::ScriptedRandom;
    use crate::error::VirusEvolveError;

    fn covid() -> PathogenParams {
        PathogenParams {
            mutation_rate: 0.2,
            resistance_level: 0.7,
            infectiousness: 0.9,
            virulence: 0.5,
        }
    }

    fn config(generations: usize, seed: Option<u64>) -> SimulationConfig {
        SimulationConfig {
            generations,
            seed,
            ..SimulationConfig::default()
        }
    }

    #[test]
    fn test_series_lengths_match_generations() {
        let mut engine = SimulationEngine::new(config(100, Some(42))).unwrap();
        let record = engine
            .simulate("COVID-19", &covid(), SilentProgressCallback)
            .unwrap();

        assert_eq!(record.len(), 100);
        assert_eq!(record.effectiveness.len(), 100);
        assert_eq!(record.infectiousness.len(), 100);
        assert_eq!(record.virulence.len(), 100);
    }

    #[test]
    fn test_first_generation_values() {
        let rng = Box::new(ScriptedRandom::constant(0.0));
        let mut engine = SimulationEngine::with_source(config(1, None), rng).unwrap();
        let pathogen = Pathogen::with_genome("COVID-19", &covid(), [0; GENOME_LENGTH]);

        let record = engine
            .run(pathogen, ImmuneSystem::new(0.1), SilentProgressCallback)
            .unwrap();

        // 0.8 - 0.72 + 0.1 = 0.18
        assert!((record.resistance[0] - 0.72).abs() < 1e-12);
        assert!((record.effectiveness[0] - 0.18).abs() < 1e-12);
        assert_eq!(record.adaptation_events, 1);
    }

    #[test]
    fn test_invalid_params_rejected() {
        let rng = ScriptedRandom::constant(0.0);
        let mut engine = SimulationEngine::with_source(config(5, None), Box::new(rng)).unwrap();

        let mut negative = covid();
        negative.mutation_rate = -0.3;
        assert!(matches!(
            engine.simulate("Flu", &negative, SilentProgressCallback),
            Err(VirusEvolveError::Configuration(_))
        ));

        let mut nan = covid();
        nan.mutation_rate = f64::NAN;
        assert!(engine.simulate("Flu", &nan, SilentProgressCallback).is_err());
    }

    #[test]
    fn test_run_rejects_tampered_pathogen() {
        let mut engine = SimulationEngine::new(config(3, Some(1))).unwrap();
        let mut pathogen = Pathogen::with_genome("Flu", &covid(), [0; GENOME_LENGTH]);
        pathogen.resistance_level = f64::NAN;

        let result = engine.run(pathogen, ImmuneSystem::default(), SilentProgressCallback);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_generations_rejected() {
        assert!(SimulationEngine::new(config(0, Some(1))).is_err());
    }
}
