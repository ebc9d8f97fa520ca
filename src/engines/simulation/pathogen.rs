use super::genome::{self, Genome};
use super::random::RandomSource;
use crate::error::{Result, VirusEvolveError};
use serde::{Deserialize, Serialize};

/// Fully resolved pathogen parameters, all real numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathogenParams {
    pub mutation_rate: f64,
    pub resistance_level: f64,
    pub infectiousness: f64,
    pub virulence: f64,
}

impl PathogenParams {
    /// Every value must be finite and the mutation rate must lie in `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("mutation rate", self.mutation_rate),
            ("resistance level", self.resistance_level),
            ("infectiousness", self.infectiousness),
            ("virulence", self.virulence),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(VirusEvolveError::Configuration(format!(
                "Pathogen {} must be a finite number, got {}",
                name, value
            )));
        }

        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(VirusEvolveError::Configuration(format!(
                "Mutation rate must be between 0 and 1, got {}",
                self.mutation_rate
            )));
        }
        Ok(())
    }
}

/// A single pathogen instance evolving across generations.
#[derive(Debug, Clone)]
pub struct Pathogen {
    pub name: String,
    pub genome: Genome,
    pub mutation_rate: f64,
    pub resistance_level: f64,
    pub infectiousness: f64, // Higher means faster spread
    pub virulence: f64,      // Higher means more severe impact on host
}

impl Pathogen {
    /// Create a pathogen with a uniformly random genome.
    pub fn new(name: impl Into<String>, params: &PathogenParams, rng: &mut dyn RandomSource) -> Self {
        Self::with_genome(name, params, genome::random_genome(rng))
    }

    pub fn with_genome(name: impl Into<String>, params: &PathogenParams, genome: Genome) -> Self {
        Self {
            name: name.into(),
            genome,
            mutation_rate: params.mutation_rate,
            resistance_level: params.resistance_level,
            infectiousness: params.infectiousness,
            virulence: params.virulence,
        }
    }

    /// Flip each gene independently with probability `mutation_rate`, then
    /// raise resistance by `mutation_rate / 10`.
    ///
    /// Consumes exactly one draw per genome position, in position order.
    pub fn mutate(&mut self, rng: &mut dyn RandomSource) {
        for position in 0..self.genome.len() {
            if rng.next_uniform() < self.mutation_rate {
                genome::flip(&mut self.genome, position);
            }
        }

        self.resistance_level += self.mutation_rate / 10.0;
    }

    pub fn params(&self) -> PathogenParams {
        PathogenParams {
            mutation_rate: self.mutation_rate,
            resistance_level: self.resistance_level,
            infectiousness: self.infectiousness,
            virulence: self.virulence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::simulation::genome::GENOME_LENGTH;
    use crate::engines::simulation::random::ScriptedRandom;

    fn params(mutation_rate: f64) -> PathogenParams {
        PathogenParams {
            mutation_rate,
            resistance_level: 0.7,
            infectiousness: 0.9,
            virulence: 0.5,
        }
    }

    #[test]
    fn test_mutate_flips_every_bit() {
        let mut pathogen = Pathogen::with_genome("COVID-19", &params(0.2), [0; GENOME_LENGTH]);
        let mut rng = ScriptedRandom::constant(0.0);

        pathogen.mutate(&mut rng);

        assert_eq!(pathogen.genome, [1; GENOME_LENGTH]);
        assert!((pathogen.resistance_level - 0.72).abs() < 1e-12);
        assert_eq!(rng.consumed(), GENOME_LENGTH);
    }

    #[test]
    fn test_mutate_no_flip_still_raises_resistance() {
        let start = [1, 0, 1, 0, 1, 0, 1, 0, 1, 0];
        let mut pathogen = Pathogen::with_genome("Flu", &params(0.1), start);
        let mut rng = ScriptedRandom::constant(0.99);

        pathogen.mutate(&mut rng);

        assert_eq!(pathogen.genome, start);
        assert!((pathogen.resistance_level - 0.71).abs() < 1e-12);
    }

    #[test]
    fn test_mutate_threshold_is_strict() {
        // A draw equal to the rate does not flip.
        let mut pathogen = Pathogen::with_genome("Flu", &params(0.5), [0; GENOME_LENGTH]);
        let mut rng = ScriptedRandom::new(vec![0.5, 0.4999]);

        pathogen.mutate(&mut rng);

        assert_eq!(pathogen.genome, [0, 1, 0, 1, 0, 1, 0, 1, 0, 1]);
    }

    #[test]
    fn test_validate_accepts_probability_rates() {
        assert!(params(0.0).validate().is_ok());
        assert!(params(0.2).validate().is_ok());
        assert!(params(1.0).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_rate() {
        for rate in [-0.3, 1.5] {
            assert!(
                matches!(params(rate).validate(), Err(VirusEvolveError::Configuration(_))),
                "rate {} should be rejected",
                rate
            );
        }
    }

    #[test]
    fn test_validate_rejects_non_finite_values() {
        assert!(params(f64::NAN).validate().is_err());

        let mut p = params(0.2);
        p.resistance_level = f64::INFINITY;
        assert!(p.validate().is_err());

        let mut p = params(0.2);
        p.virulence = f64::NAN;
        let err = p.validate().unwrap_err();
        assert!(err.to_string().contains("virulence"));
    }

    #[test]
    fn test_traits_fixed_after_mutation() {
        let mut pathogen = Pathogen::with_genome("Ebola", &params(0.3), [0; GENOME_LENGTH]);
        let mut rng = ScriptedRandom::new(vec![0.1, 0.9, 0.3]);

        for _ in 0..20 {
            pathogen.mutate(&mut rng);
        }

        assert_eq!(pathogen.infectiousness, 0.9);
        assert_eq!(pathogen.virulence, 0.5);
        assert!(pathogen.genome.iter().all(|g| *g == 0 || *g == 1));
    }
}
