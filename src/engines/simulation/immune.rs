use super::genome::{self, Genome};
use super::pathogen::Pathogen;

pub const DEFAULT_STRENGTH: f64 = 0.8;
pub const DEFAULT_ADAPTATION_RATE: f64 = 0.1;

/// Increment applied to `adaptive_response` per adaptation event.
pub const ADAPTATION_STEP: f64 = 0.05;

/// Effectiveness below this value triggers adaptation.
pub const ADAPTATION_THRESHOLD: f64 = 0.5;

/// Host immune system with a single memorised genome.
#[derive(Debug, Clone)]
pub struct ImmuneSystem {
    pub adaptive_response: f64,
    pub memory_cells: Option<Genome>,
    pub strength: f64,
}

impl ImmuneSystem {
    pub fn new(adaptation_rate: f64) -> Self {
        Self::with_strength(adaptation_rate, DEFAULT_STRENGTH)
    }

    pub fn with_strength(adaptation_rate: f64, strength: f64) -> Self {
        Self {
            adaptive_response: adaptation_rate,
            memory_cells: None,
            strength,
        }
    }

    /// Count of genome positions matching the memorised genome; 0 with no memory.
    pub fn recognize_virus(&self, pathogen: &Pathogen) -> usize {
        match &self.memory_cells {
            Some(memory) => genome::matching_positions(memory, &pathogen.genome),
            None => 0,
        }
    }

    /// Effectiveness against the pathogen's current state, clamped at zero.
    /// Adapts to the pathogen when the result falls below the threshold.
    pub fn respond_to_virus(&mut self, pathogen: &Pathogen) -> f64 {
        self.respond_with_adaptation(pathogen).0
    }

    /// Same as [`respond_to_virus`](Self::respond_to_virus), also reporting
    /// whether the response triggered an adaptation event.
    pub fn respond_with_adaptation(&mut self, pathogen: &Pathogen) -> (f64, bool) {
        let effectiveness =
            (self.strength - pathogen.resistance_level + self.adaptive_response).max(0.0);

        let adapted = effectiveness < ADAPTATION_THRESHOLD && self.adapt(pathogen);
        (effectiveness, adapted)
    }

    /// Snapshot the pathogen genome into memory and boost the adaptive
    /// response, unless the memory already holds exactly that genome.
    ///
    /// Returns `true` when an adaptation event fired.
    pub fn adapt(&mut self, pathogen: &Pathogen) -> bool {
        if self.memory_cells == Some(pathogen.genome) {
            return false;
        }

        self.memory_cells = Some(pathogen.genome);
        self.adaptive_response += ADAPTATION_STEP;
        log::debug!(
            "Immune system adapted to {} (adaptive response {:.3})",
            genome::to_bit_string(&pathogen.genome),
            self.adaptive_response
        );
        true
    }
}

impl Default for ImmuneSystem {
    fn default() -> Self {
        Self::new(DEFAULT_ADAPTATION_RATE)
    }
}
