use serde::{Deserialize, Serialize};

/// The four series recorded per generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    Resistance,
    Effectiveness,
    Infectiousness,
    Virulence,
}

impl Metric {
    pub fn all() -> [Metric; 4] {
        [
            Metric::Resistance,
            Metric::Effectiveness,
            Metric::Infectiousness,
            Metric::Virulence,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Metric::Resistance => "Virus Resistance",
            Metric::Effectiveness => "Immune Effectiveness",
            Metric::Infectiousness => "Infectiousness",
            Metric::Virulence => "Virulence",
        }
    }
}

/// One generation's worth of recorded values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationSample {
    pub generation: usize,
    pub resistance: f64,
    pub effectiveness: f64,
    pub infectiousness: f64,
    pub virulence: f64,
    pub adapted: bool,
}

/// Index-aligned output series of a simulation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationRecord {
    pub pathogen_name: String,
    pub resistance: Vec<f64>,
    pub effectiveness: Vec<f64>,
    pub infectiousness: Vec<f64>,
    pub virulence: Vec<f64>,
    pub adaptation_events: usize,
}

impl SimulationRecord {
    pub fn new(pathogen_name: impl Into<String>, capacity: usize) -> Self {
        Self {
            pathogen_name: pathogen_name.into(),
            resistance: Vec::with_capacity(capacity),
            effectiveness: Vec::with_capacity(capacity),
            infectiousness: Vec::with_capacity(capacity),
            virulence: Vec::with_capacity(capacity),
            adaptation_events: 0,
        }
    }

    pub fn push(&mut self, sample: &GenerationSample) {
        self.resistance.push(sample.resistance);
        self.effectiveness.push(sample.effectiveness);
        self.infectiousness.push(sample.infectiousness);
        self.virulence.push(sample.virulence);
        if sample.adapted {
            self.adaptation_events += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.resistance.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resistance.is_empty()
    }

    pub fn series(&self, metric: Metric) -> &[f64] {
        match metric {
            Metric::Resistance => &self.resistance,
            Metric::Effectiveness => &self.effectiveness,
            Metric::Infectiousness => &self.infectiousness,
            Metric::Virulence => &self.virulence,
        }
    }

    /// Iterate `(generation, resistance, effectiveness, infectiousness, virulence)` rows.
    pub fn rows(&self) -> impl Iterator<Item = (usize, f64, f64, f64, f64)> + '_ {
        (0..self.len()).map(move |i| {
            (
                i,
                self.resistance[i],
                self.effectiveness[i],
                self.infectiousness[i],
                self.virulence[i],
            )
        })
    }

    /// Largest value across all four series, used to scale charts.
    pub fn max_value(&self) -> f64 {
        Metric::all()
            .iter()
            .flat_map(|m| self.series(*m).iter().copied())
            .fold(0.0, f64::max)
    }

    pub fn summary(&self) -> RunSummary {
        let generations = self.len();
        let (min_eff, max_eff, sum_eff) = self.effectiveness.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY, 0.0),
            |(min, max, sum), &e| (min.min(e), max.max(e), sum + e),
        );

        if generations == 0 {
            return RunSummary::default();
        }

        RunSummary {
            generations,
            final_resistance: self.resistance[generations - 1],
            min_effectiveness: min_eff,
            max_effectiveness: max_eff,
            mean_effectiveness: sum_eff / generations as f64,
            final_effectiveness: self.effectiveness[generations - 1],
            adaptation_events: self.adaptation_events,
        }
    }
}

/// Headline numbers for a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub generations: usize,
    pub final_resistance: f64,
    pub min_effectiveness: f64,
    pub max_effectiveness: f64,
    pub mean_effectiveness: f64,
    pub final_effectiveness: f64,
    pub adaptation_events: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(generation: usize, resistance: f64, effectiveness: f64, adapted: bool) -> GenerationSample {
        GenerationSample {
            generation,
            resistance,
            effectiveness,
            infectiousness: 0.6,
            virulence: 0.2,
            adapted,
        }
    }

    #[test]
    fn test_push_keeps_series_aligned() {
        let mut record = SimulationRecord::new("Flu", 3);
        record.push(&sample(0, 0.31, 0.6, false));
        record.push(&sample(1, 0.32, 0.4, true));

        assert_eq!(record.len(), 2);
        for metric in Metric::all() {
            assert_eq!(record.series(metric).len(), 2);
        }
        assert_eq!(record.adaptation_events, 1);
    }

    #[test]
    fn test_summary() {
        let mut record = SimulationRecord::new("Flu", 3);
        record.push(&sample(0, 0.31, 0.6, false));
        record.push(&sample(1, 0.32, 0.4, true));
        record.push(&sample(2, 0.33, 0.5, false));

        let summary = record.summary();
        assert_eq!(summary.generations, 3);
        assert_eq!(summary.final_resistance, 0.33);
        assert_eq!(summary.min_effectiveness, 0.4);
        assert_eq!(summary.max_effectiveness, 0.6);
        assert!((summary.mean_effectiveness - 0.5).abs() < 1e-12);
        assert_eq!(summary.adaptation_events, 1);
    }

    #[test]
    fn test_empty_summary() {
        let record = SimulationRecord::new("Flu", 0);
        assert!(record.is_empty());
        assert_eq!(record.summary(), RunSummary::default());
        assert_eq!(record.max_value(), 0.0);
    }

    #[test]
    fn test_rows() {
        let mut record = SimulationRecord::new("Flu", 1);
        record.push(&sample(0, 0.31, 0.6, false));

        let rows: Vec<_> = record.rows().collect();
        assert_eq!(rows, vec![(0, 0.31, 0.6, 0.6, 0.2)]);
    }
}
