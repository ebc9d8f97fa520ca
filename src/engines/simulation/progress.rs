use super::record::{GenerationSample, SimulationRecord};
use super::simulation_engine::ProgressCallback;

/// Logs each generation at debug level and the finished run at info level.
pub struct ConsoleProgressCallback;

impl ProgressCallback for ConsoleProgressCallback {
    fn on_generation_complete(&mut self, sample: &GenerationSample) {
        log::debug!(
            "Generation {}: resistance {:.4}, effectiveness {:.4}{}",
            sample.generation + 1,
            sample.resistance,
            sample.effectiveness,
            if sample.adapted { " (adapted)" } else { "" }
        );
    }

    fn on_run_complete(&mut self, record: &SimulationRecord) {
        let summary = record.summary();
        log::info!(
            "{}: {} generations, effectiveness {:.3}..{:.3} (mean {:.3})",
            record.pathogen_name,
            summary.generations,
            summary.min_effectiveness,
            summary.max_effectiveness,
            summary.mean_effectiveness
        );
    }
}

pub struct SilentProgressCallback;

impl ProgressCallback for SilentProgressCallback {
    fn on_generation_complete(&mut self, _sample: &GenerationSample) {}
}
