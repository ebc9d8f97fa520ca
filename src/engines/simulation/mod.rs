pub mod genome;
pub mod random;
pub mod pathogen;
pub mod immune;
pub mod record;
pub mod simulation_engine;
pub mod progress;

pub use genome::{Genome, GENOME_LENGTH};
pub use random::{RandomSource, ScriptedRandom, SeededRandom};
pub use pathogen::{Pathogen, PathogenParams};
pub use immune::ImmuneSystem;
pub use record::{GenerationSample, Metric, RunSummary, SimulationRecord};
pub use simulation_engine::{ProgressCallback, SimulationEngine};
pub use progress::{ConsoleProgressCallback, SilentProgressCallback};
