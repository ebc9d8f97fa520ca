pub mod traits;
pub mod simulation;
pub mod display;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use simulation::SimulationConfig;
pub use display::DisplayConfig;
