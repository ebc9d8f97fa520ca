pub mod config_bridge;
pub mod preset_loader;
pub mod simulation_runner;

pub use config_bridge::ConfigBridge;
pub use preset_loader::PresetLoader;
pub use simulation_runner::SimulationRunner;
