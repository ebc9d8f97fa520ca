mod app;
mod panels;
mod state;
mod widgets;
mod services;
pub mod console;

pub use app::VirusEvolveApp;
pub use console::ConsoleSession;
pub use state::AppState;
pub use services::{ConfigBridge, PresetLoader, SimulationRunner};
pub use widgets::line_chart::{axis_ceiling, ChartScale};
