pub mod preset_selector;
pub mod sickness_menu;
pub mod line_chart;

pub use preset_selector::PresetSelector;
pub use sickness_menu::SicknessMenu;
pub use line_chart::LineChart;
