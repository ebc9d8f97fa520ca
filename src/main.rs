use eframe::NativeOptions;
use virusevolve::config::ConfigManager;
use virusevolve::ui::VirusEvolveApp;

const CONFIG_FILE: &str = "virusevolve.toml";

fn main() -> eframe::Result<()> {
    env_logger::init();

    let manager = ConfigManager::new();
    if let Err(e) = manager.load_from_file(CONFIG_FILE) {
        log::warn!("Ignoring {}: {}", CONFIG_FILE, e);
    }
    let config = manager.get();

    let native_options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.display.window_width, config.display.window_height])
            .with_min_inner_size([800.0, 500.0])
            .with_title("VirusEvolve"),
        ..Default::default()
    };

    eframe::run_native(
        "VirusEvolve",
        native_options,
        Box::new(move |cc| Ok(Box::new(VirusEvolveApp::new(cc, &config)))),
    )
}
