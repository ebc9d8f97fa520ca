use super::panels::{LeftPanel, MainPanel, RightPanel};
use super::services::SimulationRunner;
use super::state::AppState;
use crate::config::AppConfig;

pub struct VirusEvolveApp {
    state: AppState,
    left_panel: LeftPanel,
    main_panel: MainPanel,
    right_panel: RightPanel,
}

impl Default for VirusEvolveApp {
    fn default() -> Self {
        Self::with_config(&AppConfig::default())
    }
}

impl VirusEvolveApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        Self::with_config(config)
    }

    pub fn with_config(config: &AppConfig) -> Self {
        Self {
            state: AppState::from_config(config),
            left_panel: LeftPanel::new(),
            main_panel: MainPanel::new(),
            right_panel: RightPanel::new(),
        }
    }
}

impl eframe::App for VirusEvolveApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("VirusEvolve - Pathogen / Immune Co-evolution");
            });
        });

        // Left Panel - Configuration
        egui::SidePanel::left("left_panel")
            .default_width(300.0)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.left_panel.show(ui, &mut self.state);
                });
            });

        if self.state.run_requested {
            self.state.run_requested = false;
            SimulationRunner::run(&mut self.state);
        }

        // Right Panel - Run Details
        egui::SidePanel::right("right_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.right_panel.show(ui, &self.state);
                });
            });

        // Central Panel - Chart
        egui::CentralPanel::default().show(ctx, |ui| {
            self.main_panel.show(ui, &self.state);
        });
    }
}
