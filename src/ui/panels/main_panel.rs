use crate::ui::state::AppState;
use crate::ui::widgets::LineChart;

pub struct MainPanel;

impl MainPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &AppState) {
        ui.label(&state.status_message);

        ui.separator();

        match &state.record {
            Some(record) => LineChart::show(ui, record, &state.display),
            None => {
                ui.centered_and_justified(|ui| {
                    ui.label("No simulation yet. Choose a sickness and click 'Run Simulation'.");
                });
            }
        }
    }
}
