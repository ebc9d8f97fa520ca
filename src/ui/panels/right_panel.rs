use crate::ui::state::AppState;

pub struct RightPanel;

impl RightPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &AppState) {
        ui.heading("Run Details");

        ui.separator();

        let (Some(record), Some(params)) = (&state.record, &state.resolved_params) else {
            ui.centered_and_justified(|ui| {
                ui.label("Run a simulation to see its summary");
            });
            return;
        };

        // Parameters Card
        ui.group(|ui| {
            ui.heading(&record.pathogen_name);
            ui.horizontal(|ui| {
                ui.label("Mutation Rate:");
                ui.label(format!("{:.3}", params.mutation_rate));
            });
            ui.horizontal(|ui| {
                ui.label("Initial Resistance:");
                ui.label(format!("{:.3}", params.resistance_level));
            });
            ui.horizontal(|ui| {
                ui.label("Infectiousness:");
                ui.label(format!("{:.3}", params.infectiousness));
            });
            ui.horizontal(|ui| {
                ui.label("Virulence:");
                ui.label(format!("{:.3}", params.virulence));
            });
        });

        ui.separator();

        let summary = record.summary();
        ui.group(|ui| {
            ui.heading("Outcome");
            ui.horizontal(|ui| {
                ui.label("Generations:");
                ui.label(format!("{}", summary.generations));
            });
            ui.horizontal(|ui| {
                ui.label("Final Resistance:");
                ui.label(format!("{:.3}", summary.final_resistance));
            });
            ui.horizontal(|ui| {
                ui.label("Effectiveness:");
                ui.label(format!(
                    "{:.3} .. {:.3}",
                    summary.min_effectiveness, summary.max_effectiveness
                ));
            });
            ui.horizontal(|ui| {
                ui.label("Mean Effectiveness:");
                ui.label(format!("{:.3}", summary.mean_effectiveness));
            });
            ui.horizontal(|ui| {
                ui.label("Final Effectiveness:");
                ui.label(format!("{:.3}", summary.final_effectiveness));
            });
            ui.horizontal(|ui| {
                ui.label("Adaptation Events:");
                ui.label(format!("{}", summary.adaptation_events));
            });
        });
    }
}
