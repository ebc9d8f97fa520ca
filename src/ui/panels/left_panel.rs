use crate::ui::state::AppState;
use crate::ui::widgets::{PresetSelector, SicknessMenu};

pub struct LeftPanel;

impl LeftPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState) {
        ui.heading("Configuration");
        ui.separator();

        // 1. Preset Data Section
        ui.collapsing("Sickness Data", |ui| {
            PresetSelector::show(ui, state);
        });

        ui.separator();

        // 2. Sickness Selection Section
        egui::CollapsingHeader::new("Sickness")
            .default_open(true)
            .show(ui, |ui| {
                SicknessMenu::show(ui, state);
            });

        ui.separator();

        // 3. Parameter Overrides Section
        egui::CollapsingHeader::new("Custom Parameters")
            .default_open(true)
            .show(ui, |ui| {
                Self::show_overrides(ui, state);
            });

        ui.separator();

        // 4. Simulation Section
        ui.collapsing("Simulation", |ui| {
            Self::show_simulation_config(ui, state);
        });

        ui.separator();

        // 5. Control Buttons
        Self::show_control_buttons(ui, state);
    }

    fn show_overrides(ui: &mut egui::Ui, state: &mut AppState) {
        ui.label("Leave blank to use the preset default.");

        ui.horizontal(|ui| {
            ui.label("Mutation Rate:");
            ui.add(egui::TextEdit::singleline(&mut state.overrides.mutation_rate).desired_width(80.0));
        });

        ui.horizontal(|ui| {
            ui.label("Resistance Level:");
            ui.add(egui::TextEdit::singleline(&mut state.overrides.resistance_level).desired_width(80.0));
        });
    }

    fn show_simulation_config(ui: &mut egui::Ui, state: &mut AppState) {
        ui.horizontal(|ui| {
            ui.label("Generations:");
            ui.add(egui::DragValue::new(&mut state.generations).range(1..=10_000));
        });

        ui.horizontal(|ui| {
            ui.label("Adaptation Rate:");
            ui.add(egui::Slider::new(&mut state.adaptation_rate, 0.0..=1.0).step_by(0.01));
        });

        ui.horizontal(|ui| {
            ui.label("Immune Strength:");
            ui.add(egui::Slider::new(&mut state.immune_strength, 0.0..=2.0).step_by(0.05));
        });

        ui.horizontal(|ui| {
            ui.label("Seed:");
            ui.add(
                egui::TextEdit::singleline(&mut state.seed_input)
                    .hint_text("random")
                    .desired_width(100.0),
            );
        });
    }

    fn show_control_buttons(ui: &mut egui::Ui, state: &mut AppState) {
        ui.vertical_centered(|ui| {
            if ui.button("▶ Run Simulation").clicked() {
                state.run_requested = true;
            }
        });
    }
}
