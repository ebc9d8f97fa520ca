use crate::ui::state::AppState;

pub struct SicknessMenu;

impl SicknessMenu {
    pub fn show(ui: &mut egui::Ui, state: &mut AppState) {
        ui.label("Choose a sickness to simulate:");

        let selected = state.selected_name().map(str::to_string);
        let mut clicked = None;

        egui::ScrollArea::vertical().max_height(160.0).show(ui, |ui| {
            for (i, preset) in state.catalog.iter().enumerate() {
                let is_selected = selected.as_deref() == Some(preset.name.as_str());
                if ui
                    .selectable_label(is_selected, format!("{}. {}", i + 1, preset.name))
                    .clicked()
                {
                    clicked = Some(i + 1);
                }
            }
        });

        if let Some(choice) = clicked {
            state.selection_input = choice.to_string();
            state.selection_error = None;
        }

        ui.horizontal(|ui| {
            ui.label("Number of your choice:");
            let response = ui.add(
                egui::TextEdit::singleline(&mut state.selection_input).desired_width(40.0),
            );
            if response.changed() {
                state.selection_error = None;
            }
        });

        if let Some(error) = &state.selection_error {
            ui.colored_label(egui::Color32::RED, error);
        }

        if let Ok(preset) = state.catalog.select(&state.selection_input) {
            ui.label(format!(
                "{}: default mutation rate {} and resistance level {}",
                preset.name, preset.record.mutation_rate, preset.record.resistance_level
            ));
        }
    }
}
