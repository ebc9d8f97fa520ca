use super::config_bridge::ConfigBridge;
use crate::engines::simulation::{ConsoleProgressCallback, SimulationEngine};
use crate::error::VirusEvolveError;
use crate::ui::state::AppState;

pub struct SimulationRunner;

impl SimulationRunner {
    /// Run the simulation for the current selection and store the record.
    ///
    /// Runs synchronously on the calling thread.
    pub fn run(state: &mut AppState) {
        let (name, params) = match ConfigBridge::to_pathogen_params(state) {
            Ok(resolved) => resolved,
            Err(e @ VirusEvolveError::InvalidSelection(_)) => {
                state.selection_error = Some(e.to_string());
                state.status_message = "Invalid choice. Please enter a valid number corresponding to a sickness.".to_string();
                return;
            }
            Err(e) => {
                state.selection_error = None;
                state.status_message = format!("Cannot start: {}", e);
                return;
            }
        };
        state.selection_error = None;

        let record = ConfigBridge::to_simulation_config(state)
            .and_then(SimulationEngine::new)
            .and_then(|mut engine| engine.simulate(&name, &params, ConsoleProgressCallback));
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                state.status_message = format!("Cannot start: {}", e);
                return;
            }
        };

        state.status_message = format!(
            "Simulated {} for {} generations ({} adaptation events)",
            name,
            record.len(),
            record.adaptation_events
        );
        state.resolved_params = Some(params);
        state.record = Some(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_stores_record() {
        let mut state = AppState::new();
        state.selection_input = "4".to_string();
        state.seed_input = "42".to_string();

        SimulationRunner::run(&mut state);

        let record = state.record.as_ref().unwrap();
        assert_eq!(record.len(), 100);
        assert_eq!(record.pathogen_name, "COVID-19");
        assert!(state.selection_error.is_none());
    }

    #[test]
    fn test_bad_override_reported_in_status() {
        let mut state = AppState::new();
        state.selection_input = "2".to_string();
        state.overrides.mutation_rate = "-0.3".to_string();

        SimulationRunner::run(&mut state);

        assert!(state.record.is_none());
        assert!(state.selection_error.is_none());
        assert!(state.status_message.starts_with("Cannot start"));
        assert!(state.status_message.contains("Mutation rate"));
    }

    #[test]
    fn test_invalid_selection_reported() {
        let mut state = AppState::new();
        state.selection_input = "abc".to_string();

        SimulationRunner::run(&mut state);

        assert!(state.record.is_none());
        assert!(state.selection_error.is_some());
    }
}
