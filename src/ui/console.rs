//! Line-oriented prompt flow for terminal use.
//!
//! Mirrors the GUI: optionally import presets, pick a sickness from a
//! numbered menu (asked again until the answer is valid), then enter
//! optional overrides. Generic over the reader and writer so the flow can
//! be driven from tests.

use crate::data::{Preset, PresetCatalog, UserOverrides};
use crate::engines::simulation::{Metric, SimulationRecord};
use crate::error::Result;
use std::io::{BufRead, Write};
use std::path::Path;

pub struct ConsoleSession<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleSession<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `prompt` and read one line. `None` once input is exhausted.
    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Ask whether to import a preset file and merge it if so.
    ///
    /// Any failure is reported and the catalog keeps its current contents.
    pub fn offer_preset_file(&mut self, catalog: &mut PresetCatalog, path: Option<&Path>) -> Result<()> {
        let answer = self.ask("Would you like to load sickness data from a JSON file? (y/n): ")?;
        let wants_file = answer
            .map(|a| a.trim().eq_ignore_ascii_case("y"))
            .unwrap_or(false);
        if !wants_file {
            return Ok(());
        }

        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match self.ask("Path to the JSON file: ")? {
                Some(p) if !p.trim().is_empty() => p.trim().into(),
                _ => {
                    writeln!(self.output, "No file selected. Using default values.")?;
                    return Ok(());
                }
            },
        };

        match catalog.load_file(&path) {
            Ok(_) => writeln!(self.output, "Data updated successfully from {}.", path.display())?,
            Err(e) => writeln!(self.output, "Failed to update data: {}. Using default values.", e)?,
        }
        Ok(())
    }

    /// Show the numbered menu and keep asking until a valid entry is chosen.
    ///
    /// Returns `None` only when input ends before a valid choice.
    pub fn choose_sickness(&mut self, catalog: &PresetCatalog) -> Result<Option<Preset>> {
        writeln!(self.output, "Choose a sickness to simulate:")?;
        for line in catalog.menu_lines() {
            writeln!(self.output, "{}", line)?;
        }

        loop {
            let Some(answer) = self.ask("Enter the number of your choice: ")? else {
                return Ok(None);
            };

            match catalog.select(&answer) {
                Ok(preset) => return Ok(Some(preset.clone())),
                Err(e) => {
                    log::debug!("{}", e);
                    writeln!(
                        self.output,
                        "Invalid choice. Please enter a valid number corresponding to a sickness."
                    )?;
                }
            }
        }
    }

    /// Prompt for the mutation rate and resistance level overrides.
    pub fn ask_overrides(&mut self, preset: &Preset) -> Result<UserOverrides> {
        let record = &preset.record;
        writeln!(
            self.output,
            "Simulating {} with default mutation rate {} and resistance level {}.",
            preset.name, record.mutation_rate, record.resistance_level
        )?;

        let mutation_rate = self
            .ask(&format!(
                "Enter a custom mutation rate for {} (default is {}): ",
                preset.name, record.mutation_rate
            ))?
            .unwrap_or_default();
        let resistance_level = self
            .ask(&format!(
                "Enter a custom resistance level for {} (default is {}): ",
                preset.name, record.resistance_level
            ))?
            .unwrap_or_default();

        Ok(UserOverrides {
            mutation_rate,
            resistance_level,
        })
    }

    /// Print the four series as an aligned table, one row per generation.
    pub fn print_record(&mut self, record: &SimulationRecord) -> Result<()> {
        writeln!(
            self.output,
            "Virus and Immune System Dynamics for {}",
            record.pathogen_name
        )?;

        let labels = Metric::all().map(|m| m.label());
        writeln!(
            self.output,
            "{:>10} {:>18} {:>22} {:>16} {:>10}",
            "Generation", labels[0], labels[1], labels[2], labels[3]
        )?;
        for (generation, resistance, effectiveness, infectiousness, virulence) in record.rows() {
            writeln!(
                self.output,
                "{:>10} {:>18.4} {:>22.4} {:>16.4} {:>10.4}",
                generation, resistance, effectiveness, infectiousness, virulence
            )?;
        }

        let summary = record.summary();
        writeln!(
            self.output,
            "Final resistance {:.4}, mean effectiveness {:.4}, {} adaptation events",
            summary.final_resistance, summary.mean_effectiveness, summary.adaptation_events
        )?;
        Ok(())
    }
}
