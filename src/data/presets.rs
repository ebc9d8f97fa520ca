use super::coercion::{coerce, coerce_override};
use crate::engines::simulation::pathogen::PathogenParams;
use crate::error::{Result, VirusEvolveError};
use crate::types::RawValue;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

/// Raw parameter set for one sickness, exactly as supplied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PresetRecord {
    #[serde(default, alias = "mutationRate")]
    pub mutation_rate: RawValue,
    #[serde(default, alias = "resistanceLevel")]
    pub resistance_level: RawValue,
    #[serde(default)]
    pub infectiousness: RawValue,
    #[serde(default)]
    pub virulence: RawValue,
}

impl PresetRecord {
    pub fn new(
        mutation_rate: impl Into<RawValue>,
        resistance_level: impl Into<RawValue>,
        infectiousness: impl Into<RawValue>,
        virulence: impl Into<RawValue>,
    ) -> Self {
        Self {
            mutation_rate: mutation_rate.into(),
            resistance_level: resistance_level.into(),
            infectiousness: infectiousness.into(),
            virulence: virulence.into(),
        }
    }

    /// Overwrite the fields present in `fields`, leaving the rest untouched.
    fn apply_fields(&mut self, fields: &Map<String, Value>) {
        for (key, value) in fields {
            let slot = match key.as_str() {
                "mutation_rate" | "mutationRate" => &mut self.mutation_rate,
                "resistance_level" | "resistanceLevel" => &mut self.resistance_level,
                "infectiousness" => &mut self.infectiousness,
                "virulence" => &mut self.virulence,
                other => {
                    log::debug!("Ignoring unknown preset field '{}'", other);
                    continue;
                }
            };
            *slot = raw_from_json(key, value);
        }
    }
}

fn raw_from_json(key: &str, value: &Value) -> RawValue {
    match value {
        Value::Number(n) => n.as_f64().map(RawValue::Number).unwrap_or(RawValue::Missing),
        Value::String(s) => RawValue::Text(s.clone()),
        Value::Bool(b) => RawValue::Flag(*b),
        Value::Null => RawValue::Missing,
        Value::Array(_) | Value::Object(_) => {
            log::warn!("Field '{}' holds a non-scalar value, treating it as missing", key);
            RawValue::Missing
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    pub record: PresetRecord,
}

impl Preset {
    pub fn new(name: impl Into<String>, record: PresetRecord) -> Self {
        Self {
            name: name.into(),
            record,
        }
    }

    /// Coerce every field, applying the user's overrides for mutation rate
    /// and resistance level.
    pub fn resolve(&self, overrides: &UserOverrides) -> PathogenParams {
        let record = &self.record;
        PathogenParams {
            mutation_rate: coerce_override(&overrides.mutation_rate, &record.mutation_rate),
            resistance_level: coerce_override(&overrides.resistance_level, &record.resistance_level),
            infectiousness: coerce(&record.infectiousness, &record.infectiousness),
            virulence: coerce(&record.virulence, &record.virulence),
        }
    }
}

/// User-typed overrides; empty strings mean "use the preset value".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserOverrides {
    pub mutation_rate: String,
    pub resistance_level: String,
}

/// Outcome of merging an external preset document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    pub updated: Vec<String>,
    pub added: Vec<String>,
    pub skipped: Vec<String>,
}

impl MergeReport {
    pub fn changed(&self) -> usize {
        self.updated.len() + self.added.len()
    }
}

/// Ordered set of named sickness presets, numbered from 1 in menus.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetCatalog {
    presets: Vec<Preset>,
}

impl Default for PresetCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PresetCatalog {
    pub fn builtin() -> Self {
        Self {
            presets: vec![
                Preset::new("Common Cold", PresetRecord::new(0.05, 0.1, 0.6, 0.2)),
                Preset::new("Flu", PresetRecord::new(0.1, 0.3, 0.7, 0.4)),
                Preset::new("Pneumonia", PresetRecord::new(0.15, 0.5, 0.6, 0.6)),
                Preset::new("COVID-19", PresetRecord::new(0.2, 0.7, 0.9, 0.5)),
                Preset::new("Ebola", PresetRecord::new(0.3, 0.9, 0.5, 0.9)),
                Preset::new(
                    "HIV",
                    PresetRecord::new("High", "Varies depending on treatment adherence", 0.8, 0.6),
                ),
            ],
        }
    }

    pub fn empty() -> Self {
        Self { presets: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.name == name)
    }

    /// Numbered menu lines, e.g. `"1. Common Cold"`.
    pub fn menu_lines(&self) -> Vec<String> {
        self.presets
            .iter()
            .enumerate()
            .map(|(i, p)| format!("{}. {}", i + 1, p.name))
            .collect()
    }

    /// Pick a preset from 1-based menu input.
    pub fn select(&self, menu_input: &str) -> Result<&Preset> {
        let invalid = || {
            VirusEvolveError::InvalidSelection(format!(
                "'{}' is not a number between 1 and {}",
                menu_input.trim(),
                self.presets.len()
            ))
        };

        let choice: usize = menu_input.trim().parse().map_err(|_| invalid())?;
        if choice == 0 {
            return Err(invalid());
        }
        self.presets.get(choice - 1).ok_or_else(invalid)
    }

    /// Merge a JSON document of presets into the catalog.
    ///
    /// Known names are updated field by field, unknown names are appended.
    /// Entries whose value is not an object are skipped with a warning. The
    /// catalog is only modified once the whole document has been processed.
    pub fn merge_json(&mut self, json: &str) -> Result<MergeReport> {
        let document: Value = serde_json::from_str(json)?;
        let entries = document.as_object().ok_or_else(|| {
            VirusEvolveError::PresetLoading(
                "Preset document must be a JSON object keyed by sickness name".to_string(),
            )
        })?;

        let mut presets = self.presets.clone();
        let mut report = MergeReport::default();

        for (name, value) in entries {
            let existing = presets.iter().position(|p| &p.name == name);
            match (existing, value.as_object()) {
                (Some(idx), Some(fields)) => {
                    presets[idx].record.apply_fields(fields);
                    report.updated.push(name.clone());
                }
                (None, Some(fields)) => {
                    let mut record = PresetRecord::default();
                    record.apply_fields(fields);
                    presets.push(Preset::new(name.clone(), record));
                    report.added.push(name.clone());
                }
                (_, None) => {
                    log::warn!("Skipping non-object value for {}", name);
                    report.skipped.push(name.clone());
                }
            }
        }

        self.presets = presets;
        Ok(report)
    }

    /// Read and merge a JSON preset file.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<MergeReport> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            VirusEvolveError::PresetLoading(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let report = self.merge_json(&contents).map_err(|e| {
            VirusEvolveError::PresetLoading(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        log::info!(
            "Presets updated from {}: {} updated, {} added, {} skipped",
            path.display(),
            report.updated.len(),
            report.added.len(),
            report.skipped.len()
        );
        Ok(report)
    }
}
