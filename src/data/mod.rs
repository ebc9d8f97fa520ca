pub mod coercion;
pub mod presets;

pub use coercion::{coerce, coerce_override, GENERIC_FALLBACK, SENTINEL_VALUE};
pub use presets::{MergeReport, Preset, PresetCatalog, PresetRecord, UserOverrides};
