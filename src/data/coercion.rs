//! Numeric coercion of externally supplied preset fields.
//!
//! Preset data comes from a built-in table, an optional JSON file and free
//! text typed by the user, so a field may be a number, a numeric string, a
//! descriptive string such as `"High"` or `"Varies depending on ..."`, or
//! nothing. [`coerce`] always resolves it to a usable `f64` and never fails.

use crate::types::RawValue;

/// Value substituted for the descriptive sentinels `"High"` and `"Varies..."`.
pub const SENTINEL_VALUE: f64 = 0.5;

/// Value used when neither the input nor its default is numeric.
pub const GENERIC_FALLBACK: f64 = 0.1;

/// Resolve `value` to a real number, falling back on `default`.
///
/// 1. A number (or a string that parses as one) is returned as is.
/// 2. The exact string `"High"` becomes [`SENTINEL_VALUE`].
/// 3. Any string containing `"Varies"` becomes [`SENTINEL_VALUE`].
/// 4. Otherwise the default is used if it is itself numeric, else
///    [`GENERIC_FALLBACK`].
pub fn coerce(value: &RawValue, default: &RawValue) -> f64 {
    if let Some(number) = as_number(value) {
        return number;
    }

    let resolved = match value {
        RawValue::Text(text) if text == "High" => SENTINEL_VALUE,
        RawValue::Text(text) if text.contains("Varies") => SENTINEL_VALUE,
        _ => numeric_default(default),
    };

    log::warn!(
        "Non-numeric value '{}' detected, using numeric value {}",
        value,
        resolved
    );
    resolved
}

/// Resolve a user-typed override. Blank input keeps the preset value.
///
/// Whitespace-only input also counts as blank. Pressing space before Enter
/// keeps the preset value (0.5 for a `"High"` preset) instead of dropping to
/// the 0.1 fallback a non-numeric answer would get.
pub fn coerce_override(input: &str, preset_value: &RawValue) -> f64 {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return coerce(preset_value, preset_value);
    }

    coerce(&RawValue::Text(trimmed.to_string()), preset_value)
}

fn as_number(value: &RawValue) -> Option<f64> {
    match value {
        RawValue::Number(n) => Some(*n),
        RawValue::Flag(b) => Some(if *b { 1.0 } else { 0.0 }),
        RawValue::Text(text) => text.trim().parse::<f64>().ok(),
        RawValue::Missing => None,
    }
}

// Only a genuinely numeric default counts; numeric-looking text does not.
fn numeric_default(default: &RawValue) -> f64 {
    match default {
        RawValue::Number(n) => *n,
        RawValue::Flag(b) => if *b { 1.0 } else { 0.0 },
        RawValue::Text(_) | RawValue::Missing => GENERIC_FALLBACK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> RawValue {
        RawValue::Text(s.to_string())
    }

    #[test]
    fn test_sentinels() {
        assert_eq!(coerce(&text("High"), &RawValue::Number(0.9)), 0.5);
        assert_eq!(coerce(&text("Varies by patient"), &RawValue::Number(0.9)), 0.5);
        assert_eq!(
            coerce(&text("Varies depending on treatment adherence"), &RawValue::Missing),
            0.5
        );
    }

    #[test]
    fn test_high_is_case_sensitive() {
        assert_eq!(coerce(&text("high"), &RawValue::Number(0.3)), 0.3);
        assert_eq!(coerce(&text("HIGH"), &text("x")), GENERIC_FALLBACK);
    }

    #[test]
    fn test_numeric_strings() {
        assert_eq!(coerce(&text("0.42"), &RawValue::Number(0.3)), 0.42);
        assert_eq!(coerce(&text("  0.42 "), &RawValue::Missing), 0.42);
        assert_eq!(coerce(&text("1"), &RawValue::Missing), 1.0);
        assert_eq!(coerce(&RawValue::Number(0.2), &RawValue::Missing), 0.2);
    }

    #[test]
    fn test_garbage_uses_default() {
        assert_eq!(coerce(&text("garbage"), &RawValue::Number(0.3)), 0.3);
        assert_eq!(coerce(&text("garbage"), &text("0.3")), GENERIC_FALLBACK);
        assert_eq!(coerce(&text("garbage"), &text("High")), GENERIC_FALLBACK);
        assert_eq!(coerce(&RawValue::Missing, &RawValue::Missing), GENERIC_FALLBACK);
    }

    #[test]
    fn test_flags() {
        assert_eq!(coerce(&RawValue::Flag(true), &RawValue::Missing), 1.0);
        assert_eq!(coerce(&text("garbage"), &RawValue::Flag(false)), 0.0);
    }

    #[test]
    fn test_override_blank_uses_preset() {
        assert_eq!(coerce_override("", &RawValue::Number(0.15)), 0.15);
        assert_eq!(coerce_override("   ", &text("High")), 0.5);
        assert_eq!(
            coerce_override("", &text("Varies depending on treatment adherence")),
            0.5
        );
    }

    #[test]
    fn test_override_whitespace_counts_as_blank() {
        let hiv_resistance = text("Varies depending on treatment adherence");
        assert_eq!(coerce_override("   ", &hiv_resistance), 0.5);
        assert_eq!(coerce_override("\t\n", &RawValue::Number(0.3)), 0.3);
        assert_eq!(coerce_override(" x ", &hiv_resistance), GENERIC_FALLBACK);
    }

    #[test]
    fn test_override_values() {
        assert_eq!(coerce_override("0.25", &RawValue::Number(0.15)), 0.25);
        assert_eq!(coerce_override("fast", &RawValue::Number(0.15)), 0.15);
        assert_eq!(coerce_override("fast", &text("High")), GENERIC_FALLBACK);
        assert_eq!(coerce_override("High", &RawValue::Number(0.15)), 0.5);
    }
}
