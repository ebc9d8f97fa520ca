use serde::{Deserialize, Serialize};
use std::fmt;

/// A preset field as it arrives from outside: JSON number, JSON string,
/// JSON boolean, or nothing at all.
///
/// Values stay raw inside the preset catalog and are only turned into real
/// numbers by [`crate::data::coercion::coerce`] right before a pathogen is
/// built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Flag(bool),
    Text(String),
    #[default]
    Missing,
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Number(n) => write!(f, "{}", n),
            RawValue::Flag(b) => write!(f, "{}", b),
            RawValue::Text(s) => write!(f, "{}", s),
            RawValue::Missing => write!(f, "<missing>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_deserialization() {
        let values: Vec<RawValue> =
            serde_json::from_str(r#"[0.25, "High", true, null]"#).unwrap();

        assert_eq!(values[0], RawValue::Number(0.25));
        assert_eq!(values[1], RawValue::Text("High".to_string()));
        assert_eq!(values[2], RawValue::Flag(true));
        assert_eq!(values[3], RawValue::Missing);
    }

    #[test]
    fn test_integer_json_is_number() {
        let value: RawValue = serde_json::from_str("1").unwrap();
        assert_eq!(value, RawValue::Number(1.0));
    }
}
