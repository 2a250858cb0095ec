// src/types/amount.rs
//! Monetary and ratio values as the analysis API sends them: JSON numbers
//! for some endpoints, decimal strings for others.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Amount(pub f64);

impl Amount {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(Amount(n)),
            Raw::Text(s) => s
                .trim()
                .parse::<f64>()
                .map(Amount)
                .map_err(|_| de::Error::custom(format!("expected a numeric string, got {:?}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        value: Amount,
    }

    #[test]
    fn test_amount_from_number_and_string() {
        let n: Wrapper = serde_json::from_str(r#"{"value": 90000}"#).unwrap();
        assert_eq!(n.value, Amount(90000.0));

        let s: Wrapper = serde_json::from_str(r#"{"value": "110000.50"}"#).unwrap();
        assert_eq!(s.value, Amount(110000.5));
    }

    #[test]
    fn test_amount_rejects_garbage() {
        assert!(serde_json::from_str::<Wrapper>(r#"{"value": "lots"}"#).is_err());
        assert!(serde_json::from_str::<Wrapper>(r#"{"value": true}"#).is_err());
    }
}
