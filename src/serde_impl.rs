//! Serde support (feature-gated)
//!
//! - [`Quantifier`] serializes as its upper-case name (`"ALL"`, `"ANY"`,
//!   `"NONE"`) and deserializes from any casing of it.
//! - [`ArgumentError`] serializes as `{"check", "tag", "message"}` so
//!   rejections can be reported over an API.
//!
//! # Example
//!
//! ```rust,ignore
//! use plumbline::quantifier::Quantifier;
//!
//! let json = serde_json::to_string(&Quantifier::Any).unwrap();
//! assert_eq!(json, r#""ANY""#);
//! let back: Quantifier = serde_json::from_str(r#""none""#).unwrap();
//! assert_eq!(back, Quantifier::None);
//! ```

use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ArgumentError;
use crate::quantifier::Quantifier;

impl Serialize for Quantifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Quantifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

impl Serialize for ArgumentError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ArgumentError", 3)?;
        state.serialize_field("check", self.check())?;
        state.serialize_field("tag", self.tag())?;
        state.serialize_field("message", self.message())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::even;
    use crate::verify::that_int;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Rule {
        mode: Quantifier,
        values: Vec<i32>,
    }

    #[test]
    fn test_serialize_quantifier() {
        let rule = Rule {
            mode: Quantifier::All,
            values: vec![1, 2],
        };
        let json = serde_json::to_string(&rule).unwrap();
        assert_eq!(json, r#"{"mode":"ALL","values":[1,2]}"#);
    }

    #[test]
    fn test_deserialize_quantifier_any_case() {
        let rule: Rule = serde_json::from_str(r#"{"mode":"any","values":[]}"#).unwrap();
        assert_eq!(rule.mode, Quantifier::Any);
    }

    #[test]
    fn test_deserialize_unknown_quantifier_fails() {
        let result: Result<Rule, _> = serde_json::from_str(r#"{"mode":"SOME","values":[]}"#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown quantifier"));
    }

    #[test]
    fn test_roundtrip() {
        for mode in Quantifier::VALUES {
            let original = Rule {
                mode,
                values: vec![3],
            };
            let json = serde_json::to_string(&original).unwrap();
            let restored: Rule = serde_json::from_str(&json).unwrap();
            assert_eq!(original, restored);
        }
    }

    #[test]
    fn test_serialize_argument_error() {
        let err = that_int(3).tag("n").is(even()).unwrap_err();
        let arg = err.as_argument().unwrap();
        let json = serde_json::to_value(arg).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "check": "even()",
                "tag": "n",
                "message": "n must be even (was 3)",
            })
        );
    }
}
