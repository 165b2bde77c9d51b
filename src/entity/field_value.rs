use std::fmt;

use serde::{Deserialize, Serialize};

/// A scalar field value as seen by the dispatch engine.
///
/// The engine never interprets values beyond equality and truthiness; richer
/// types stay on the host's side of the entity contract.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl FieldValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Str(value) => Some(value),
            _ => None,
        }
    }

    /// Truthiness in the sense property predicates use it: null and zero
    /// values are false, everything else is true.
    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::Null => false,
            FieldValue::Bool(value) => *value,
            FieldValue::Int(value) => *value != 0,
            FieldValue::Float(value) => *value != 0.0,
            FieldValue::Str(value) => !value.is_empty(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => write!(f, "null"),
            FieldValue::Bool(value) => write!(f, "{}", value),
            FieldValue::Int(value) => write!(f, "{}", value),
            FieldValue::Float(value) => write!(f, "{}", value),
            FieldValue::Str(value) => write!(f, "{}", value),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Str(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Str(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthiness() {
        assert!(!FieldValue::Null.is_truthy());
        assert!(!FieldValue::Bool(false).is_truthy());
        assert!(FieldValue::Bool(true).is_truthy());
        assert!(!FieldValue::Int(0).is_truthy());
        assert!(FieldValue::Int(-1).is_truthy());
        assert!(!FieldValue::Str(String::new()).is_truthy());
        assert!(FieldValue::from("shipped").is_truthy());
    }

    #[test]
    fn equality_across_conversions() {
        assert_eq!(FieldValue::from("shipped"), FieldValue::Str("shipped".to_string()));
        assert_ne!(FieldValue::Int(1), FieldValue::Bool(true));
    }
}
