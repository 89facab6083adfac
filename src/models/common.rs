//! Common types shared across Freshdesk models.
//!
//! This module defines the custom-field value union and the search
//! result wrapper used by several endpoints.

use std::collections::BTreeMap;
use std::fmt;

use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};

/// A single custom field value.
///
/// Freshdesk custom fields hold scalars only. Keeping the union closed
/// makes request bodies serialize the same way every time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum FieldValue {
    /// Boolean (checkbox fields).
    Bool(bool),
    /// Whole number (number fields, ids).
    Integer(i64),
    /// Decimal number.
    Float(f64),
    /// Text, dropdown choice, or ISO date.
    Text(String),
    /// Explicitly cleared value.
    Null,
}

impl FieldValue {
    /// Renders the value the way it appears in a query string.
    pub fn as_query_value(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Integer(n) => write!(f, "{}", n),
            FieldValue::Float(n) => write!(f, "{}", n),
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Null => f.write_str("null"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

/// Custom field values keyed by field name, in name order.
pub type CustomFields = BTreeMap<String, FieldValue>;

/// Result of a search endpoint that reports its own total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults<T> {
    /// Matching records.
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,

    /// Total number of matches as reported by the remote search.
    #[serde(default)]
    pub total: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_field_value_deserializes_each_kind() {
        let json = r#"{"a": true, "b": 3, "c": 2.5, "d": "text", "e": null}"#;
        let fields: CustomFields = serde_json::from_str(json).unwrap();
        assert_eq!(fields["a"], FieldValue::Bool(true));
        assert_eq!(fields["b"], FieldValue::Integer(3));
        assert_eq!(fields["c"], FieldValue::Float(2.5));
        assert_eq!(fields["d"], FieldValue::Text("text".to_string()));
        assert_eq!(fields["e"], FieldValue::Null);
    }

    #[test]
    fn test_custom_fields_serialize_in_key_order() {
        let mut fields = CustomFields::new();
        fields.insert("cf_zone".to_string(), "north".into());
        fields.insert("cf_account".to_string(), 42.into());
        let json = serde_json::to_string(&fields).unwrap();
        assert_eq!(json, r#"{"cf_account":42,"cf_zone":"north"}"#);
    }

    #[test]
    fn test_integer_stays_integer_on_output() {
        let json = serde_json::to_string(&FieldValue::Integer(7)).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn test_query_value_rendering() {
        assert_eq!(FieldValue::from("gold").as_query_value(), "gold");
        assert_eq!(FieldValue::Bool(false).as_query_value(), "false");
    }

    #[test]
    fn test_search_results_defaults() {
        let parsed: SearchResults<u64> = serde_json::from_str("{}").unwrap();
        assert!(parsed.results.is_empty());
        assert_eq!(parsed.total, None);
    }
}
