//! Custom field definition models for the Freshdesk API.
//!
//! Ticket fields and contact fields share most of their shape; the
//! family-specific flags are kept in `settings` so nothing the API returns
//! is dropped.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Definition of a ticket or contact field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Unique field ID.
    pub id: u64,

    /// Internal name (`cf_` prefixed for custom fields).
    #[serde(default)]
    pub name: Option<String>,

    /// Label shown to agents.
    #[serde(default)]
    pub label: Option<String>,

    /// Label shown to customers.
    #[serde(default)]
    pub label_for_customers: Option<String>,

    /// Help text.
    #[serde(default)]
    pub description: Option<String>,

    /// Position in the form.
    #[serde(default)]
    pub position: Option<u32>,

    /// Field type, e.g. `custom_text` or `custom_dropdown`.
    #[serde(rename = "type", default)]
    pub field_type: Option<String>,

    /// True for built-in fields.
    #[serde(default)]
    pub default: Option<bool>,

    /// Choices of dropdown-like fields; nested for dependent fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Value>,

    /// Creation timestamp (ISO 8601).
    #[serde(default)]
    pub created_at: Option<String>,

    /// Last update timestamp (ISO 8601).
    #[serde(default)]
    pub updated_at: Option<String>,

    /// Remaining family-specific attributes (required/editable flags, ...).
    #[serde(flatten)]
    pub settings: Map<String, Value>,
}

/// A ticket field definition.
pub type TicketField = FieldDefinition;

/// A contact field definition.
pub type ContactField = FieldDefinition;

/// Returns true if fields of this type need a choice list.
pub fn requires_choices(field_type: &str) -> bool {
    let field_type = field_type.trim().to_ascii_lowercase();
    field_type.ends_with("dropdown") || field_type == "nested_field"
}
