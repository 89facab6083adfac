//! Input records for the ticket-field and contact-field tools.
//!
//! Both families share the same records; the gateway wraps the body in the
//! family's envelope key.

use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FreshdeskError;
use crate::models::requires_choices;

/// Input parameters for tools addressing one field definition by ID.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FieldIdInput {
    /// The field ID.
    pub field_id: u64,
}

/// Definition of a new custom field.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct NewField {
    /// Label shown to agents.
    pub label: String,

    /// Field type, e.g. `custom_text`, `custom_checkbox`, `custom_dropdown`.
    #[serde(rename = "type")]
    pub field_type: String,

    /// Label shown to customers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_for_customers: Option<String>,

    /// Help text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Position in the form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,

    /// Agents must fill the field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_for_agents: Option<bool>,

    /// Customers must fill the field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_for_customers: Option<bool>,

    /// Ticket fields only: must be filled before closing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_for_closure: Option<bool>,

    /// Show the field in the customer portal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub displayed_for_customers: Option<bool>,

    /// Customers may edit the value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customers_can_edit: Option<bool>,

    /// Contact fields only: show on the signup form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editable_in_signup: Option<bool>,

    /// Choices for dropdown fields: a list of values, or nested choices
    /// for dependent fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Value>,
}

impl NewField {
    /// Checks that choice-based field types come with their choices.
    pub fn validate(&self) -> Result<(), FreshdeskError> {
        if requires_choices(&self.field_type) && !has_choices(self.choices.as_ref()) {
            return Err(FreshdeskError::validation(format!(
                "choices are required for fields of type '{}'",
                self.field_type
            )));
        }
        Ok(())
    }
}

fn has_choices(choices: Option<&Value>) -> bool {
    match choices {
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::Object(map)) => !map.is_empty(),
        _ => false,
    }
}

/// Attributes of a field definition that can be changed.
///
/// `name` and `type` are passed through; the remote API rejects changes
/// to them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct FieldChanges {
    /// New agent label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// New customer label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_for_customers: Option<String>,

    /// Internal name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Field type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,

    /// New help text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// New position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,

    /// Agents must fill the field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_for_agents: Option<bool>,

    /// Customers must fill the field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_for_customers: Option<bool>,

    /// Must be filled before closing (ticket fields).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_for_closure: Option<bool>,

    /// Show the field in the customer portal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub displayed_for_customers: Option<bool>,

    /// Customers may edit the value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customers_can_edit: Option<bool>,

    /// Show on the signup form (contact fields).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editable_in_signup: Option<bool>,

    /// Replacement choices.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Value>,
}

/// Input parameters for the update_ticket_field and update_contact_field tools.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateFieldInput {
    /// ID of the field to update.
    pub field_id: u64,

    /// Attributes to change; at least one is required.
    #[serde(flatten)]
    pub changes: FieldChanges,
}
