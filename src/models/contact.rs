//! Contact models for the Freshdesk API.

use serde::{Deserialize, Serialize};

use super::CustomFields;

/// A customer contact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    /// Unique contact ID.
    pub id: u64,

    /// Full name.
    #[serde(default)]
    pub name: Option<String>,

    /// Primary email address.
    #[serde(default)]
    pub email: Option<String>,

    /// Additional email addresses.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub other_emails: Vec<String>,

    /// Phone number.
    #[serde(default)]
    pub phone: Option<String>,

    /// Mobile number.
    #[serde(default)]
    pub mobile: Option<String>,

    /// Twitter handle.
    #[serde(default)]
    pub twitter_id: Option<String>,

    /// External identifier.
    #[serde(default)]
    pub unique_external_id: Option<String>,

    /// Primary company.
    #[serde(default)]
    pub company_id: Option<u64>,

    /// Whether the contact can see all tickets of their company.
    #[serde(default)]
    pub view_all_tickets: Option<bool>,

    /// Whether the contact has been verified.
    #[serde(default)]
    pub active: Option<bool>,

    /// Postal address.
    #[serde(default)]
    pub address: Option<String>,

    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,

    /// Job title.
    #[serde(default)]
    pub job_title: Option<String>,

    /// Language code.
    #[serde(default)]
    pub language: Option<String>,

    /// Time zone name.
    #[serde(default)]
    pub time_zone: Option<String>,

    /// Tags attached to the contact.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Values of custom contact fields.
    #[serde(default, skip_serializing_if = "CustomFields::is_empty")]
    pub custom_fields: CustomFields,

    /// Creation timestamp (ISO 8601).
    #[serde(default)]
    pub created_at: Option<String>,

    /// Last update timestamp (ISO 8601).
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Reduced contact record returned by the autocomplete endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSuggestion {
    /// Contact ID.
    pub id: u64,

    /// Full name.
    #[serde(default)]
    pub name: Option<String>,

    /// Primary email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Mobile number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_deserialize() {
        let json = r#"{
            "id": 9001,
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "other_emails": ["ada@analytical.engine"],
            "active": true,
            "custom_fields": {"cf_tier": "gold"}
        }"#;
        let contact: Contact = serde_json::from_str(json).unwrap();
        assert_eq!(contact.name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(contact.other_emails.len(), 1);
        assert_eq!(contact.custom_fields.len(), 1);
    }

    #[test]
    fn test_suggestion_omits_missing_fields() {
        let suggestion: ContactSuggestion =
            serde_json::from_str(r#"{"id": 1, "name": "Ada"}"#).unwrap();
        let json = serde_json::to_value(&suggestion).unwrap();
        assert_eq!(json, serde_json::json!({"id": 1, "name": "Ada"}));
    }
}
