//! Input records for the contact tools.

use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};

use super::trim_option;
use crate::models::CustomFields;

/// Input parameters for the list_contacts tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListContactsInput {
    /// Page number (minimum 1, default 1).
    #[serde(default)]
    pub page: Option<i64>,

    /// Page size (1 to 100, default 30).
    #[serde(default)]
    pub per_page: Option<i64>,

    /// Only the contact with this email.
    #[serde(default)]
    pub email: Option<String>,

    /// Only contacts with this mobile number.
    #[serde(default)]
    pub mobile: Option<String>,

    /// Only contacts with this phone number.
    #[serde(default)]
    pub phone: Option<String>,

    /// Only contacts of this company.
    #[serde(default)]
    pub company_id: Option<u64>,

    /// Contact state: "blocked", "deleted", "unverified" or "verified".
    #[serde(default)]
    pub state: Option<String>,

    /// Only contacts updated at or after this time (ISO 8601).
    #[serde(default)]
    pub updated_since: Option<String>,
}

impl ListContactsInput {
    /// Sanitizes input by trimming whitespace from all string fields.
    #[must_use]
    pub fn sanitize(self) -> Self {
        Self {
            email: trim_option(&self.email),
            mobile: trim_option(&self.mobile),
            phone: trim_option(&self.phone),
            state: trim_option(&self.state),
            updated_since: trim_option(&self.updated_since),
            ..self
        }
    }
}

/// Input parameters for the get_contact tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ContactIdInput {
    /// The contact ID.
    pub contact_id: u64,
}

/// A new contact.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateContactInput {
    /// Full name.
    pub name: String,

    /// Primary email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Mobile number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,

    /// Twitter handle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_id: Option<String>,

    /// External identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_external_id: Option<String>,

    /// Additional email addresses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_emails: Option<Vec<String>>,

    /// Primary company.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<u64>,

    /// Whether the contact can see all tickets of their company.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_all_tickets: Option<bool>,

    /// Postal address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Job title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,

    /// Language code, e.g. "en".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Time zone name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,

    /// Tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Custom field values, keyed by field name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<CustomFields>,
}

impl CreateContactInput {
    /// Sanitizes input by trimming whitespace from the identifying fields.
    #[must_use]
    pub fn sanitize(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: trim_option(&self.email),
            phone: trim_option(&self.phone),
            mobile: trim_option(&self.mobile),
            twitter_id: trim_option(&self.twitter_id),
            unique_external_id: trim_option(&self.unique_external_id),
            ..self
        }
    }
}

/// Attributes of a contact that can be changed.
///
/// `tags` and `other_emails` replace the stored lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ContactChanges {
    /// New name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New primary email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// New phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// New mobile number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,

    /// New Twitter handle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_id: Option<String>,

    /// New external identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_external_id: Option<String>,

    /// Replacement list of additional emails.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_emails: Option<Vec<String>>,

    /// New primary company.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<u64>,

    /// Whether the contact can see all tickets of their company.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_all_tickets: Option<bool>,

    /// New postal address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// New description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// New job title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,

    /// New language code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// New time zone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,

    /// Replacement tag list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Custom field values to set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<CustomFields>,
}

/// Input parameters for the update_contact tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateContactInput {
    /// ID of the contact to update.
    pub contact_id: u64,

    /// Attributes to change; at least one is required.
    #[serde(flatten)]
    pub changes: ContactChanges,
}

/// Input parameters for the search_contacts tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchContactsInput {
    /// Start of a name or email to complete.
    pub term: String,
}

impl SearchContactsInput {
    /// Sanitizes input by trimming the search term.
    #[must_use]
    pub fn sanitize(self) -> Self {
        Self {
            term: self.term.trim().to_string(),
        }
    }
}
