//! Ticket models for the Freshdesk API.

use serde::{Deserialize, Serialize};

use super::CustomFields;

/// Ticket status codes used by Freshdesk.
pub mod status {
    /// Open.
    pub const OPEN: u32 = 2;
    /// Pending.
    pub const PENDING: u32 = 3;
    /// Resolved.
    pub const RESOLVED: u32 = 4;
    /// Closed.
    pub const CLOSED: u32 = 5;
}

/// Ticket priority codes used by Freshdesk.
pub mod priority {
    /// Low.
    pub const LOW: u32 = 1;
    /// Medium.
    pub const MEDIUM: u32 = 2;
    /// High.
    pub const HIGH: u32 = 3;
    /// Urgent.
    pub const URGENT: u32 = 4;
}

/// A support ticket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    /// Unique ticket ID.
    pub id: u64,

    /// Subject line.
    #[serde(default)]
    pub subject: Option<String>,

    /// Body (HTML).
    #[serde(default)]
    pub description: Option<String>,

    /// Body as plain text.
    #[serde(default)]
    pub description_text: Option<String>,

    /// Status code (see [`status`]).
    #[serde(default)]
    pub status: Option<u32>,

    /// Priority code (see [`priority`]).
    #[serde(default)]
    pub priority: Option<u32>,

    /// Channel the ticket came in through (1 email, 2 portal, 3 phone, ...).
    #[serde(default)]
    pub source: Option<u32>,

    /// Ticket type, e.g. "Question" or "Incident".
    #[serde(rename = "type", default)]
    pub ticket_type: Option<String>,

    /// Requester contact ID.
    #[serde(default)]
    pub requester_id: Option<u64>,

    /// Assigned agent ID.
    #[serde(default)]
    pub responder_id: Option<u64>,

    /// Assigned group ID.
    #[serde(default)]
    pub group_id: Option<u64>,

    /// Company of the requester.
    #[serde(default)]
    pub company_id: Option<u64>,

    /// Product the ticket belongs to.
    #[serde(default)]
    pub product_id: Option<u64>,

    /// Tags attached to the ticket.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// CC addresses.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cc_emails: Vec<String>,

    /// Resolution due time (ISO 8601).
    #[serde(default)]
    pub due_by: Option<String>,

    /// First response due time (ISO 8601).
    #[serde(default)]
    pub fr_due_by: Option<String>,

    /// Whether the ticket has been escalated.
    #[serde(default)]
    pub is_escalated: Option<bool>,

    /// Values of custom ticket fields.
    #[serde(default, skip_serializing_if = "CustomFields::is_empty")]
    pub custom_fields: CustomFields,

    /// Creation timestamp (ISO 8601).
    #[serde(default)]
    pub created_at: Option<String>,

    /// Last update timestamp (ISO 8601).
    #[serde(default)]
    pub updated_at: Option<String>,
}
