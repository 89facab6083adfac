//! Input records for the ticket tools.

use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};

use super::trim_option;
use crate::error::FreshdeskError;
use crate::models::{priority, status, CustomFields};

fn default_ticket_status() -> u32 {
    status::OPEN
}

fn default_ticket_priority() -> u32 {
    priority::LOW
}

fn default_note_private() -> bool {
    true
}

/// Input parameters for the create_ticket tool.
///
/// At least one requester identifier is required: `email`, `requester_id`,
/// `phone`, `unique_external_id`, `twitter_id` or `facebook_id`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateTicketInput {
    /// Ticket subject.
    pub subject: String,

    /// Ticket body (HTML).
    pub description: String,

    /// Requester email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Requester contact ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requester_id: Option<u64>,

    /// Requester phone number. Requires `name` when `email` is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Requester name, used when a new contact is created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Requester external identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_external_id: Option<String>,

    /// Requester Twitter handle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_id: Option<String>,

    /// Requester Facebook ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook_id: Option<String>,

    /// Status code: 2 open (default), 3 pending, 4 resolved, 5 closed.
    #[serde(default = "default_ticket_status")]
    pub status: u32,

    /// Priority code: 1 low (default), 2 medium, 3 high, 4 urgent.
    #[serde(default = "default_ticket_priority")]
    pub priority: u32,

    /// Source code: 1 email, 2 portal, 3 phone, 7 chat, ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<u32>,

    /// Ticket type, e.g. "Question" or "Incident".
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ticket_type: Option<String>,

    /// Agent to assign.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responder_id: Option<u64>,

    /// Group to assign.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<u64>,

    /// Company of the requester.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<u64>,

    /// Product the ticket belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    /// Tags to attach.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Addresses to CC.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cc_emails: Option<Vec<String>>,

    /// Resolution due date (ISO 8601).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_by: Option<String>,

    /// First response due date (ISO 8601).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fr_due_by: Option<String>,

    /// Values of custom ticket fields, keyed by field name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<CustomFields>,
}

impl CreateTicketInput {
    /// Sanitizes input by trimming whitespace from the requester fields.
    #[must_use]
    pub fn sanitize(self) -> Self {
        Self {
            subject: self.subject.trim().to_string(),
            email: trim_option(&self.email),
            phone: trim_option(&self.phone),
            name: trim_option(&self.name),
            unique_external_id: trim_option(&self.unique_external_id),
            twitter_id: trim_option(&self.twitter_id),
            facebook_id: trim_option(&self.facebook_id),
            ..self
        }
    }

    /// Returns true if any field identifying the requester is present.
    pub fn has_requester(&self) -> bool {
        self.email.is_some()
            || self.requester_id.is_some()
            || self.phone.is_some()
            || self.unique_external_id.is_some()
            || self.twitter_id.is_some()
            || self.facebook_id.is_some()
    }

    /// Checks the requester rules that the remote API would otherwise reject.
    pub fn validate(&self) -> Result<(), FreshdeskError> {
        if !self.has_requester() {
            return Err(FreshdeskError::validation(
                "a requester is required: provide one of email, requester_id, phone, \
                 unique_external_id, twitter_id or facebook_id",
            ));
        }
        if self.phone.is_some() && self.email.is_none() && self.name.is_none() {
            return Err(FreshdeskError::validation(
                "name is required when phone is given without email",
            ));
        }
        Ok(())
    }
}

/// Input parameters for tools addressing one ticket by ID.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TicketIdInput {
    /// The ticket ID.
    pub ticket_id: u64,
}

/// Fields of a ticket that can be changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct TicketChanges {
    /// New subject.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// New body (HTML).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// New status code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u32>,

    /// New priority code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,

    /// New source code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<u32>,

    /// New ticket type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ticket_type: Option<String>,

    /// New requester.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requester_id: Option<u64>,

    /// New assigned agent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responder_id: Option<u64>,

    /// New assigned group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<u64>,

    /// New company.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<u64>,

    /// New product.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    /// Replacement tag list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// New resolution due date (ISO 8601).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_by: Option<String>,

    /// New first response due date (ISO 8601).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fr_due_by: Option<String>,

    /// Custom field values to set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<CustomFields>,
}

/// Input parameters for the update_ticket tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateTicketInput {
    /// ID of the ticket to update.
    pub ticket_id: u64,

    /// Fields to change; at least one is required.
    #[serde(flatten)]
    pub changes: TicketChanges,
}

/// Input parameters for the list_tickets tool.
///
/// Every filter is optional and only sent when present.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListTicketsInput {
    /// Page number (minimum 1, default 1).
    #[serde(default)]
    pub page: Option<i64>,

    /// Page size (1 to 100, default 30).
    #[serde(default)]
    pub per_page: Option<i64>,

    /// Predefined filter, e.g. "new_and_my_open", "watching", "spam", "deleted".
    #[serde(default)]
    pub filter: Option<String>,

    /// Only tickets of this requester.
    #[serde(default)]
    pub requester_id: Option<u64>,

    /// Only tickets of the requester with this email.
    #[serde(default)]
    pub email: Option<String>,

    /// Only tickets of the requester with this external ID.
    #[serde(default)]
    pub unique_external_id: Option<String>,

    /// Only tickets of this company.
    #[serde(default)]
    pub company_id: Option<u64>,

    /// Status code.
    #[serde(default)]
    pub status: Option<u32>,

    /// Priority code.
    #[serde(default)]
    pub priority: Option<u32>,

    /// Source code.
    #[serde(default)]
    pub source: Option<u32>,

    /// Assigned group.
    #[serde(default)]
    pub group_id: Option<u64>,

    /// Assigned agent.
    #[serde(default)]
    pub responder_id: Option<u64>,

    /// Tag the tickets must carry.
    #[serde(default)]
    pub tag: Option<String>,

    /// Only tickets created at or after this time (ISO 8601).
    #[serde(default)]
    pub created_since: Option<String>,

    /// Only tickets updated at or after this time (ISO 8601).
    #[serde(default)]
    pub updated_since: Option<String>,

    /// Sort field: "created_at", "due_by", "updated_at" or "status".
    #[serde(default)]
    pub order_by: Option<String>,

    /// Sort direction: "asc" or "desc".
    #[serde(default)]
    pub order_type: Option<String>,

    /// Custom field filters, each sent as its own query parameter.
    #[serde(default)]
    pub custom_fields: Option<CustomFields>,

    /// Raw advanced query string, passed through unchanged.
    #[serde(default)]
    pub query: Option<String>,
}

impl ListTicketsInput {
    /// Sanitizes input by trimming whitespace from all string fields.
    #[must_use]
    pub fn sanitize(self) -> Self {
        Self {
            filter: trim_option(&self.filter),
            email: trim_option(&self.email),
            unique_external_id: trim_option(&self.unique_external_id),
            tag: trim_option(&self.tag),
            created_since: trim_option(&self.created_since),
            updated_since: trim_option(&self.updated_since),
            order_by: trim_option(&self.order_by),
            order_type: trim_option(&self.order_type),
            query: trim_option(&self.query),
            ..self
        }
    }
}

/// Input parameters for the search_tickets tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchTicketsInput {
    /// Query in the remote grammar, e.g. `priority:3 AND status:2`.
    pub query: String,

    /// Result page (1 to 10, default 1).
    #[serde(default)]
    pub page: Option<i64>,
}

impl SearchTicketsInput {
    /// Sanitizes input by trimming the query.
    #[must_use]
    pub fn sanitize(self) -> Self {
        Self {
            query: self.query.trim().to_string(),
            page: self.page,
        }
    }
}

/// Body of a reply to a ticket.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct NewReply {
    /// Reply content (HTML).
    pub body: String,

    /// Sender address; defaults to the ticket's support email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_email: Option<String>,

    /// Agent sending the reply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,

    /// Addresses to CC.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cc_emails: Option<Vec<String>>,

    /// Addresses to BCC.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bcc_emails: Option<Vec<String>>,
}

/// Input parameters for the create_ticket_reply tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateReplyInput {
    /// ID of the ticket to reply to.
    pub ticket_id: u64,

    /// The reply.
    #[serde(flatten)]
    pub reply: NewReply,
}

/// Body of a note on a ticket.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct NewNote {
    /// Note content (HTML).
    pub body: String,

    /// Whether the note is hidden from the requester (default true).
    #[serde(default = "default_note_private")]
    pub private: bool,

    /// Agent or contact adding the note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,

    /// Agents to notify by email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify_emails: Option<Vec<String>>,

    /// Set when the note should appear as coming from outside.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incoming: Option<bool>,
}

/// Input parameters for the create_ticket_note tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateNoteInput {
    /// ID of the ticket to annotate.
    pub ticket_id: u64,

    /// The note.
    #[serde(flatten)]
    pub note: NewNote,
}
