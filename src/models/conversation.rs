//! Conversation models for the Freshdesk API.
//!
//! Conversations are the replies and notes attached to a ticket.

use serde::{Deserialize, Serialize};

/// One entry in a ticket's conversation thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    /// Unique conversation ID.
    pub id: u64,

    /// Ticket the conversation belongs to.
    #[serde(default)]
    pub ticket_id: Option<u64>,

    /// Body (HTML).
    #[serde(default)]
    pub body: Option<String>,

    /// Body as plain text.
    #[serde(default)]
    pub body_text: Option<String>,

    /// True if it came from outside (requester), false if from an agent.
    #[serde(default)]
    pub incoming: Option<bool>,

    /// True for private notes.
    #[serde(default)]
    pub private: Option<bool>,

    /// Author user ID.
    #[serde(default)]
    pub user_id: Option<u64>,

    /// Source code (0 reply, 2 note, ...).
    #[serde(default)]
    pub source: Option<u32>,

    /// Sender address for replies.
    #[serde(default)]
    pub from_email: Option<String>,

    /// Recipient addresses.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub to_emails: Vec<String>,

    /// CC addresses.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cc_emails: Vec<String>,

    /// BCC addresses.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bcc_emails: Vec<String>,

    /// Creation timestamp (ISO 8601).
    #[serde(default)]
    pub created_at: Option<String>,

    /// Last update timestamp (ISO 8601).
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Conversation {
    /// Returns true if this entry is a private note.
    pub fn is_private(&self) -> bool {
        self.private == Some(true)
    }
}
