//! Ticket operations, including conversations (replies and notes).

use super::change_set;
use crate::client::{FreshdeskClient, RequestDescriptor};
use crate::error::FreshdeskError;
use crate::models::{Conversation, SearchResults, Ticket};
use crate::pagination::{clamp_search_page, Page};
use crate::tools::{CreateTicketInput, ListTicketsInput, NewNote, NewReply, TicketChanges};

impl FreshdeskClient {
    /// Creates a ticket.
    ///
    /// # Errors
    ///
    /// Returns `FreshdeskError::Validation` without contacting the API when
    /// no requester identifier is given, or when a phone number comes
    /// without an email or a name.
    pub async fn create_ticket(&self, ticket: &CreateTicketInput) -> Result<Ticket, FreshdeskError> {
        ticket.validate()?;
        let body = serde_json::to_value(ticket)?;
        self.send_json(RequestDescriptor::post("/tickets").with_json(body))
            .await
    }

    /// Gets one ticket.
    pub async fn get_ticket(&self, ticket_id: u64) -> Result<Ticket, FreshdeskError> {
        let path = format!("/tickets/{}", ticket_id);
        self.send_json(RequestDescriptor::get(path)).await
    }

    /// Updates a ticket. At least one attribute must change.
    pub async fn update_ticket(
        &self,
        ticket_id: u64,
        changes: &TicketChanges,
    ) -> Result<Ticket, FreshdeskError> {
        let body = change_set(changes, "ticket")?;
        let path = format!("/tickets/{}", ticket_id);
        self.send_json(RequestDescriptor::put(path).with_json(body))
            .await
    }

    /// Deletes a ticket. The remote answers `204 No Content`.
    pub async fn delete_ticket(&self, ticket_id: u64) -> Result<(), FreshdeskError> {
        let path = format!("/tickets/{}", ticket_id);
        self.send_no_content(RequestDescriptor::delete(path)).await
    }

    /// Lists tickets matching the given filters, one page at a time.
    pub async fn list_tickets(
        &self,
        filters: &ListTicketsInput,
    ) -> Result<Page<Ticket>, FreshdeskError> {
        let request = ticket_filters(RequestDescriptor::get("/tickets"), filters);
        self.fetch_page(request, filters.page, filters.per_page)
            .await
    }

    /// Searches tickets with the remote query language, e.g.
    /// `priority:3 AND status:2`. The query is not interpreted locally.
    pub async fn search_tickets(
        &self,
        query: &str,
        page: Option<i64>,
    ) -> Result<SearchResults<Ticket>, FreshdeskError> {
        let request = RequestDescriptor::get("/search/tickets")
            .with_query("query", quote_query(query))
            .with_query("page", clamp_search_page(page));
        self.send_json(request).await
    }

    /// Lists the replies and notes of a ticket.
    pub async fn get_ticket_conversations(
        &self,
        ticket_id: u64,
    ) -> Result<Vec<Conversation>, FreshdeskError> {
        let path = format!("/tickets/{}/conversations", ticket_id);
        self.send_json(RequestDescriptor::get(path)).await
    }

    /// Replies to a ticket.
    pub async fn create_ticket_reply(
        &self,
        ticket_id: u64,
        reply: &NewReply,
    ) -> Result<Conversation, FreshdeskError> {
        let path = format!("/tickets/{}/reply", ticket_id);
        let body = serde_json::to_value(reply)?;
        self.send_json(RequestDescriptor::post(path).with_json(body))
            .await
    }

    /// Adds a note to a ticket. Notes are private unless stated otherwise.
    pub async fn create_ticket_note(
        &self,
        ticket_id: u64,
        note: &NewNote,
    ) -> Result<Conversation, FreshdeskError> {
        let path = format!("/tickets/{}/notes", ticket_id);
        let body = serde_json::to_value(note)?;
        self.send_json(RequestDescriptor::post(path).with_json(body))
            .await
    }
}

/// Maps each present filter to its query parameter.
fn ticket_filters(request: RequestDescriptor, filters: &ListTicketsInput) -> RequestDescriptor {
    let mut request = request
        .with_optional_query("filter", filters.filter.as_deref())
        .with_optional_query("requester_id", filters.requester_id)
        .with_optional_query("email", filters.email.as_deref())
        .with_optional_query("unique_external_id", filters.unique_external_id.as_deref())
        .with_optional_query("company_id", filters.company_id)
        .with_optional_query("status", filters.status)
        .with_optional_query("priority", filters.priority)
        .with_optional_query("source", filters.source)
        .with_optional_query("group_id", filters.group_id)
        .with_optional_query("responder_id", filters.responder_id)
        .with_optional_query("tag", filters.tag.as_deref())
        .with_optional_query("created_since", filters.created_since.as_deref())
        .with_optional_query("updated_since", filters.updated_since.as_deref())
        .with_optional_query("order_by", filters.order_by.as_deref())
        .with_optional_query("order_type", filters.order_type.as_deref());

    if let Some(custom_fields) = &filters.custom_fields {
        for (name, value) in custom_fields {
            request = request.with_query(name.as_str(), value.as_query_value());
        }
    }

    request.with_optional_query("query", filters.query.as_deref())
}

/// Wraps a search query in double quotes unless it already is.
fn quote_query(query: &str) -> String {
    let query = query.trim();
    if is_quoted_token(query) {
        query.to_string()
    } else {
        format!("\"{}\"", query)
    }
}

/// True when the whole query is one `"..."` token with no unescaped `"` inside.
fn is_quoted_token(query: &str) -> bool {
    let Some(inner) = query
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    else {
        return false;
    };

    let mut escaped = false;
    for ch in inner.chars() {
        match ch {
            '\\' if !escaped => escaped = true,
            '"' if !escaped => return false,
            _ => escaped = false,
        }
    }
    !escaped
}
