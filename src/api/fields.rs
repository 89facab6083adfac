//! Ticket-field and contact-field operations.
//!
//! Create and update bodies are wrapped in the family's envelope key
//! (`ticket_field` / `contact_field`); listing and viewing are not.

use serde_json::{Map, Value};

use super::change_set;
use crate::client::{FreshdeskClient, RequestDescriptor};
use crate::error::FreshdeskError;
use crate::models::{ContactField, TicketField};
use crate::tools::{FieldChanges, NewField};

/// Where one field family lives in the remote API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldFamily {
    /// Ticket fields.
    Ticket,
    /// Contact fields.
    Contact,
}

impl FieldFamily {
    /// Path used for listing.
    fn list_path(self) -> &'static str {
        match self {
            FieldFamily::Ticket => "/ticket_fields",
            FieldFamily::Contact => "/contact_fields",
        }
    }

    /// Path used for viewing, creating and updating.
    fn admin_path(self) -> &'static str {
        match self {
            FieldFamily::Ticket => "/admin/ticket_fields",
            FieldFamily::Contact => "/contact_fields",
        }
    }

    /// Name of the envelope key around create/update bodies.
    fn envelope(self) -> &'static str {
        match self {
            FieldFamily::Ticket => "ticket_field",
            FieldFamily::Contact => "contact_field",
        }
    }

    fn wrap(self, body: Value) -> Value {
        let mut envelope = Map::new();
        envelope.insert(self.envelope().to_string(), body);
        Value::Object(envelope)
    }
}

impl FreshdeskClient {
    /// Lists all ticket fields.
    pub async fn list_ticket_fields(&self) -> Result<Vec<TicketField>, FreshdeskError> {
        self.list_fields(FieldFamily::Ticket).await
    }

    /// Gets one ticket field.
    pub async fn view_ticket_field(&self, field_id: u64) -> Result<TicketField, FreshdeskError> {
        self.view_field(FieldFamily::Ticket, field_id).await
    }

    /// Creates a ticket field. Dropdown types need a non-empty choice list.
    pub async fn create_ticket_field(
        &self,
        field: &NewField,
    ) -> Result<TicketField, FreshdeskError> {
        self.create_field(FieldFamily::Ticket, field).await
    }

    /// Updates a ticket field. At least one attribute must change.
    pub async fn update_ticket_field(
        &self,
        field_id: u64,
        changes: &FieldChanges,
    ) -> Result<TicketField, FreshdeskError> {
        self.update_field(FieldFamily::Ticket, field_id, changes)
            .await
    }

    /// Lists all contact fields.
    pub async fn list_contact_fields(&self) -> Result<Vec<ContactField>, FreshdeskError> {
        self.list_fields(FieldFamily::Contact).await
    }

    /// Gets one contact field.
    pub async fn view_contact_field(&self, field_id: u64) -> Result<ContactField, FreshdeskError> {
        self.view_field(FieldFamily::Contact, field_id).await
    }

    /// Creates a contact field. Dropdown types need a non-empty choice list.
    pub async fn create_contact_field(
        &self,
        field: &NewField,
    ) -> Result<ContactField, FreshdeskError> {
        self.create_field(FieldFamily::Contact, field).await
    }

    /// Updates a contact field. At least one attribute must change.
    pub async fn update_contact_field(
        &self,
        field_id: u64,
        changes: &FieldChanges,
    ) -> Result<ContactField, FreshdeskError> {
        self.update_field(FieldFamily::Contact, field_id, changes)
            .await
    }

    async fn list_fields(
        &self,
        family: FieldFamily,
    ) -> Result<Vec<TicketField>, FreshdeskError> {
        self.send_json(RequestDescriptor::get(family.list_path()))
            .await
    }

    async fn view_field(
        &self,
        family: FieldFamily,
        field_id: u64,
    ) -> Result<TicketField, FreshdeskError> {
        let path = format!("{}/{}", family.admin_path(), field_id);
        self.send_json(RequestDescriptor::get(path)).await
    }

    async fn create_field(
        &self,
        family: FieldFamily,
        field: &NewField,
    ) -> Result<TicketField, FreshdeskError> {
        field.validate()?;
        let body = family.wrap(serde_json::to_value(field)?);
        self.send_json(RequestDescriptor::post(family.admin_path()).with_json(body))
            .await
    }

    async fn update_field(
        &self,
        family: FieldFamily,
        field_id: u64,
        changes: &FieldChanges,
    ) -> Result<TicketField, FreshdeskError> {
        let body = family.wrap(change_set(changes, family.envelope())?);
        let path = format!("{}/{}", family.admin_path(), field_id);
        self.send_json(RequestDescriptor::put(path).with_json(body))
            .await
    }
}
