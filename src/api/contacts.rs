//! Contact operations.

use super::change_set;
use crate::client::{FreshdeskClient, RequestDescriptor};
use crate::error::FreshdeskError;
use crate::models::{Contact, ContactSuggestion};
use crate::pagination::Page;
use crate::tools::{ContactChanges, CreateContactInput, ListContactsInput};

impl FreshdeskClient {
    /// Lists contacts matching the given filters, one page at a time.
    pub async fn list_contacts(
        &self,
        filters: &ListContactsInput,
    ) -> Result<Page<Contact>, FreshdeskError> {
        let request = RequestDescriptor::get("/contacts")
            .with_optional_query("email", filters.email.as_deref())
            .with_optional_query("mobile", filters.mobile.as_deref())
            .with_optional_query("phone", filters.phone.as_deref())
            .with_optional_query("company_id", filters.company_id)
            .with_optional_query("state", filters.state.as_deref())
            .with_optional_query("_updated_since", filters.updated_since.as_deref());
        self.fetch_page(request, filters.page, filters.per_page)
            .await
    }

    /// Gets one contact.
    pub async fn get_contact(&self, contact_id: u64) -> Result<Contact, FreshdeskError> {
        let path = format!("/contacts/{}", contact_id);
        self.send_json(RequestDescriptor::get(path)).await
    }

    /// Creates a contact.
    pub async fn create_contact(
        &self,
        contact: &CreateContactInput,
    ) -> Result<Contact, FreshdeskError> {
        let body = serde_json::to_value(contact)?;
        self.send_json(RequestDescriptor::post("/contacts").with_json(body))
            .await
    }

    /// Updates a contact. `tags` and `other_emails` replace the stored
    /// lists. At least one attribute must change.
    pub async fn update_contact(
        &self,
        contact_id: u64,
        changes: &ContactChanges,
    ) -> Result<Contact, FreshdeskError> {
        let body = change_set(changes, "contact")?;
        let path = format!("/contacts/{}", contact_id);
        self.send_json(RequestDescriptor::put(path).with_json(body))
            .await
    }

    /// Completes a partial name or email into matching contacts.
    pub async fn search_contacts(
        &self,
        term: &str,
    ) -> Result<Vec<ContactSuggestion>, FreshdeskError> {
        let request = RequestDescriptor::get("/contacts/autocomplete").with_query("term", term);
        self.send_json(request).await
    }
}
