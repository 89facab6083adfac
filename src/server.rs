//! MCP server implementation for Freshdesk.
//!
//! This module defines the `FreshdeskServer` struct that implements the MCP
//! `ServerHandler` trait, exposing Freshdesk operations as tools and the
//! knowledge base articles as resources.
//!
//! Every tool answers with pretty-printed JSON on success. Failures, local
//! or remote, come back as an error result carrying a sanitized message.

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        AnnotateAble, ListResourcesResult, PaginatedRequestParams, RawResource,
        ReadResourceRequestParams, ReadResourceResult, ResourceContents, ServerCapabilities,
        ServerInfo,
    },
    service::RequestContext,
    tool, tool_handler, tool_router, ErrorData as McpError, RoleServer, ServerHandler,
};
use serde::Serialize;
use serde_json::json;

use crate::client::FreshdeskClient;
use crate::error::FreshdeskError;
use crate::tools::{
    ContactIdInput, CreateArticleInput, CreateContactInput, CreateNoteInput, CreateReplyInput,
    CreateTicketInput, FieldIdInput, GetArticleInput, ListArticlesInput, ListContactsInput,
    ListFoldersInput, ListTicketsInput, NewField, SearchArticlesInput, SearchContactsInput,
    SearchTicketsInput, TicketIdInput, UpdateArticleInput, UpdateContactInput, UpdateFieldInput,
    UpdateTicketInput,
};

/// URI of the resource listing every knowledge base article.
pub const ALL_ARTICLES_URI: &str = "freshdesk://solutions/articles";

/// Prefix of single-article resource URIs; the article ID follows it.
pub const ARTICLE_URI_PREFIX: &str = "freshdesk://solutions/articles/";

/// The Freshdesk MCP server.
///
/// This server exposes Freshdesk operations as MCP tools.
#[derive(Clone)]
pub struct FreshdeskServer {
    /// Freshdesk client for API operations.
    client: FreshdeskClient,
    /// Tool router for MCP tool dispatch.
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl FreshdeskServer {
    /// Creates a new server instance.
    pub fn new(client: FreshdeskClient) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }

    /// A simple ping tool to verify the server is running.
    #[tool(description = "Test connectivity to the Freshdesk MCP server. Returns 'pong' if the server is running correctly.")]
    pub fn ping(&self) -> String {
        tracing::debug!("ping tool called");
        "pong".to_string()
    }

    // ========================================================================
    // Solutions
    // ========================================================================

    /// List knowledge base categories. Never fails; problems yield an empty list.
    #[tool(description = "List all knowledge base (solution) categories.")]
    pub async fn get_categories(&self) -> Result<String, String> {
        tracing::debug!("get_categories tool called");
        to_json(&self.client.get_categories().await)
    }

    /// List the folders of a category.
    #[tool(description = "List the folders of a knowledge base category.")]
    pub async fn list_folders(
        &self,
        Parameters(input): Parameters<ListFoldersInput>,
    ) -> Result<String, String> {
        tracing::debug!(category_id = input.category_id, "list_folders tool called");

        let folders = self
            .client
            .list_folders(input.category_id)
            .await
            .map_err(|e| self.failure(&format!("list folders of category {}", input.category_id), &e))?;

        to_json(&folders)
    }

    /// List the articles of a folder.
    #[tool(description = "List the articles in a knowledge base folder.")]
    pub async fn list_articles(
        &self,
        Parameters(input): Parameters<ListArticlesInput>,
    ) -> Result<String, String> {
        tracing::debug!(folder_id = input.folder_id, "list_articles tool called");

        let articles = self
            .client
            .list_articles(input.folder_id)
            .await
            .map_err(|e| self.failure(&format!("list articles of folder {}", input.folder_id), &e))?;

        to_json(&articles)
    }

    /// Get one article.
    #[tool(description = "Get a knowledge base article by ID, including its body.")]
    pub async fn get_article(
        &self,
        Parameters(input): Parameters<GetArticleInput>,
    ) -> Result<String, String> {
        tracing::debug!(article_id = input.article_id, "get_article tool called");

        let article = self
            .client
            .get_article(input.article_id)
            .await
            .map_err(|e| self.failure(&format!("get article {}", input.article_id), &e))?;

        to_json(&article)
    }

    /// Full-text search over articles.
    #[tool(description = "Search knowledge base articles by term. Returns matching articles and the total reported by Freshdesk.")]
    pub async fn search_articles(
        &self,
        Parameters(input): Parameters<SearchArticlesInput>,
    ) -> Result<String, String> {
        let input = input.sanitize();
        tracing::debug!(term = %input.term, "search_articles tool called");

        let results = self
            .client
            .search_articles(&input.term)
            .await
            .map_err(|e| self.failure("search articles", &e))?;

        to_json(&results)
    }

    /// Walk every category and folder and return all articles.
    #[tool(description = "Get every knowledge base article grouped by category and folder. Branches that could not be fetched carry an 'error' note instead of failing the whole call.")]
    pub async fn get_all_articles(&self) -> Result<String, String> {
        tracing::debug!("get_all_articles tool called");
        to_json(&self.client.solution_tree().await)
    }

    /// Create an article.
    #[tool(description = "Create a knowledge base article in a folder. Status 1 = draft (default), 2 = published.")]
    pub async fn create_article(
        &self,
        Parameters(input): Parameters<CreateArticleInput>,
    ) -> Result<String, String> {
        tracing::debug!(folder_id = input.folder_id, "create_article tool called");

        let article = self
            .client
            .create_article(input.folder_id, &input.article)
            .await
            .map_err(|e| self.failure("create article", &e))?;

        to_json(&article)
    }

    /// Update an article.
    #[tool(description = "Update a knowledge base article. At least one field besides article_id is required.")]
    pub async fn update_article(
        &self,
        Parameters(input): Parameters<UpdateArticleInput>,
    ) -> Result<String, String> {
        tracing::debug!(article_id = input.article_id, "update_article tool called");

        let article = self
            .client
            .update_article(input.article_id, &input.changes)
            .await
            .map_err(|e| self.failure(&format!("update article {}", input.article_id), &e))?;

        to_json(&article)
    }

    // ========================================================================
    // Tickets
    // ========================================================================

    /// Create a ticket.
    #[tool(description = "Create a ticket. Requires subject, description and a requester (email, requester_id, phone, unique_external_id, twitter_id or facebook_id). A phone without email also needs name.")]
    pub async fn create_ticket(
        &self,
        Parameters(input): Parameters<CreateTicketInput>,
    ) -> Result<String, String> {
        let input = input.sanitize();
        tracing::debug!(subject = %input.subject, "create_ticket tool called");

        let ticket = self
            .client
            .create_ticket(&input)
            .await
            .map_err(|e| self.failure("create ticket", &e))?;

        to_json(&ticket)
    }

    /// Get one ticket.
    #[tool(description = "Get a ticket by ID.")]
    pub async fn get_ticket(
        &self,
        Parameters(input): Parameters<TicketIdInput>,
    ) -> Result<String, String> {
        tracing::debug!(ticket_id = input.ticket_id, "get_ticket tool called");

        let ticket = self
            .client
            .get_ticket(input.ticket_id)
            .await
            .map_err(|e| self.failure(&format!("get ticket {}", input.ticket_id), &e))?;

        to_json(&ticket)
    }

    /// Update a ticket.
    #[tool(description = "Update a ticket. At least one field besides ticket_id is required.")]
    pub async fn update_ticket(
        &self,
        Parameters(input): Parameters<UpdateTicketInput>,
    ) -> Result<String, String> {
        tracing::debug!(ticket_id = input.ticket_id, "update_ticket tool called");

        let ticket = self
            .client
            .update_ticket(input.ticket_id, &input.changes)
            .await
            .map_err(|e| self.failure(&format!("update ticket {}", input.ticket_id), &e))?;

        to_json(&ticket)
    }

    /// Delete a ticket.
    #[tool(description = "Delete a ticket by ID.")]
    pub async fn delete_ticket(
        &self,
        Parameters(input): Parameters<TicketIdInput>,
    ) -> Result<String, String> {
        tracing::debug!(ticket_id = input.ticket_id, "delete_ticket tool called");

        self.client
            .delete_ticket(input.ticket_id)
            .await
            .map_err(|e| self.failure(&format!("delete ticket {}", input.ticket_id), &e))?;

        to_json(&json!({ "success": true, "ticket_id": input.ticket_id }))
    }

    /// List tickets with filters and pagination.
    #[tool(description = "List tickets. Supports page (min 1), per_page (1-100), and filters such as requester_id, email, company_id, status, priority, source, group_id, responder_id, tag, created_since, updated_since, custom_fields and a raw query. Returns the tickets and a pagination cursor with next_page/prev_page when they exist.")]
    pub async fn list_tickets(
        &self,
        Parameters(input): Parameters<ListTicketsInput>,
    ) -> Result<String, String> {
        let input = input.sanitize();
        tracing::debug!(?input, "list_tickets tool called");

        let page = self
            .client
            .list_tickets(&input)
            .await
            .map_err(|e| self.failure("list tickets", &e))?;

        to_json(&page)
    }

    /// Search tickets with the remote query language.
    #[tool(description = "Search tickets with a Freshdesk query such as 'priority:3 AND status:2'. The query is passed through unchanged; page is 1-10.")]
    pub async fn search_tickets(
        &self,
        Parameters(input): Parameters<SearchTicketsInput>,
    ) -> Result<String, String> {
        let input = input.sanitize();
        tracing::debug!(query = %input.query, page = ?input.page, "search_tickets tool called");

        let results = self
            .client
            .search_tickets(&input.query, input.page)
            .await
            .map_err(|e| self.failure("search tickets", &e))?;

        to_json(&results)
    }

    /// Get the replies and notes of a ticket.
    #[tool(description = "Get the conversation thread (replies and notes) of a ticket.")]
    pub async fn get_ticket_conversations(
        &self,
        Parameters(input): Parameters<TicketIdInput>,
    ) -> Result<String, String> {
        tracing::debug!(ticket_id = input.ticket_id, "get_ticket_conversations tool called");

        let conversations = self
            .client
            .get_ticket_conversations(input.ticket_id)
            .await
            .map_err(|e| {
                self.failure(&format!("get conversations of ticket {}", input.ticket_id), &e)
            })?;

        to_json(&conversations)
    }

    /// Reply to a ticket.
    #[tool(description = "Reply to a ticket. The reply is emailed to the requester.")]
    pub async fn create_ticket_reply(
        &self,
        Parameters(input): Parameters<CreateReplyInput>,
    ) -> Result<String, String> {
        tracing::debug!(ticket_id = input.ticket_id, "create_ticket_reply tool called");

        let reply = self
            .client
            .create_ticket_reply(input.ticket_id, &input.reply)
            .await
            .map_err(|e| self.failure(&format!("reply to ticket {}", input.ticket_id), &e))?;

        to_json(&reply)
    }

    /// Add a note to a ticket.
    #[tool(description = "Add a note to a ticket. Notes are private unless private is set to false.")]
    pub async fn create_ticket_note(
        &self,
        Parameters(input): Parameters<CreateNoteInput>,
    ) -> Result<String, String> {
        tracing::debug!(
            ticket_id = input.ticket_id,
            private = input.note.private,
            "create_ticket_note tool called"
        );

        let note = self
            .client
            .create_ticket_note(input.ticket_id, &input.note)
            .await
            .map_err(|e| self.failure(&format!("add note to ticket {}", input.ticket_id), &e))?;

        to_json(&note)
    }

    // ========================================================================
    // Ticket fields
    // ========================================================================

    /// List ticket fields.
    #[tool(description = "List all ticket fields, built-in and custom.")]
    pub async fn list_ticket_fields(&self) -> Result<String, String> {
        tracing::debug!("list_ticket_fields tool called");

        let fields = self
            .client
            .list_ticket_fields()
            .await
            .map_err(|e| self.failure("list ticket fields", &e))?;

        to_json(&fields)
    }

    /// View one ticket field.
    #[tool(description = "Get a ticket field definition by ID.")]
    pub async fn view_ticket_field(
        &self,
        Parameters(input): Parameters<FieldIdInput>,
    ) -> Result<String, String> {
        tracing::debug!(field_id = input.field_id, "view_ticket_field tool called");

        let field = self
            .client
            .view_ticket_field(input.field_id)
            .await
            .map_err(|e| self.failure(&format!("get ticket field {}", input.field_id), &e))?;

        to_json(&field)
    }

    /// Create a ticket field.
    #[tool(description = "Create a custom ticket field. Dropdown types require a non-empty choices list.")]
    pub async fn create_ticket_field(
        &self,
        Parameters(input): Parameters<NewField>,
    ) -> Result<String, String> {
        tracing::debug!(label = %input.label, field_type = %input.field_type, "create_ticket_field tool called");

        let field = self
            .client
            .create_ticket_field(&input)
            .await
            .map_err(|e| self.failure("create ticket field", &e))?;

        to_json(&field)
    }

    /// Update a ticket field.
    #[tool(description = "Update a ticket field. At least one attribute besides field_id is required.")]
    pub async fn update_ticket_field(
        &self,
        Parameters(input): Parameters<UpdateFieldInput>,
    ) -> Result<String, String> {
        tracing::debug!(field_id = input.field_id, "update_ticket_field tool called");

        let field = self
            .client
            .update_ticket_field(input.field_id, &input.changes)
            .await
            .map_err(|e| self.failure(&format!("update ticket field {}", input.field_id), &e))?;

        to_json(&field)
    }

    // ========================================================================
    // Contact fields
    // ========================================================================

    /// List contact fields.
    #[tool(description = "List all contact fields, built-in and custom.")]
    pub async fn list_contact_fields(&self) -> Result<String, String> {
        tracing::debug!("list_contact_fields tool called");

        let fields = self
            .client
            .list_contact_fields()
            .await
            .map_err(|e| self.failure("list contact fields", &e))?;

        to_json(&fields)
    }

    /// View one contact field.
    #[tool(description = "Get a contact field definition by ID.")]
    pub async fn view_contact_field(
        &self,
        Parameters(input): Parameters<FieldIdInput>,
    ) -> Result<String, String> {
        tracing::debug!(field_id = input.field_id, "view_contact_field tool called");

        let field = self
            .client
            .view_contact_field(input.field_id)
            .await
            .map_err(|e| self.failure(&format!("get contact field {}", input.field_id), &e))?;

        to_json(&field)
    }

    /// Create a contact field.
    #[tool(description = "Create a custom contact field. Dropdown types require a non-empty choices list.")]
    pub async fn create_contact_field(
        &self,
        Parameters(input): Parameters<NewField>,
    ) -> Result<String, String> {
        tracing::debug!(label = %input.label, field_type = %input.field_type, "create_contact_field tool called");

        let field = self
            .client
            .create_contact_field(&input)
            .await
            .map_err(|e| self.failure("create contact field", &e))?;

        to_json(&field)
    }

    /// Update a contact field.
    #[tool(description = "Update a contact field. At least one attribute besides field_id is required.")]
    pub async fn update_contact_field(
        &self,
        Parameters(input): Parameters<UpdateFieldInput>,
    ) -> Result<String, String> {
        tracing::debug!(field_id = input.field_id, "update_contact_field tool called");

        let field = self
            .client
            .update_contact_field(input.field_id, &input.changes)
            .await
            .map_err(|e| self.failure(&format!("update contact field {}", input.field_id), &e))?;

        to_json(&field)
    }

    // ========================================================================
    // Contacts
    // ========================================================================

    /// List contacts with filters and pagination.
    #[tool(description = "List contacts. Supports page (min 1), per_page (1-100) and filters email, mobile, phone, company_id, state and updated_since. Returns the contacts and a pagination cursor.")]
    pub async fn list_contacts(
        &self,
        Parameters(input): Parameters<ListContactsInput>,
    ) -> Result<String, String> {
        let input = input.sanitize();
        tracing::debug!(?input, "list_contacts tool called");

        let page = self
            .client
            .list_contacts(&input)
            .await
            .map_err(|e| self.failure("list contacts", &e))?;

        to_json(&page)
    }

    /// Get one contact.
    #[tool(description = "Get a contact by ID.")]
    pub async fn get_contact(
        &self,
        Parameters(input): Parameters<ContactIdInput>,
    ) -> Result<String, String> {
        tracing::debug!(contact_id = input.contact_id, "get_contact tool called");

        let contact = self
            .client
            .get_contact(input.contact_id)
            .await
            .map_err(|e| self.failure(&format!("get contact {}", input.contact_id), &e))?;

        to_json(&contact)
    }

    /// Create a contact.
    #[tool(description = "Create a contact. Name is required, plus at least one of email, phone, mobile, twitter_id or unique_external_id.")]
    pub async fn create_contact(
        &self,
        Parameters(input): Parameters<CreateContactInput>,
    ) -> Result<String, String> {
        let input = input.sanitize();
        tracing::debug!(name = %input.name, "create_contact tool called");

        let contact = self
            .client
            .create_contact(&input)
            .await
            .map_err(|e| self.failure("create contact", &e))?;

        to_json(&contact)
    }

    /// Update a contact.
    #[tool(description = "Update a contact. At least one field besides contact_id is required. tags and other_emails replace the existing lists.")]
    pub async fn update_contact(
        &self,
        Parameters(input): Parameters<UpdateContactInput>,
    ) -> Result<String, String> {
        tracing::debug!(contact_id = input.contact_id, "update_contact tool called");

        let contact = self
            .client
            .update_contact(input.contact_id, &input.changes)
            .await
            .map_err(|e| self.failure(&format!("update contact {}", input.contact_id), &e))?;

        to_json(&contact)
    }

    /// Autocomplete contacts by name or email.
    #[tool(description = "Search contacts by the start of a name or email. Returns id, name, email, phone and mobile of each match.")]
    pub async fn search_contacts(
        &self,
        Parameters(input): Parameters<SearchContactsInput>,
    ) -> Result<String, String> {
        let input = input.sanitize();
        tracing::debug!(term = %input.term, "search_contacts tool called");

        let contacts = self
            .client
            .search_contacts(&input.term)
            .await
            .map_err(|e| self.failure("search contacts", &e))?;

        to_json(&contacts)
    }

    /// Sanitizes an error message to ensure no API key leakage.
    fn sanitize_error(&self, error: &FreshdeskError) -> String {
        error.sanitized_display(self.client.api_key_for_sanitization())
    }

    /// Logs a failed tool call and builds the message returned to the caller.
    fn failure(&self, action: &str, error: &FreshdeskError) -> String {
        let sanitized = self.sanitize_error(error);
        tracing::error!(error = %sanitized, "Failed to {}", action);
        format!("Failed to {}: {}", action, sanitized)
    }

    /// Resolves a resource URI into its content.
    async fn read_article_resource(&self, uri: &str) -> Result<String, McpError> {
        match parse_resource_uri(uri)? {
            ArticleResource::All => {
                let articles = self.client.get_all_articles().await;
                to_json(&articles).map_err(|message| McpError::internal_error(message, None))
            }
            ArticleResource::One(article_id) => {
                let article = self.client.get_article(article_id).await.map_err(|e| {
                    let message = self.failure(&format!("get article {}", article_id), &e);
                    match e.status() {
                        Some(status) if status == reqwest::StatusCode::NOT_FOUND => {
                            McpError::resource_not_found(message, Some(json!({ "uri": uri })))
                        }
                        _ => McpError::internal_error(message, None),
                    }
                })?;
                to_json(&article).map_err(|message| McpError::internal_error(message, None))
            }
        }
    }
}

#[tool_handler]
impl ServerHandler for FreshdeskServer {
    /// Returns server information for the MCP initialize handshake.
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(
            ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
        )
        .with_instructions(
            "Freshdesk MCP provides access to a Freshdesk helpdesk. \
             Tickets: list_tickets, search_tickets, get_ticket, create_ticket, \
             update_ticket, delete_ticket, get_ticket_conversations, \
             create_ticket_reply and create_ticket_note. Contacts: list_contacts, \
             search_contacts, get_contact, create_contact and update_contact. \
             Knowledge base: get_categories, list_folders, list_articles, \
             get_article, search_articles, get_all_articles, create_article and \
             update_article. Custom fields: list/view/create/update for ticket \
             and contact fields. List tools return a pagination cursor; pass \
             next_page back as page to continue. Start with 'ping' to verify \
             connectivity.",
        )
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        let mut articles = RawResource::new(ALL_ARTICLES_URI, "All knowledge base articles");
        articles.description = Some(format!(
            "Every solution article as JSON. Single articles are available at {}{{id}}.",
            ARTICLE_URI_PREFIX
        ));
        articles.mime_type = Some("application/json".to_string());

        Ok(ListResourcesResult {
            meta: None,
            next_cursor: None,
            resources: vec![articles.no_annotation()],
        })
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        tracing::debug!(uri = %request.uri, "read_resource called");

        let text = self.read_article_resource(&request.uri).await?;
        Ok(json_resource(text, request.uri))
    }
}

/// Wraps a JSON document as the contents of a read resource.
fn json_resource(text: String, uri: String) -> ReadResourceResult {
    ReadResourceResult::new(vec![ResourceContents::text(text, uri)])
}

/// The article resources this server can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArticleResource {
    /// Every article, flattened.
    All,
    /// One article by ID.
    One(u64),
}

/// Parses a resource URI without touching the network.
///
/// A non-numeric article ID is `invalid_params`; any other URI is
/// `resource_not_found`.
fn parse_resource_uri(uri: &str) -> Result<ArticleResource, McpError> {
    if uri == ALL_ARTICLES_URI {
        return Ok(ArticleResource::All);
    }

    let Some(segment) = uri.strip_prefix(ARTICLE_URI_PREFIX) else {
        return Err(McpError::resource_not_found(
            format!("unknown resource: {}", uri),
            None,
        ));
    };

    let segment = urlencoding::decode(segment)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| segment.to_string());

    segment
        .trim()
        .parse::<u64>()
        .map(ArticleResource::One)
        .map_err(|_| {
            McpError::invalid_params(
                format!("article ID must be numeric, got {:?}", segment),
                None,
            )
        })
}

/// Serializes a tool result as pretty-printed JSON.
fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| {
        tracing::error!(error = %e, "Failed to serialize tool result");
        format!("Failed to serialize result: {}", e)
    })
}
