//! # Freshdesk MCP
//!
//! An MCP (Model Context Protocol) server for the Freshdesk helpdesk.
//!
//! It exposes the Freshdesk v2 REST API as MCP tools and resources, so an
//! assistant can work with tickets, contacts, knowledge base articles and
//! custom field definitions.
//!
//! ## Features
//!
//! - **Tickets**: create, read, update, delete, list with filters, search,
//!   conversations, replies and notes
//! - **Contacts**: list, read, create, update and autocomplete
//! - **Knowledge base**: categories, folders, articles, search, and a walk
//!   over the whole hierarchy that tolerates failing branches
//! - **Custom fields**: list, view, create and update ticket and contact fields
//! - **Pagination**: cursors rebuilt from the `Link` response header
//! - **Security**: API keys are never logged or exposed in error messages
//!
//! ## Architecture
//!
//! - [`config`] - Configuration loading from environment variables
//! - [`error`] - Error types and decoding of Freshdesk error bodies
//! - [`client`] - Authenticated HTTP transport
//! - [`api`] - One gateway operation per remote capability
//! - [`pagination`] - `Link` header decoding and page clamping
//! - [`models`] - Records mirrored from the Freshdesk API
//! - [`tools`] - Tool input parameter structs and their local checks
//! - [`server`] - MCP server implementation with tool routing and resources
//!
//! ## Configuration
//!
//! - `FRESHDESK_DOMAIN`: Helpdesk domain, e.g. `acme.freshdesk.com`
//! - `FRESHDESK_API_KEY`: API key of an agent
//!
//! Optional:
//! - `RUST_LOG`: Log level (e.g., `freshdesk_mcp=debug`)
//!
//! ## Example
//!
//! ```ignore
//! use freshdesk_mcp::client::FreshdeskClient;
//! use freshdesk_mcp::config::Config;
//! use freshdesk_mcp::tools::ListTicketsInput;
//!
//! async fn example() -> Result<(), freshdesk_mcp::error::FreshdeskError> {
//!     let config = Config::from_env()?;
//!     let client = FreshdeskClient::new(&config)?;
//!
//!     let filters = ListTicketsInput {
//!         status: Some(2),
//!         ..Default::default()
//!     };
//!     let page = client.list_tickets(&filters).await?;
//!     for ticket in &page.items {
//!         println!("#{}: {:?}", ticket.id, ticket.subject);
//!     }
//!     if let Some(next) = page.pagination.next_page {
//!         println!("more on page {}", next);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod pagination;
pub mod server;
pub mod tools;
