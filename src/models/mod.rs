//! Data models for the Freshdesk API.
//!
//! This module contains the records mirrored from the remote API:
//! solution categories, folders and articles, tickets and their
//! conversations, contacts, and custom field definitions.

mod common;
mod contact;
mod conversation;
mod field;
mod solution;
mod ticket;

pub use common::*;
pub use contact::*;
pub use conversation::*;
pub use field::*;
pub use solution::*;
pub use ticket::*;
