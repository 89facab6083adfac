//! Gateway operations, one per remote capability.
//!
//! Each submodule adds methods to [`FreshdeskClient`] for one resource
//! family. Operations check their arguments locally where the remote API
//! would otherwise reject them, delegate to the transport, and decode the
//! response.

mod contacts;
mod fields;
mod solutions;
mod tickets;

use reqwest::header::LINK;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::client::{decode_json, FreshdeskClient, RequestDescriptor};
use crate::error::FreshdeskError;
use crate::pagination::{clamp_page, clamp_per_page, parse_link_header, Page};

impl FreshdeskClient {
    /// Fetches one page of a listing and rebuilds its cursor from the
    /// `Link` header.
    pub(crate) async fn fetch_page<T>(
        &self,
        request: RequestDescriptor,
        page: Option<i64>,
        per_page: Option<i64>,
    ) -> Result<Page<T>, FreshdeskError>
    where
        T: DeserializeOwned,
    {
        let page = clamp_page(page);
        let per_page = clamp_per_page(per_page);
        let request = request
            .with_query("page", page)
            .with_query("per_page", per_page);

        let response = self.send_checked(request).await?;
        let link = response
            .headers()
            .get(LINK)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        let pagination = parse_link_header(link, page, per_page);
        let items = decode_json(response).await?;

        Ok(Page { items, pagination })
    }
}

/// Serializes a change set and rejects it when nothing would change.
pub(crate) fn change_set<T>(changes: &T, what: &str) -> Result<Value, FreshdeskError>
where
    T: Serialize,
{
    let body = serde_json::to_value(changes)?;
    let is_empty = match &body {
        Value::Object(map) => map.is_empty(),
        Value::Null => true,
        _ => false,
    };
    if is_empty {
        return Err(FreshdeskError::validation(format!(
            "no fields to update were provided for the {}",
            what
        )));
    }
    Ok(body)
}
