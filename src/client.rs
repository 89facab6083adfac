//! HTTP transport for the Freshdesk REST API.
//!
//! This module provides `FreshdeskClient`, which performs one
//! authenticated request per call, and `RequestDescriptor`, which
//! describes that request. The gateway operations in [`crate::api`] are
//! implemented on top of it.
//!
//! Calls are at-most-once: there are no retries and no timeout beyond the
//! HTTP client's default.
//!
//! # Security
//!
//! The API key is never logged. Error bodies are sanitized before they are
//! turned into errors.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::{Config, API_KEY_ENV, DOMAIN_ENV};
use crate::error::FreshdeskError;

/// Password sent with the API key; Freshdesk ignores its value.
const BASIC_AUTH_PASSWORD: &str = "X";

/// One outbound call: method, path relative to the API root, query
/// parameters, extra headers and an optional JSON body.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    /// HTTP method.
    pub method: Method,
    /// Path below `/api/v2`, starting with `/`.
    pub path: String,
    /// Query parameters in sending order.
    pub query: Vec<(String, String)>,
    /// Extra headers. `Authorization` and `Content-Type` are always
    /// overridden by the client.
    pub headers: HeaderMap,
    /// JSON body.
    pub body: Option<Value>,
}

impl RequestDescriptor {
    /// Creates a descriptor with no query, headers or body.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// A `GET` request.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// A `POST` request.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// A `PUT` request.
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// A `DELETE` request.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Appends a query parameter.
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Appends a query parameter only when a value is present.
    #[must_use]
    pub fn with_optional_query<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with_query(key, value),
            None => self,
        }
    }

    /// Sets the JSON body.
    #[must_use]
    pub fn with_json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Adds an extra header.
    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// HTTP client for the Freshdesk API.
///
/// Holds the credential and API root, both read-only after construction,
/// so clones can be used concurrently.
///
/// # Example
///
/// ```ignore
/// let config = Config::from_env()?;
/// let client = FreshdeskClient::new(&config)?;
///
/// let categories = client.get_categories().await;
/// ```
#[derive(Clone)]
pub struct FreshdeskClient {
    /// The underlying HTTP client (cloning is cheap).
    http: Client,

    /// API root, e.g. `https://acme.freshdesk.com/api/v2`.
    base_url: String,

    /// API key for authentication.
    /// SECURITY: Never log this value!
    api_key: String,
}

impl FreshdeskClient {
    /// Creates a new client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `FreshdeskError::HttpClient` if the HTTP client fails to initialize.
    pub fn new(config: &Config) -> Result<Self, FreshdeskError> {
        let http = Client::builder()
            .build()
            .map_err(FreshdeskError::HttpClient)?;

        Ok(Self {
            http,
            base_url: config.api_base_url(),
            api_key: config.api_key.clone(),
        })
    }

    /// Returns the API root all paths are resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns a reference to the API key for sanitization purposes.
    ///
    /// This should ONLY be used for sanitizing error messages, never for logging.
    pub(crate) fn api_key_for_sanitization(&self) -> &str {
        &self.api_key
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Tests connectivity and authentication by listing a single ticket.
    ///
    /// # Errors
    ///
    /// Returns `FreshdeskError::Config` when the key is rejected, or the
    /// underlying error otherwise.
    pub async fn test_connection(&self) -> Result<(), FreshdeskError> {
        tracing::debug!("Testing connection to Freshdesk");

        let request = RequestDescriptor::get("/tickets").with_query("per_page", 1);
        match self.send_checked(request).await {
            Ok(_) => {
                tracing::info!("Connection test successful");
                Ok(())
            }
            Err(FreshdeskError::Api { status, .. })
                if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN =>
            {
                Err(FreshdeskError::invalid_config(format!(
                    "authentication failed ({}) - verify {} is correct",
                    status, API_KEY_ENV
                )))
            }
            Err(FreshdeskError::Http(e)) => Err(FreshdeskError::invalid_config(format!(
                "{} - verify {} is correct",
                FreshdeskError::sanitize_message(&e.to_string(), &self.api_key),
                DOMAIN_ENV
            ))),
            Err(e) => Err(e),
        }
    }

    /// Performs the request and returns the response without looking at
    /// its status.
    ///
    /// Caller headers are applied first; a caller `Authorization` header is
    /// dropped and `Content-Type` is always `application/json`.
    ///
    /// # Errors
    ///
    /// Returns `FreshdeskError::Http` if the request could not be sent.
    pub async fn send_raw(&self, request: RequestDescriptor) -> Result<Response, FreshdeskError> {
        let RequestDescriptor {
            method,
            path,
            query,
            mut headers,
            body,
        } = request;

        tracing::debug!(method = %method, path = %path, "Making Freshdesk API request");

        headers.remove(AUTHORIZATION);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut req = self
            .http
            .request(method, self.url_for(&path))
            .headers(headers)
            .basic_auth(&self.api_key, Some(BASIC_AUTH_PASSWORD));

        if !query.is_empty() {
            req = req.query(&query);
        }
        if let Some(body) = body {
            req = req.json(&body);
        }

        req.send().await.map_err(FreshdeskError::Http)
    }

    /// Performs the request and turns a non-success status into
    /// `FreshdeskError::Api`.
    ///
    /// The response is returned unread so callers can inspect headers.
    pub async fn send_checked(
        &self,
        request: RequestDescriptor,
    ) -> Result<Response, FreshdeskError> {
        let response = self.send_raw(request).await?;
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(self.error_from_response(response).await)
        }
    }

    /// Performs the request and decodes the JSON body.
    ///
    /// A success response with an empty body decodes as `{}`.
    pub async fn send_json<T>(&self, request: RequestDescriptor) -> Result<T, FreshdeskError>
    where
        T: DeserializeOwned,
    {
        let response = self.send_checked(request).await?;
        decode_json(response).await
    }

    /// Performs a request whose success carries no body of interest.
    pub async fn send_no_content(&self, request: RequestDescriptor) -> Result<(), FreshdeskError> {
        let response = self.send_checked(request).await?;
        tracing::trace!(status = %response.status(), "Request completed without content");
        Ok(())
    }

    /// Converts a non-success response into an error with a readable message.
    async fn error_from_response(&self, response: Response) -> FreshdeskError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let body = FreshdeskError::sanitize_message(&body, &self.api_key);
        FreshdeskError::from_response(status, &body)
    }
}

/// Decodes a response body as JSON, treating an empty body as `{}`.
pub(crate) async fn decode_json<T>(response: Response) -> Result<T, FreshdeskError>
where
    T: DeserializeOwned,
{
    let body = response.text().await.map_err(FreshdeskError::Http)?;
    tracing::trace!(body = %body, "Freshdesk API response");
    parse_body(&body)
}

fn parse_body<T>(body: &str) -> Result<T, FreshdeskError>
where
    T: DeserializeOwned,
{
    let body = if body.trim().is_empty() { "{}" } else { body };
    serde_json::from_str(body).map_err(FreshdeskError::Serialization)
}
