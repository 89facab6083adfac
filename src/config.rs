//! Configuration management for the Freshdesk MCP server.
//!
//! This module handles loading the API credential from environment
//! variables, with validation to ensure all required values are present.

use std::env;
use std::fmt;

use url::Url;

use crate::error::FreshdeskError;

/// Environment variable holding the Freshdesk API key.
pub const API_KEY_ENV: &str = "FRESHDESK_API_KEY";

/// Environment variable holding the Freshdesk domain.
pub const DOMAIN_ENV: &str = "FRESHDESK_DOMAIN";

/// Credential and endpoint configuration for a Freshdesk account.
///
/// Constructed once at startup and never mutated afterwards. The API key
/// is stored but never logged or exposed in error messages; the `Debug`
/// implementation redacts it.
#[derive(Clone)]
pub struct Config {
    /// Helpdesk domain, either a bare host (`acme.freshdesk.com`) or a URL
    /// with scheme (`https://acme.freshdesk.com`).
    pub domain: String,

    /// API key used as the Basic-auth user name.
    /// This value must never be logged or included in error messages.
    pub api_key: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("domain", &self.domain)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl Config {
    /// Creates a configuration from explicit values.
    ///
    /// The domain is normalized (trimmed, trailing slashes removed); no
    /// placeholder check is applied to the key.
    pub fn new(domain: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            domain: Self::normalize_domain(&domain.into()),
            api_key: api_key.into(),
        }
    }

    /// Loads configuration from environment variables.
    ///
    /// # Required Environment Variables
    ///
    /// - `FRESHDESK_API_KEY`: The API key of an agent
    /// - `FRESHDESK_DOMAIN`: The helpdesk domain, e.g. `acme.freshdesk.com`
    ///
    /// # Errors
    ///
    /// Returns `FreshdeskError::Config` if any required variable is missing
    /// or if values fail validation.
    pub fn from_env() -> Result<Self, FreshdeskError> {
        let api_key = Self::get_required_env(API_KEY_ENV)?;
        let domain = Self::get_required_env(DOMAIN_ENV)?;

        Self::validate_api_key(&api_key)?;
        let domain = Self::validate_domain(&domain)?;

        Ok(Config { domain, api_key })
    }

    /// Returns the API root, e.g. `https://acme.freshdesk.com/api/v2`.
    pub fn api_base_url(&self) -> String {
        let domain = self.domain.trim_end_matches('/');
        let with_scheme = if domain.starts_with("http://") || domain.starts_with("https://") {
            domain.to_string()
        } else {
            format!("https://{}", domain)
        };

        if with_scheme.ends_with("/api/v2") {
            with_scheme
        } else {
            format!("{}/api/v2", with_scheme)
        }
    }

    /// Gets a required environment variable, returning an error if missing or empty.
    fn get_required_env(name: &str) -> Result<String, FreshdeskError> {
        env::var(name)
            .map_err(|_| FreshdeskError::missing_env(name))
            .and_then(|value| {
                if value.trim().is_empty() {
                    Err(FreshdeskError::missing_env(name))
                } else {
                    Ok(value)
                }
            })
    }

    fn normalize_domain(domain: &str) -> String {
        domain.trim().trim_end_matches('/').to_string()
    }

    /// Normalizes the domain and rejects values that cannot form a URL.
    fn validate_domain(domain: &str) -> Result<String, FreshdeskError> {
        let invalid = || {
            FreshdeskError::invalid_config(format!(
                "{} must be a host name such as acme.freshdesk.com",
                DOMAIN_ENV
            ))
        };

        // Scheme first, then trailing slashes.
        let trimmed = domain.trim();
        let rest = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"))
            .unwrap_or(trimmed)
            .trim_end_matches('/');

        if rest.is_empty() || rest.contains(char::is_whitespace) {
            return Err(invalid());
        }

        let parsed = Url::parse(&format!("https://{}", rest)).map_err(|_| invalid())?;
        match parsed.host_str() {
            Some(host) if !host.is_empty() => Ok(Self::normalize_domain(trimmed)),
            _ => Err(invalid()),
        }
    }

    /// Validates the API key is not a placeholder value.
    fn validate_api_key(key: &str) -> Result<(), FreshdeskError> {
        let key_lower = key.to_lowercase();
        let placeholder_patterns = [
            "your_api_key",
            "your_key",
            "placeholder",
            "xxx",
            "changeme",
        ];

        for pattern in placeholder_patterns {
            if key_lower.contains(pattern) {
                return Err(FreshdeskError::invalid_config(format!(
                    "{} appears to be a placeholder value",
                    API_KEY_ENV
                )));
            }
        }

        Ok(())
    }
}
