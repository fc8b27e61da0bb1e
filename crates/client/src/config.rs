//! Client configuration.

use std::env;

/// Environment variable holding the inventory service base URL.
pub const API_URL_ENV: &str = "ARMORY_API_URL";

/// Fallback base URL when [`API_URL_ENV`] is unset. Deployments should set
/// the variable explicitly (full URL including port) rather than rely on
/// this.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Base URL of the inventory service.
///
/// Resolved once at process start and injected into the client at
/// construction; it never changes during the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    /// Configuration from an explicit base URL. Trailing slashes are
    /// stripped so path concatenation stays uniform.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Configuration from the environment, falling back to
    /// [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        Self::resolve(env::var(API_URL_ENV).ok())
    }

    fn resolve(value: Option<String>) -> Self {
        match value {
            Some(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::new(DEFAULT_BASE_URL),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
