/* src/loader/core/rust/src/config.rs */

/// Backend used when no public endpoint is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:1323";

/// Public runtime variable naming the backend base URL.
pub const ENDPOINT_ENV: &str = "PUBLIC_API_ENDPOINT";

/// Runtime configuration handed to a `PageDataLoader` at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoaderConfig {
  /// Backend base URL. `None` or an empty string falls back to `DEFAULT_ENDPOINT`.
  pub public_api_endpoint: Option<String>,
}

impl LoaderConfig {
  pub fn new(endpoint: impl Into<String>) -> Self {
    Self { public_api_endpoint: Some(endpoint.into()) }
  }

  /// Read `PUBLIC_API_ENDPOINT` from the process environment.
  pub fn from_env() -> Self {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Populate from an arbitrary key lookup, e.g. a host-provided env map.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
    Self { public_api_endpoint: lookup(ENDPOINT_ENV) }
  }

  /// Configured endpoint if non-empty, else `DEFAULT_ENDPOINT`.
  /// Whitespace-only values are not trimmed and are returned as-is.
  pub fn resolve_endpoint(&self) -> &str {
    match self.public_api_endpoint.as_deref() {
      Some(endpoint) if !endpoint.is_empty() => endpoint,
      _ => DEFAULT_ENDPOINT,
    }
  }
}
