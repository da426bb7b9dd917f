/* src/loader/core/rust/src/loader/mod.rs */


use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::LoaderConfig;
use crate::error::LoadError;
use crate::fetch::Fetch;

/// What the host hands to a page-load hook on each navigation.
pub struct LoadEvent<'a> {
  pub fetch: &'a dyn Fetch,
}

impl<'a> LoadEvent<'a> {
  pub fn new(fetch: &'a dyn Fetch) -> Self {
    Self { fetch }
  }
}

/// Page-load hook producing a page's initial render data from the backend.
///
/// The endpoint is resolved once from `LoaderConfig` at construction. Every
/// `load` issues exactly one GET to it and returns the decoded body unchanged.
/// Status codes are not inspected: a 404 or 500 whose body parses as JSON is
/// returned as data.
#[derive(Debug, Clone)]
pub struct PageDataLoader {
  endpoint: String,
}

impl PageDataLoader {
  pub fn new(config: &LoaderConfig) -> Self {
    Self { endpoint: config.resolve_endpoint().to_string() }
  }

  pub fn from_env() -> Self {
    Self::new(&LoaderConfig::from_env())
  }

  pub fn endpoint(&self) -> &str {
    &self.endpoint
  }

  pub async fn load(&self, event: &LoadEvent<'_>) -> Result<serde_json::Value, LoadError> {
    debug!(endpoint = %self.endpoint, "fetching page data");
    let response = event
      .fetch
      .fetch(&self.endpoint)
      .await
      .map_err(|source| LoadError::Transport { url: self.endpoint.clone(), source })?;

    debug!(endpoint = %self.endpoint, status = response.status(), "decoding page data");
    response.json().await.map_err(|source| LoadError::Decode { url: self.endpoint.clone(), source })
  }

  /// Like `load`, then deserialize the value into `T`.
  /// A shape mismatch is reported as a decode failure.
  pub async fn load_as<T: DeserializeOwned>(&self, event: &LoadEvent<'_>) -> Result<T, LoadError> {
    let value = self.load(event).await?;
    serde_json::from_value(value)
      .map_err(|e| LoadError::Decode { url: self.endpoint.clone(), source: Box::new(e) })
  }
}

impl Default for PageDataLoader {
  fn default() -> Self {
    Self::new(&LoaderConfig::default())
  }
}
