/* src/loader/core/rust/src/error.rs */

/// Error produced by a fetch capability, kept opaque so any transport can plug in.
pub type FetchError = Box<dyn std::error::Error + Send + Sync>;

/// Failure of a single page load. Both kinds propagate to the host unchanged;
/// the loader never retries or recovers.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
  /// The request never produced a response (connection refused, DNS, timeout).
  #[error("failed to fetch page data from {url}")]
  Transport {
    url: String,
    #[source]
    source: FetchError,
  },
  /// The response body was not valid JSON, or did not match the requested type.
  #[error("failed to decode page data from {url}")]
  Decode {
    url: String,
    #[source]
    source: FetchError,
  },
}

impl LoadError {
  pub fn url(&self) -> &str {
    match self {
      Self::Transport { url, .. } | Self::Decode { url, .. } => url,
    }
  }

  pub fn is_transport(&self) -> bool {
    matches!(self, Self::Transport { .. })
  }

  pub fn is_decode(&self) -> bool {
    matches!(self, Self::Decode { .. })
  }
}
