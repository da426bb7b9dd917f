/* src/loader/core/rust/src/lib.rs */

pub mod config;
pub mod data;
pub mod error;
pub mod fetch;
pub mod loader;

pub use config::{DEFAULT_ENDPOINT, ENDPOINT_ENV, LoaderConfig};
pub use data::IndexData;
pub use error::{FetchError, LoadError};
pub use fetch::{BoxFuture, BufferedResponse, Fetch, FetchFuture, FetchResponse, HttpFetch};
pub use loader::{LoadEvent, PageDataLoader};

/// Run a single page load against `config` using `fetch`.
/// Shorthand for building a `PageDataLoader` and calling `load` once.
pub async fn load(fetch: &dyn Fetch, config: &LoaderConfig) -> Result<serde_json::Value, LoadError> {
  PageDataLoader::new(config).load(&LoadEvent::new(fetch)).await
}
