/* src/loader/core/rust/src/fetch.rs */

use std::future::Future;
use std::pin::Pin;

use crate::error::FetchError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Pending result of a `Fetch::fetch` call.
pub type FetchFuture<'a> = BoxFuture<'a, Result<Box<dyn FetchResponse>, FetchError>>;

/// Capability to issue a plain GET and hand back the response.
/// Hosts inject this into every page load.
pub trait Fetch: Send + Sync {
  fn fetch<'a>(&'a self, url: &'a str) -> FetchFuture<'a>;
}

/// Response of a fetch, decoded at most once.
pub trait FetchResponse: Send {
  fn status(&self) -> u16;

  /// Consume the response and decode its body as JSON.
  fn json(self: Box<Self>) -> BoxFuture<'static, Result<serde_json::Value, FetchError>>;
}

/// Closures taking the owned URL act as fetch capabilities, which keeps mocks short.
impl<F> Fetch for F
where
  F: Fn(String) -> FetchFuture<'static> + Send + Sync,
{
  fn fetch<'a>(&'a self, url: &'a str) -> FetchFuture<'a> {
    self(url.to_string())
  }
}

/// Fetch capability backed by a shared `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct HttpFetch {
  client: reqwest::Client,
}

impl HttpFetch {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_client(client: reqwest::Client) -> Self {
    Self { client }
  }
}

impl Fetch for HttpFetch {
  fn fetch<'a>(&'a self, url: &'a str) -> FetchFuture<'a> {
    Box::pin(async move {
      let response = self.client.get(url).send().await?;
      Ok::<_, FetchError>(Box::new(HttpResponse(response)) as Box<dyn FetchResponse>)
    })
  }
}

struct HttpResponse(reqwest::Response);

impl FetchResponse for HttpResponse {
  fn status(&self) -> u16 {
    self.0.status().as_u16()
  }

  fn json(self: Box<Self>) -> BoxFuture<'static, Result<serde_json::Value, FetchError>> {
    Box::pin(async move { Ok::<_, FetchError>(self.0.json::<serde_json::Value>().await?) })
  }
}

/// Response whose body is already in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferedResponse {
  status: u16,
  body: Vec<u8>,
}

impl BufferedResponse {
  pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
    Self { status, body: body.into() }
  }

  pub fn from_value(status: u16, value: &serde_json::Value) -> Self {
    Self { status, body: value.to_string().into_bytes() }
  }

  pub fn body(&self) -> &[u8] {
    &self.body
  }
}

impl FetchResponse for BufferedResponse {
  fn status(&self) -> u16 {
    self.status
  }

  fn json(self: Box<Self>) -> BoxFuture<'static, Result<serde_json::Value, FetchError>> {
    Box::pin(async move { Ok::<serde_json::Value, FetchError>(serde_json::from_slice(&self.body)?) })
  }
}
