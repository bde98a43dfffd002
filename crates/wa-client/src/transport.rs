//! HTTP transport layer for Wealth Access API requests

use crate::signing::SignedRequest;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::{debug, error, instrument};
use url::Url;
use wa_core::{Config, Error, Method, Result};

/// HTTP transport layer for making requests to the Wealth Access API
#[derive(Debug)]
pub struct Transport {
  client: Client,
  base_url: String,
  timeout: Option<Duration>,
}

impl Transport {
  /// Create a new transport instance
  pub fn new(config: &Config) -> Result<Self> {
    let timeout = config.timeout_secs.map(Duration::from_secs);

    let mut builder = Client::builder().user_agent(config.user_agent.as_str());
    if let Some(timeout) = timeout {
      builder = builder.timeout(timeout);
    }
    let client = builder.build().map_err(|e| Error::Transport(Box::new(e)))?;

    Ok(Self { client, base_url: config.base_url.clone(), timeout })
  }

  /// Create a mock transport for testing
  #[cfg(test)]
  pub fn new_mock() -> Self {
    Self { client: Client::new(), base_url: "https://mock.wealthaccess.com".to_string(), timeout: None }
  }

  /// Send a signed request and hand back the response untouched.
  ///
  /// Non-2xx statuses are not errors here; the caller gets status, headers
  /// and body exactly as received. Parameters always travel in the query
  /// string, POST included.
  ///
  /// # Errors
  ///
  /// Returns [`Error::Transport`] if the request could not be sent or no
  /// response was received.
  #[instrument(skip(self, request), fields(method = %request.method, uri = %request.uri))]
  pub async fn execute(&self, request: &SignedRequest) -> Result<Response> {
    let url = self.build_url(request)?;
    let headers = Self::header_map(request)?;
    debug!("Making request to: {}", url);

    let response = self
      .client
      .request(Self::http_method(request.method), url)
      .headers(headers)
      .send()
      .await
      .map_err(|e| {
        error!("Request failed: {}", e);
        Error::Transport(Box::new(e))
      })?;

    debug!("Response status: {}", response.status());
    #[cfg(feature = "debug-logging")]
    debug!(headers = ?response.headers(), "Response headers");

    Ok(response)
  }

  /// Build the full URL: base URL, resolved path, canonical query string
  pub fn build_url(&self, request: &SignedRequest) -> Result<Url> {
    let mut url = Url::parse(&format!("{}{}", self.base_url, request.uri))?;
    if !request.query.is_empty() {
      // Already form-urlencoded by canonicalize; set_query leaves it as is
      url.set_query(Some(&request.query));
    }
    Ok(url)
  }

  fn header_map(request: &SignedRequest) -> Result<HeaderMap> {
    let mut headers = HeaderMap::with_capacity(3);
    for (name, value) in request.headers.pairs() {
      let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| Error::InvalidHeader(name))?;
      let header_value = HeaderValue::from_str(value).map_err(|_| Error::InvalidHeader(name))?;
      headers.insert(header_name, header_value);
    }
    Ok(headers)
  }

  fn http_method(method: Method) -> reqwest::Method {
    match method {
      Method::Get => reqwest::Method::GET,
      Method::Post => reqwest::Method::POST,
    }
  }

  /// Get the base URL being used
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Get request timeout duration, if one was configured
  pub fn timeout(&self) -> Option<Duration> {
    self.timeout
  }
}
