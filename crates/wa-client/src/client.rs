/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

use crate::endpoints::{advisor::AdvisorEndpoints, firm::FirmEndpoints, investor::InvestorEndpoints};
use crate::registry;
use crate::signing::{self, SignedRequest};
use crate::transport::Transport;
use reqwest::Response;
use std::sync::Arc;
use tracing::{debug, instrument};
use wa_core::{Config, CredentialOverrides, PathParams, QueryParams, Result};

/// Main Wealth Access API client
///
/// Signs every request with the WAS scheme and returns the raw HTTP
/// response. Cloning is cheap; clones share the HTTP client and the
/// configured credentials.
///
/// # Examples
///
/// ```ignore
/// use wa_client::WealthAccessClient;
/// use wa_core::{Config, types::HoldingsQuery};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = Config::from_env()?;
///     let client = WealthAccessClient::new(config)?;
///
///     let response = client.advisor().accounts(HoldingsQuery::ignore_orion(true)).await?;
///     println!("{}", response.text().await?);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct WealthAccessClient {
  transport: Arc<Transport>,
  defaults: Arc<CredentialOverrides>,
}

impl WealthAccessClient {
  /// Create a new Wealth Access API client
  ///
  /// # Arguments
  ///
  /// * `config` - Base URL, optional timeout and default credentials
  ///
  /// # Errors
  ///
  /// Returns an error if the HTTP client cannot be created. Missing
  /// credentials are only reported when a request is made, since each call
  /// may supply its own.
  pub fn new(config: Config) -> Result<Self> {
    let transport = Arc::new(Transport::new(&config)?);
    Ok(Self { transport, defaults: Arc::new(config.credentials) })
  }

  /// Create a client from `WA_*` environment variables
  pub fn from_env() -> Result<Self> {
    Self::new(Config::from_env()?)
  }

  /// Get access to advisor endpoints
  pub fn advisor(&self) -> AdvisorEndpoints {
    AdvisorEndpoints::new(self.clone())
  }

  /// Get access to investor (end-user) endpoints
  pub fn investor(&self) -> InvestorEndpoints {
    InvestorEndpoints::new(self.clone())
  }

  /// Get access to firm endpoints
  pub fn firm(&self) -> FirmEndpoints {
    FirmEndpoints::new(self.clone())
  }

  /// Call any registered operation with the configured credentials
  ///
  /// # Examples
  ///
  /// ```ignore
  /// # use wa_client::WealthAccessClient;
  /// # use wa_core::{PathParams, QueryParams};
  /// # let client = WealthAccessClient::from_env()?;
  /// let response = client
  ///   .call(
  ///     "AdvisorInvestorHoldings",
  ///     &PathParams::new().with("investor_id", 42),
  ///     QueryParams::new().with("ignoreOrion", true),
  ///   )
  ///   .await?;
  /// # Ok::<(), wa_core::Error>(())
  /// ```
  pub async fn call(&self, key: &str, path: &PathParams, query: QueryParams) -> Result<Response> {
    self.call_with(key, path, query, &CredentialOverrides::default()).await
  }

  /// Call any registered operation, overriding some or all credentials for
  /// this request only
  #[instrument(skip(self, path, query, overrides))]
  pub async fn call_with(
    &self,
    key: &str,
    path: &PathParams,
    query: QueryParams,
    overrides: &CredentialOverrides,
  ) -> Result<Response> {
    let request = self.prepare(key, path, &query, overrides, None)?;
    self.transport.execute(&request).await
  }

  /// Build and sign a request without sending it.
  ///
  /// `timestamp` defaults to the current time. Fails before any network
  /// activity on an unknown operation, missing credentials or an unfilled
  /// path placeholder, in that order.
  pub fn prepare(
    &self,
    key: &str,
    path: &PathParams,
    query: &QueryParams,
    overrides: &CredentialOverrides,
    timestamp: Option<&str>,
  ) -> Result<SignedRequest> {
    let spec = registry::lookup(key)?;
    let credentials = overrides.resolve(&self.defaults)?;

    let timestamp = match timestamp {
      Some(ts) => ts.to_string(),
      None => signing::current_timestamp(),
    };

    let request = SignedRequest::prepare(spec, path, query, &credentials, &timestamp)?;
    debug!(uri = %request.uri, query = %request.query, "Signed {} request", request.method);
    Ok(request)
  }

  /// The underlying transport
  pub fn transport(&self) -> &Transport {
    &self.transport
  }
}

impl std::fmt::Debug for WealthAccessClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("WealthAccessClient")
      .field("transport", &self.transport)
      .field("defaults", &self.defaults)
      .finish()
  }
}
