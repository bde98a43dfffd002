use super::{EndpointBase, impl_endpoint_base};

use crate::client::WealthAccessClient;
use crate::registry::ops;
use reqwest::Response;
use tracing::instrument;
use wa_core::types::TransactionQuery;
use wa_core::{PathParams, QueryParams, Result};

/// Investor endpoints, addressed by the source system's client identifier
pub struct InvestorEndpoints {
  client: WealthAccessClient,
}

impl InvestorEndpoints {
  /// Create a new investor endpoints instance
  pub fn new(client: WealthAccessClient) -> Self {
    Self { client }
  }

  /// Transactions for one account of one user
  ///
  /// # Arguments
  ///
  /// * `client_identifier` - Source system client identifier for the end user
  /// * `account_number` - Unique identifier for the account
  /// * `query` - Optional date range; other fields are not accepted here
  #[instrument(skip(self))]
  pub async fn account_transactions(
    &self,
    client_identifier: &str,
    account_number: &str,
    query: TransactionQuery,
  ) -> Result<Response> {
    let mut params = QueryParams::from(query);
    params.insert("clientIdentifier", client_identifier).insert("accountNumber", account_number);
    self.send(ops::INVESTOR_ACCOUNT_TRANSACTIONS, PathParams::new(), params).await
  }

  /// Accounts for one user
  #[instrument(skip(self))]
  pub async fn accounts(&self, client_identifier: &str) -> Result<Response> {
    let params = QueryParams::new().with("clientIdentifier", client_identifier);
    self.send(ops::INVESTOR_ACCOUNTS, PathParams::new(), params).await
  }

  /// Profile of one user
  #[instrument(skip(self))]
  pub async fn profile(&self, client_identifier: &str) -> Result<Response> {
    let params = QueryParams::new().with("clientIdentifier", client_identifier);
    self.send(ops::INVESTOR_PROFILE, PathParams::new(), params).await
  }
}

impl_endpoint_base!(InvestorEndpoints);
