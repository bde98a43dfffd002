use super::{EndpointBase, impl_endpoint_base, investor_path};

use crate::client::WealthAccessClient;
use crate::registry::ops;
use reqwest::Response;
use tracing::instrument;
use wa_core::types::{DiversificationQuery, DocumentQuery, HoldingsQuery, TransactionQuery};
use wa_core::{PathParams, QueryParams, Result};

/// Advisor endpoints: the advisor's book of investors, their accounts,
/// holdings, transactions and document vault
pub struct AdvisorEndpoints {
  client: WealthAccessClient,
}

impl AdvisorEndpoints {
  /// Create a new advisor endpoints instance
  pub fn new(client: WealthAccessClient) -> Self {
    Self { client }
  }

  /// List the advisor's investors
  #[instrument(skip(self))]
  pub async fn investors(&self) -> Result<Response> {
    self.send(ops::INVESTORS, PathParams::new(), QueryParams::new()).await
  }

  /// Brokerage transactions for all investors under the advisor, within a
  /// date range or after a transaction id
  ///
  /// # Examples
  ///
  /// ```ignore
  /// # use wa_client::WealthAccessClient;
  /// # use wa_core::types::TransactionQuery;
  /// # let client = WealthAccessClient::from_env()?;
  /// let response = client.advisor().transactions(TransactionQuery::after_transaction(1000)).await?;
  /// println!("{}", response.status());
  /// # Ok::<(), wa_core::Error>(())
  /// ```
  #[instrument(skip(self))]
  pub async fn transactions(&self, query: TransactionQuery) -> Result<Response> {
    self.send(ops::TRANSACTIONS, PathParams::new(), query.into()).await
  }

  /// Possible diversifications for the advisor
  #[instrument(skip(self))]
  pub async fn diversifications(&self) -> Result<Response> {
    self.send(ops::DIVERSIFICATIONS, PathParams::new(), QueryParams::new()).await
  }

  /// Possible classifications for the advisor
  #[instrument(skip(self))]
  pub async fn classifications(&self) -> Result<Response> {
    self.send(ops::CLASSIFICATIONS, PathParams::new(), QueryParams::new()).await
  }

  /// Accounts across the advisor's book
  #[instrument(skip(self))]
  pub async fn accounts(&self, query: HoldingsQuery) -> Result<Response> {
    self.send(ops::ACCOUNTS, PathParams::new(), query.into()).await
  }

  /// Holdings across the advisor's book
  #[instrument(skip(self))]
  pub async fn holdings(&self, query: HoldingsQuery) -> Result<Response> {
    self.send(ops::HOLDINGS, PathParams::new(), query.into()).await
  }

  /// Profile of one investor
  #[instrument(skip(self))]
  pub async fn investor_profile(&self, investor_id: i64) -> Result<Response> {
    self.send(ops::ADVISOR_INVESTOR_PROFILE, investor_path(investor_id), QueryParams::new()).await
  }

  /// List or search an investor's documents
  #[instrument(skip(self))]
  pub async fn investor_documents(&self, investor_id: i64, query: DocumentQuery) -> Result<Response> {
    self.send(ops::ADVISOR_INVESTOR_DOCUMENTS_LIST, investor_path(investor_id), query.into()).await
  }

  /// Download a single file or folder from an investor's vault
  #[instrument(skip(self))]
  pub async fn investor_document_detail(
    &self,
    investor_id: i64,
    vault_file_id: i64,
    query: DocumentQuery,
  ) -> Result<Response> {
    let path = investor_path(investor_id).with("vault_file_id", vault_file_id);
    self.send(ops::ADVISOR_INVESTOR_DOCUMENTS_DETAIL, path, query.into()).await
  }

  /// Upload a document for an investor.
  ///
  /// `request` travels in the query string like every other parameter;
  /// `investorId` is added from `investor_id`.
  #[instrument(skip(self, request))]
  pub async fn post_investor_document(&self, investor_id: i64, request: &str) -> Result<Response> {
    let query = QueryParams::new().with("request", request).with("investorId", investor_id);
    self.send(ops::ADVISOR_INVESTOR_DOCUMENT_POST, investor_path(investor_id), query).await
  }

  /// All transactions for one investor
  #[instrument(skip(self))]
  pub async fn investor_transactions(&self, investor_id: i64, query: TransactionQuery) -> Result<Response> {
    self.send(ops::ADVISOR_INVESTOR_TRANSACTIONS, investor_path(investor_id), query.into()).await
  }

  /// Bank transactions for one investor
  #[instrument(skip(self))]
  pub async fn investor_bank_transactions(
    &self,
    investor_id: i64,
    query: TransactionQuery,
  ) -> Result<Response> {
    self.send(ops::ADVISOR_INVESTOR_BANK_TRANSACTIONS, investor_path(investor_id), query.into()).await
  }

  /// Brokerage transactions for one investor
  #[instrument(skip(self))]
  pub async fn investor_brokerage_transactions(
    &self,
    investor_id: i64,
    query: TransactionQuery,
  ) -> Result<Response> {
    self
      .send(ops::ADVISOR_INVESTOR_BROKERAGE_TRANSACTIONS, investor_path(investor_id), query.into())
      .await
  }

  /// Holdings for one investor
  #[instrument(skip(self))]
  pub async fn investor_holdings(&self, investor_id: i64, query: HoldingsQuery) -> Result<Response> {
    self.send(ops::ADVISOR_INVESTOR_HOLDINGS, investor_path(investor_id), query.into()).await
  }

  /// Holdings for one investor grouped by a diversification
  #[instrument(skip(self))]
  pub async fn investor_diversification_holdings(
    &self,
    investor_id: i64,
    query: DiversificationQuery,
  ) -> Result<Response> {
    self
      .send(ops::ADVISOR_INVESTOR_DIVERSIFICATION_HOLDINGS, investor_path(investor_id), query.into())
      .await
  }
}

impl_endpoint_base!(AdvisorEndpoints);
