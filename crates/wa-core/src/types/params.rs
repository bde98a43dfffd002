//! Typed query parameter families.
//!
//! Each struct covers a group of endpoints that share parameter names. A
//! field that a particular endpoint does not accept is dropped when the
//! request is normalized against that endpoint's allow-list.

use super::query::QueryParams;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Filters for the holdings and accounts endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoldingsQuery {
  /// Return everything except Orion accounts
  pub ignore_orion: Option<bool>,
}

impl HoldingsQuery {
  pub fn ignore_orion(ignore: bool) -> Self {
    Self { ignore_orion: Some(ignore) }
  }
}

impl From<HoldingsQuery> for QueryParams {
  fn from(q: HoldingsQuery) -> Self {
    QueryParams::new().with_opt("ignoreOrion", q.ignore_orion)
  }
}

/// Filters for the transaction endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionQuery {
  pub start_date: Option<NaiveDate>,
  pub end_date: Option<NaiveDate>,
  /// Only transactions after this id (advisor-wide transactions only)
  pub transaction_id: Option<i64>,
  /// Filter out transfers (bank and brokerage transactions only)
  pub hide_transfers: Option<bool>,
  pub ignore_orion: Option<bool>,
}

impl TransactionQuery {
  pub fn between(start_date: NaiveDate, end_date: NaiveDate) -> Self {
    Self { start_date: Some(start_date), end_date: Some(end_date), ..Self::default() }
  }

  pub fn after_transaction(transaction_id: i64) -> Self {
    Self { transaction_id: Some(transaction_id), ..Self::default() }
  }
}

impl From<TransactionQuery> for QueryParams {
  fn from(q: TransactionQuery) -> Self {
    QueryParams::new()
      .with_opt("startDate", q.start_date)
      .with_opt("endDate", q.end_date)
      .with_opt("transactionId", q.transaction_id)
      .with_opt("hideTransfers", q.hide_transfers)
      .with_opt("ignoreOrion", q.ignore_orion)
  }
}

/// Drill-down for diversification holdings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiversificationQuery {
  pub diversification_id: Option<i64>,
  /// Used when a diversification subtype has categories
  pub category_id: Option<i64>,
  pub ignore_orion: Option<bool>,
}

impl From<DiversificationQuery> for QueryParams {
  fn from(q: DiversificationQuery) -> Self {
    QueryParams::new()
      .with_opt("diversificationId", q.diversification_id)
      .with_opt("categoryId", q.category_id)
      .with_opt("ignoreOrion", q.ignore_orion)
  }
}

/// Options for the investor document vault
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentQuery {
  /// Folder to list, by its vault file id
  pub parent_id: Option<i64>,
  pub search_term: Option<String>,
  pub is_preview: Option<bool>,
  pub advisor_id: Option<i64>,
  pub vault_file_id: Option<String>,
}

impl From<DocumentQuery> for QueryParams {
  fn from(q: DocumentQuery) -> Self {
    QueryParams::new()
      .with_opt("parentId", q.parent_id)
      .with_opt("searchTerm", q.search_term)
      .with_opt("IsPreview", q.is_preview)
      .with_opt("AdvisorId", q.advisor_id)
      .with_opt("vaultFileId", q.vault_file_id)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::QueryValue;

  #[test]
  fn test_transaction_query_names() {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
    let mut query = TransactionQuery::between(start, end);
    query.ignore_orion = Some(false);

    let params = QueryParams::from(query);
    assert_eq!(params.len(), 3);
    assert_eq!(params.get("startDate"), Some(&QueryValue::Str("2024-01-01".into())));
    assert_eq!(params.get("endDate"), Some(&QueryValue::Str("2024-01-31".into())));
    assert_eq!(params.get("ignoreOrion"), Some(&QueryValue::Bool(false)));
  }

  #[test]
  fn test_empty_family_is_empty() {
    assert!(QueryParams::from(HoldingsQuery::default()).is_empty());
    assert!(QueryParams::from(DocumentQuery::default()).is_empty());
  }

  #[test]
  fn test_document_query_keeps_server_casing() {
    let params = QueryParams::from(DocumentQuery {
      is_preview: Some(true),
      advisor_id: Some(9),
      ..DocumentQuery::default()
    });
    assert!(params.get("IsPreview").is_some());
    assert!(params.get("AdvisorId").is_some());
  }
}
