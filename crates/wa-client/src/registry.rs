//! Endpoint registry
//!
//! One static table describing every Wealth Access operation: HTTP method,
//! URI template, path placeholders and the query parameters the endpoint
//! accepts. Adding an endpoint means adding one entry here.

use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;
use wa_core::{Error, Method, Result, Surface};

/// Metadata for a single operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointSpec {
  /// Operation key, e.g. `AdvisorInvestorHoldings`
  pub key: &'static str,
  /// API surface the endpoint belongs to
  pub surface: Surface,
  /// HTTP method
  pub method: Method,
  /// URI with `{name}` placeholders
  pub uri_template: &'static str,
  /// Placeholder names appearing in `uri_template`
  pub path_params: &'static [&'static str],
  /// Query parameter names the endpoint accepts
  pub allowed_params: &'static [&'static str],
}

impl EndpointSpec {
  /// Whether `param` is on the allow-list
  pub fn allows(&self, param: &str) -> bool {
    self.allowed_params.contains(&param)
  }
}

/// Operation keys, so call sites don't repeat string literals
pub mod ops {
  /// All investors under the advisor
  pub const INVESTORS: &str = "Investors";
  /// Advisor-wide transactions
  pub const TRANSACTIONS: &str = "Transactions";
  /// Diversification definitions
  pub const DIVERSIFICATIONS: &str = "Diversifications";
  /// Holding classifications
  pub const CLASSIFICATIONS: &str = "Classifications";
  /// Advisor-wide accounts
  pub const ACCOUNTS: &str = "Accounts";
  /// Advisor-wide holdings
  pub const HOLDINGS: &str = "Holdings";
  /// One investor's profile
  pub const ADVISOR_INVESTOR_PROFILE: &str = "AdvisorInvestorProfile";
  /// Files and folders in an investor's vault
  pub const ADVISOR_INVESTOR_DOCUMENTS_LIST: &str = "AdvisorInvestorDocumentsList";
  /// A single vault file or folder
  pub const ADVISOR_INVESTOR_DOCUMENTS_DETAIL: &str = "AdvisorInvestorDocumentsDetail";
  /// Upload to an investor's vault (POST)
  pub const ADVISOR_INVESTOR_DOCUMENT_POST: &str = "AdvisorInvestorDocumentPost";
  /// One investor's transactions
  pub const ADVISOR_INVESTOR_TRANSACTIONS: &str = "AdvisorInvestorTransactions";
  /// One investor's bank transactions
  pub const ADVISOR_INVESTOR_BANK_TRANSACTIONS: &str = "AdvisorInvestorBankTransactions";
  /// One investor's brokerage transactions
  pub const ADVISOR_INVESTOR_BROKERAGE_TRANSACTIONS: &str = "AdvisorInvestorBrokerageTransactions";
  /// One investor's holdings
  pub const ADVISOR_INVESTOR_HOLDINGS: &str = "AdvisorInvestorHoldings";
  /// One investor's holdings grouped by diversification
  pub const ADVISOR_INVESTOR_DIVERSIFICATION_HOLDINGS: &str =
    "AdvisorInvestorDiversificationHoldings";
  /// Transactions for one account, investor surface
  pub const INVESTOR_ACCOUNT_TRANSACTIONS: &str = "InvestorAccountTransactions";
  /// The investor's own accounts
  pub const INVESTOR_ACCOUNTS: &str = "InvestorAccounts";
  /// The investor's own profile
  pub const INVESTOR_PROFILE: &str = "InvestorProfile";
  /// All clients under a firm
  pub const FIRM_INVESTORS: &str = "FirmInvestors";
}

const INVESTOR_ID: &[&str] = &["investor_id"];
const NONE: &[&str] = &[];

macro_rules! endpoint {
  ($key:expr, $surface:ident, $method:ident, $uri:expr, $path:expr, [$($param:expr),* $(,)?]) => {
    EndpointSpec {
      key: $key,
      surface: Surface::$surface,
      method: Method::$method,
      uri_template: $uri,
      path_params: $path,
      allowed_params: &[$($param),*],
    }
  };
}

/// Every registered endpoint
pub static ENDPOINTS: &[EndpointSpec] = &[
  // Advisor
  endpoint!(ops::INVESTORS, Advisor, Get, "/api/v2/advisor/investors", NONE, []),
  endpoint!(
    ops::TRANSACTIONS,
    Advisor,
    Get,
    "/api/v2/advisor/transactions",
    NONE,
    ["startDate", "endDate", "transactionId", "ignoreOrion"]
  ),
  endpoint!(ops::DIVERSIFICATIONS, Advisor, Get, "/api/v2/Advisor/Diversifications", NONE, []),
  endpoint!(ops::CLASSIFICATIONS, Advisor, Get, "/api/v2/Advisor/Classifications", NONE, []),
  endpoint!(ops::ACCOUNTS, Advisor, Get, "/api/v2/advisor/accounts", NONE, ["ignoreOrion"]),
  endpoint!(ops::HOLDINGS, Advisor, Get, "/api/v2/advisor/holdings", NONE, ["ignoreOrion"]),
  endpoint!(
    ops::ADVISOR_INVESTOR_PROFILE,
    Advisor,
    Get,
    "/api/v2/advisor/investors/{investor_id}/profile",
    INVESTOR_ID,
    []
  ),
  endpoint!(
    ops::ADVISOR_INVESTOR_DOCUMENTS_LIST,
    Advisor,
    Get,
    "/api/v2/advisor/investors/{investor_id}/documents",
    INVESTOR_ID,
    ["parentId", "searchTerm"]
  ),
  endpoint!(
    ops::ADVISOR_INVESTOR_DOCUMENTS_DETAIL,
    Advisor,
    Get,
    "/api/v2/advisor/investors/{investor_id}/documents/{vault_file_id}",
    &["investor_id", "vault_file_id"],
    ["IsPreview", "AdvisorId", "vaultFileId"]
  ),
  endpoint!(
    ops::ADVISOR_INVESTOR_DOCUMENT_POST,
    Advisor,
    Post,
    "/api/v2/advisor/investors/{investor_id}/documents",
    INVESTOR_ID,
    ["request", "investorId"]
  ),
  endpoint!(
    ops::ADVISOR_INVESTOR_TRANSACTIONS,
    Advisor,
    Get,
    "/api/v2/advisor/investors/{investor_id}/transactions",
    INVESTOR_ID,
    ["startDate", "endDate", "ignoreOrion"]
  ),
  endpoint!(
    ops::ADVISOR_INVESTOR_BANK_TRANSACTIONS,
    Advisor,
    Get,
    "/api/v2/advisor/investors/{investor_id}/banktransactions",
    INVESTOR_ID,
    ["hideTransfers", "startDate", "endDate", "ignoreOrion"]
  ),
  endpoint!(
    ops::ADVISOR_INVESTOR_BROKERAGE_TRANSACTIONS,
    Advisor,
    Get,
    "/api/v2/advisor/investors/{investor_id}/brokeragetransactions",
    INVESTOR_ID,
    ["hideTransfers", "startDate", "endDate", "ignoreOrion"]
  ),
  endpoint!(
    ops::ADVISOR_INVESTOR_HOLDINGS,
    Advisor,
    Get,
    "/api/v2/advisor/investors/{investor_id}/holdings",
    INVESTOR_ID,
    ["ignoreOrion"]
  ),
  endpoint!(
    ops::ADVISOR_INVESTOR_DIVERSIFICATION_HOLDINGS,
    Advisor,
    Get,
    "/api/v2/advisor/investors/{investor_id}/diversificationholdings",
    INVESTOR_ID,
    ["diversificationId", "categoryId", "ignoreOrion"]
  ),
  // Investor
  endpoint!(
    ops::INVESTOR_ACCOUNT_TRANSACTIONS,
    Investor,
    Get,
    "/api/v2/investor/accounts/transactions",
    NONE,
    ["clientIdentifier", "accountNumber", "startDate", "endDate"]
  ),
  endpoint!(
    ops::INVESTOR_ACCOUNTS,
    Investor,
    Get,
    "/api/v2/investor/accounts",
    NONE,
    ["clientIdentifier"]
  ),
  endpoint!(
    ops::INVESTOR_PROFILE,
    Investor,
    Get,
    "/api/v2/investor/profile",
    NONE,
    ["clientIdentifier"]
  ),
  // Firm
  endpoint!(ops::FIRM_INVESTORS, Firm, Get, "/api/v2/firm/investors", NONE, ["firm"]),
];

static BY_KEY: LazyLock<HashMap<&'static str, &'static EndpointSpec>> =
  LazyLock::new(|| ENDPOINTS.iter().map(|spec| (spec.key, spec)).collect());

/// Look up an operation by key
///
/// # Errors
///
/// Returns [`Error::UnknownOperation`] if no endpoint is registered under `key`.
pub fn lookup(key: &str) -> Result<&'static EndpointSpec> {
  BY_KEY.get(key).copied().ok_or_else(|| Error::UnknownOperation(key.to_string()))
}

/// All operations, in table order
pub fn all() -> &'static [EndpointSpec] {
  ENDPOINTS
}

/// Operations belonging to one API surface
pub fn by_surface(surface: Surface) -> impl Iterator<Item = &'static EndpointSpec> {
  ENDPOINTS.iter().filter(move |spec| spec.surface == surface)
}
