/// Advisor surface: `/api/v2/advisor/...`
pub mod advisor;
/// Firm surface: `/api/v2/firm/...`
pub mod firm;
/// Investor (end-user) surface: `/api/v2/investor/...`
pub mod investor;

use crate::client::WealthAccessClient;
use reqwest::Response;
use wa_core::{PathParams, QueryParams, Result};

/// Base trait for endpoint implementations
///
/// Provides common functionality needed by all endpoint modules
pub trait EndpointBase {
  /// Get a reference to the client the endpoints dispatch through
  fn client(&self) -> &WealthAccessClient;

  /// Sign and send one registered operation
  async fn send(&self, key: &str, path: PathParams, query: QueryParams) -> Result<Response> {
    self.client().call(key, &path, query).await
  }
}

/// Macro to implement the EndpointBase trait for endpoint structs
macro_rules! impl_endpoint_base {
  ($struct_name:ident) => {
    impl EndpointBase for $struct_name {
      fn client(&self) -> &WealthAccessClient {
        &self.client
      }
    }
  };
}

pub(crate) use impl_endpoint_base;

/// Path parameters for the `/investors/{investor_id}/...` family
pub(crate) fn investor_path(investor_id: i64) -> PathParams {
  PathParams::new().with("investor_id", investor_id)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_investor_path() {
    assert_eq!(investor_path(42).get("investor_id"), Some("42"));
  }
}
