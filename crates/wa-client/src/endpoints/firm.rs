use super::{EndpointBase, impl_endpoint_base};

use crate::client::WealthAccessClient;
use crate::registry::ops;
use reqwest::Response;
use tracing::instrument;
use wa_core::{PathParams, QueryParams, Result};

/// Firm-wide endpoints
pub struct FirmEndpoints {
  client: WealthAccessClient,
}

impl FirmEndpoints {
  /// Create a new firm endpoints instance
  pub fn new(client: WealthAccessClient) -> Self {
    Self { client }
  }

  /// All clients under a firm
  ///
  /// # Arguments
  ///
  /// * `firm` - GUID that uniquely identifies the firm
  #[instrument(skip(self))]
  pub async fn clients(&self, firm: &str) -> Result<Response> {
    self.send(ops::FIRM_INVESTORS, PathParams::new(), QueryParams::new().with("firm", firm)).await
  }
}

impl_endpoint_base!(FirmEndpoints);
