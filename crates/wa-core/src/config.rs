//! Configuration management for the Wealth Access client

use crate::credentials::CredentialOverrides;
use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::Deserialize;
use std::env;

/// Environment variable overriding the API base URL
pub const BASE_URL_VAR: &str = "WA_BASE_URL";
/// Environment variable holding an optional request timeout in seconds
pub const TIMEOUT_SECS_VAR: &str = "WA_TIMEOUT_SECS";

/// Main configuration struct for the Wealth Access client
///
/// Built once at startup and handed to the client, which reads the default
/// credentials from here instead of from the process environment.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
  /// Base URL for the Wealth Access API
  pub base_url: String,

  /// Request timeout in seconds. `None` leaves the HTTP client's default.
  pub timeout_secs: Option<u64>,

  /// User agent sent with every request
  pub user_agent: String,

  /// Default credentials, used for any field a call does not override
  #[serde(default)]
  pub credentials: CredentialOverrides,
}

impl Config {
  /// Load configuration from environment variables (and `.env`, if present)
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Build a configuration from an arbitrary variable source
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let timeout_secs = match lookup(TIMEOUT_SECS_VAR) {
      Some(raw) => Some(
        raw
          .trim()
          .parse()
          .map_err(|_| Error::Config(format!("Invalid {}: {}", TIMEOUT_SECS_VAR, raw)))?,
      ),
      None => None,
    };

    let base_url = lookup(BASE_URL_VAR).unwrap_or_else(|| crate::WEALTH_ACCESS_BASE_URL.to_string());
    url::Url::parse(&base_url)?;

    Ok(Config {
      base_url: base_url.trim_end_matches('/').to_string(),
      timeout_secs,
      user_agent: crate::USER_AGENT.to_string(),
      credentials: CredentialOverrides::from_lookup(&lookup),
    })
  }

  /// Create a config with default values and explicit credentials (for testing)
  pub fn default_with_credentials(
    api_key: impl Into<String>,
    secret_key: impl Into<String>,
    user_guid: impl Into<String>,
  ) -> Self {
    Config {
      base_url: crate::WEALTH_ACCESS_BASE_URL.to_string(),
      timeout_secs: None,
      user_agent: crate::USER_AGENT.to_string(),
      credentials: CredentialOverrides::new()
        .api_key(api_key)
        .secret_key(secret_key)
        .user_guid(user_guid),
    }
  }

  /// Replace the default credentials
  pub fn with_credentials(mut self, credentials: CredentialOverrides) -> Self {
    self.credentials = credentials;
    self
  }

  /// Point the client at a different host, e.g. a mock server
  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into().trim_end_matches('/').to_string();
    self
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn lookup_from(vars: &[(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<&str, &str> = vars.iter().copied().collect();
    move |name: &str| map.get(name).map(|v| v.to_string())
  }

  #[test]
  fn test_config_from_lookup_defaults() {
    let config = Config::from_lookup(lookup_from(&[("WA_API_KEY", "test_key")])).unwrap();
    assert_eq!(config.base_url, crate::WEALTH_ACCESS_BASE_URL);
    assert_eq!(config.timeout_secs, None);
    assert_eq!(config.credentials.api_key.as_deref(), Some("test_key"));
    assert_eq!(config.credentials.secret_key, None);
  }

  #[test]
  fn test_config_overrides() {
    let config = Config::from_lookup(lookup_from(&[
      ("WA_BASE_URL", "http://localhost:8080/"),
      ("WA_TIMEOUT_SECS", "15"),
      ("WA_SECRET_KEY", "s"),
      ("WA_USER_GUID", "g"),
    ]))
    .unwrap();
    assert_eq!(config.base_url, "http://localhost:8080");
    assert_eq!(config.timeout_secs, Some(15));
    assert_eq!(config.credentials.secret_key.as_deref(), Some("s"));
    assert_eq!(config.credentials.user_guid.as_deref(), Some("g"));
  }

  #[test]
  fn test_invalid_timeout() {
    let result = Config::from_lookup(lookup_from(&[("WA_TIMEOUT_SECS", "soon")]));
    assert!(matches!(result, Err(Error::Config(_))));
  }

  #[test]
  fn test_invalid_base_url() {
    let result = Config::from_lookup(lookup_from(&[("WA_BASE_URL", "not a url")]));
    assert!(matches!(result, Err(Error::InvalidUrl(_))));
  }

  #[test]
  fn test_default_with_credentials() {
    let config = Config::default_with_credentials("k", "s", "g");
    let creds = config.credentials.resolve(&CredentialOverrides::new()).unwrap();
    assert_eq!(creds.api_key(), "k");
    assert_eq!(config.base_url, "https://api.wealthaccess.com");
  }
}
