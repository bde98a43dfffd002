//! Wealth Access credentials and their resolution.
//!
//! A request needs three values: the API key, the secret key used for the
//! HMAC signature, and the GUID of the user the request is made for. Each can
//! be given explicitly for a single call or come from the configuration
//! loaded at startup.

use serde::Deserialize;
use std::fmt;

/// Environment variable holding the API key
pub const API_KEY_VAR: &str = "WA_API_KEY";
/// Environment variable holding the secret key
pub const SECRET_KEY_VAR: &str = "WA_SECRET_KEY";
/// Environment variable holding the user GUID
pub const USER_GUID_VAR: &str = "WA_USER_GUID";

/// A fully resolved credential set. Secrets are redacted from `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
  api_key: String,
  secret_key: String,
  user_guid: String,
}

impl Credentials {
  pub fn new(
    api_key: impl Into<String>,
    secret_key: impl Into<String>,
    user_guid: impl Into<String>,
  ) -> Self {
    Self { api_key: api_key.into(), secret_key: secret_key.into(), user_guid: user_guid.into() }
  }

  pub fn api_key(&self) -> &str {
    &self.api_key
  }

  pub fn secret_key(&self) -> &str {
    &self.secret_key
  }

  pub fn user_guid(&self) -> &str {
    &self.user_guid
  }
}

impl fmt::Debug for Credentials {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Credentials")
      .field("api_key", &self.api_key)
      .field("secret_key", &"<redacted>")
      .field("user_guid", &self.user_guid)
      .finish()
  }
}

/// Partially known credentials.
///
/// Used both for the defaults held by [`crate::Config`] and for explicit
/// per-call overrides.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CredentialOverrides {
  pub api_key: Option<String>,
  pub secret_key: Option<String>,
  pub user_guid: Option<String>,
}

impl CredentialOverrides {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn api_key(mut self, value: impl Into<String>) -> Self {
    self.api_key = Some(value.into());
    self
  }

  pub fn secret_key(mut self, value: impl Into<String>) -> Self {
    self.secret_key = Some(value.into());
    self
  }

  pub fn user_guid(mut self, value: impl Into<String>) -> Self {
    self.user_guid = Some(value.into());
    self
  }

  /// Read the three `WA_*` variables through `lookup`.
  pub fn from_lookup<F>(lookup: F) -> Self
  where
    F: Fn(&str) -> Option<String>,
  {
    Self {
      api_key: lookup(API_KEY_VAR),
      secret_key: lookup(SECRET_KEY_VAR),
      user_guid: lookup(USER_GUID_VAR),
    }
  }

  pub fn is_empty(&self) -> bool {
    self.api_key.is_none() && self.secret_key.is_none() && self.user_guid.is_none()
  }

  /// Resolve a complete credential set, preferring `self` over `defaults`
  /// field by field.
  ///
  /// # Errors
  ///
  /// Returns [`Error::MissingCredentials`](crate::Error::MissingCredentials)
  /// naming every field that neither side provides.
  pub fn resolve(&self, defaults: &CredentialOverrides) -> crate::Result<Credentials> {
    let api_key = pick(&self.api_key, &defaults.api_key);
    let secret_key = pick(&self.secret_key, &defaults.secret_key);
    let user_guid = pick(&self.user_guid, &defaults.user_guid);

    match (api_key, secret_key, user_guid) {
      (Some(api_key), Some(secret_key), Some(user_guid)) => {
        Ok(Credentials::new(api_key, secret_key, user_guid))
      }
      (api_key, secret_key, user_guid) => {
        let mut missing = Vec::new();
        if api_key.is_none() {
          missing.push(API_KEY_VAR);
        }
        if secret_key.is_none() {
          missing.push(SECRET_KEY_VAR);
        }
        if user_guid.is_none() {
          missing.push(USER_GUID_VAR);
        }
        Err(crate::Error::MissingCredentials(missing))
      }
    }
  }
}

// Empty strings count as absent, same as an unset variable.
fn pick<'a>(preferred: &'a Option<String>, fallback: &'a Option<String>) -> Option<&'a str> {
  preferred
    .as_deref()
    .filter(|v| !v.is_empty())
    .or_else(|| fallback.as_deref().filter(|v| !v.is_empty()))
}

impl fmt::Debug for CredentialOverrides {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("CredentialOverrides")
      .field("api_key", &self.api_key)
      .field("secret_key", &self.secret_key.as_ref().map(|_| "<redacted>"))
      .field("user_guid", &self.user_guid)
      .finish()
  }
}
