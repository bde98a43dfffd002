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

//! Request canonicalization and WAS signing.
//!
//! Every request carries an `Authorization: WAS <user guid>:<signature>`
//! header where the signature is the base64 HMAC-SHA256, keyed with the
//! secret key, of
//!
//! ```text
//! {api key}\n{METHOD}\n{timestamp}\n{uri}\n{canonical query}
//! ```
//!
//! The canonical query is the allow-listed parameters as `key=value` pairs
//! sorted by key and joined with `&`, each key and value form-urlencoded. It
//! is omitted entirely when empty, and it is also the exact query string put
//! on the wire, so a value containing `&`, `+` or a space cannot change the
//! parameter set the server sees.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::collections::BTreeMap;
use url::form_urlencoded;
use wa_core::{Credentials, Error, Method, PathParams, QueryParams, Result};

use crate::registry::EndpointSpec;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the WAS authorization value
pub const AUTHORIZATION_HEADER: &str = "Authorization";
/// Header carrying the API key
pub const API_KEY_HEADER: &str = "x-WAApiKey";
/// Header carrying the timestamp that was signed
pub const TIMESTAMP_HEADER: &str = "x-WATimestamp";

/// Allow-listed query parameters in their wire form, ordered by key
pub type NormalizedParams = BTreeMap<String, String>;

/// Fill every `{name}` placeholder in `template` from `path_params`.
///
/// Placeholders are matched by name; entries in `path_params` that appear
/// nowhere in the template are ignored. Values are percent-encoded as a
/// single path segment, so `/`, `?` and `#` stay inside the segment.
///
/// # Errors
///
/// Returns [`Error::MissingPathParameter`] for the first placeholder without a value.
pub fn resolve_uri(template: &str, path_params: &PathParams) -> Result<String> {
  let mut uri = String::with_capacity(template.len());
  let mut rest = template;

  while let Some(open) = rest.find('{') {
    let Some(close) = rest[open..].find('}').map(|i| open + i) else {
      break;
    };
    let name = &rest[open + 1..close];
    let value = path_params.get(name).ok_or_else(|| Error::MissingPathParameter {
      name: name.to_string(),
      template: template.to_string(),
    })?;
    uri.push_str(&rest[..open]);
    uri.push_str(&encode_segment(value));
    rest = &rest[close + 1..];
  }

  uri.push_str(rest);
  Ok(uri)
}

/// Percent-encode one path segment; spaces become `%20`, not `+`
fn encode_segment(value: &str) -> String {
  // byte_serialize escapes a literal '+' as %2B, so any '+' left is a space
  form_urlencoded::byte_serialize(value.as_bytes()).collect::<String>().replace('+', "%20")
}

/// Keep only the parameters `spec` accepts, rendered to their wire form.
///
/// Unknown keys are dropped without error. An endpoint that declares no
/// parameters passes the input through unfiltered.
pub fn normalize(spec: &EndpointSpec, raw: &QueryParams) -> NormalizedParams {
  raw
    .iter()
    .filter(|(key, _)| spec.allowed_params.is_empty() || spec.allows(key))
    .map(|(key, value)| (key.clone(), value.render()))
    .collect()
}

/// Serialize parameters as `k1=v1&k2=v2`, sorted by key.
///
/// Keys and values are form-urlencoded (`application/x-www-form-urlencoded`),
/// so the result can be signed and transmitted byte for byte. Input order is
/// irrelevant. An empty input yields an empty string.
pub fn canonicalize<I, K, V>(params: I) -> String
where
  I: IntoIterator<Item = (K, V)>,
  K: AsRef<str>,
  V: AsRef<str>,
{
  let mut pairs: Vec<(K, V)> = params.into_iter().collect();
  pairs.sort_by(|a, b| a.0.as_ref().cmp(b.0.as_ref()));

  let mut serializer = form_urlencoded::Serializer::new(String::new());
  for (k, v) in &pairs {
    serializer.append_pair(k.as_ref(), v.as_ref());
  }
  serializer.finish()
}

/// Format an instant the way `x-WATimestamp` expects: `Mon, 01 Jan 2024 00:00:00 GMT`
pub fn format_timestamp(at: DateTime<Utc>) -> String {
  at.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// The current time as a request timestamp
pub fn current_timestamp() -> String {
  format_timestamp(Utc::now())
}

/// Build the string that gets signed
pub fn signing_string(
  api_key: &str,
  method: Method,
  timestamp: &str,
  uri: &str,
  canonical_params: &str,
) -> String {
  let mut message = format!("{}\n{}\n{}\n{}\n", api_key, method.as_str(), timestamp, uri);
  if !canonical_params.is_empty() {
    message.push_str(canonical_params);
  }
  message
}

/// Compute the base64 HMAC-SHA256 signature for one request
///
/// # Errors
///
/// Returns [`Error::Signing`] if the secret key is rejected by the HMAC.
pub fn sign(
  method: Method,
  uri: &str,
  canonical_params: &str,
  credentials: &Credentials,
  timestamp: &str,
) -> Result<String> {
  let message = signing_string(credentials.api_key(), method, timestamp, uri, canonical_params);

  let mut mac = HmacSha256::new_from_slice(credentials.secret_key().as_bytes())
    .map_err(|e| Error::Signing(e.to_string()))?;
  mac.update(message.as_bytes());

  Ok(BASE64.encode(mac.finalize().into_bytes()))
}

/// The three authentication headers attached to every request
#[derive(Clone, PartialEq, Eq)]
pub struct AuthHeaders {
  /// `WAS {user guid}:{signature}`
  pub authorization: String,
  /// Value of `x-WAApiKey`
  pub api_key: String,
  /// Value of `x-WATimestamp`, the same string that was signed
  pub timestamp: String,
}

impl AuthHeaders {
  /// Header name/value pairs in send order
  pub fn pairs(&self) -> [(&'static str, &str); 3] {
    [
      (AUTHORIZATION_HEADER, self.authorization.as_str()),
      (API_KEY_HEADER, self.api_key.as_str()),
      (TIMESTAMP_HEADER, self.timestamp.as_str()),
    ]
  }
}

impl std::fmt::Debug for AuthHeaders {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("AuthHeaders")
      .field("authorization", &"WAS <redacted>")
      .field("api_key", &self.api_key)
      .field("timestamp", &self.timestamp)
      .finish()
  }
}

/// Assemble the authentication headers
pub fn build_headers(user_guid: &str, signature: &str, api_key: &str, timestamp: &str) -> AuthHeaders {
  AuthHeaders {
    authorization: format!("WAS {}:{}", user_guid, signature),
    api_key: api_key.to_string(),
    timestamp: timestamp.to_string(),
  }
}

/// A fully prepared request, ready to dispatch
#[derive(Debug, Clone)]
pub struct SignedRequest {
  /// HTTP method from the registry entry
  pub method: Method,
  /// Resolved path, e.g. `/api/v2/advisor/investors/42/holdings`
  pub uri: String,
  /// Canonical query string; signed and transmitted as-is
  pub query: String,
  /// Authentication headers
  pub headers: AuthHeaders,
}

impl SignedRequest {
  /// Resolve, normalize, canonicalize and sign one request.
  ///
  /// `timestamp` is used for both the signature and the `x-WATimestamp`
  /// header so the two always agree.
  ///
  /// # Errors
  ///
  /// Returns [`Error::MissingPathParameter`] if the template cannot be filled,
  /// or [`Error::Signing`] if the signature cannot be computed.
  pub fn prepare(
    spec: &EndpointSpec,
    path_params: &PathParams,
    query: &QueryParams,
    credentials: &Credentials,
    timestamp: &str,
  ) -> Result<Self> {
    let uri = resolve_uri(spec.uri_template, path_params)?;
    let canonical = canonicalize(&normalize(spec, query));
    let signature = sign(spec.method, &uri, &canonical, credentials, timestamp)?;
    let headers = build_headers(credentials.user_guid(), &signature, credentials.api_key(), timestamp);

    Ok(Self { method: spec.method, uri, query: canonical, headers })
  }
}
