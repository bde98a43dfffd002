use thiserror::Error;

/// The main error type for wa-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// No endpoint is registered under the requested operation key
  #[error("Unknown operation: {0}")]
  UnknownOperation(String),

  /// A `{name}` placeholder in the URI template has no value
  #[error("Missing path parameter '{name}' for template {template}")]
  MissingPathParameter { name: String, template: String },

  /// One or more of the API key, secret key or user GUID could not be resolved
  #[error("Missing Wealth Access credentials: {}", .0.join(", "))]
  MissingCredentials(Vec<&'static str>),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// Base URL or request URL could not be parsed
  #[error("Invalid URL: {0}")]
  InvalidUrl(#[from] url::ParseError),

  /// The signing key could not be used to build the HMAC
  #[error("Signing failed: {0}")]
  Signing(String),

  /// A header value contains bytes that cannot be sent on the wire
  #[error("Invalid header value for {0}")]
  InvalidHeader(&'static str),

  /// HTTP transport error, carrying the underlying client error unchanged
  #[error("HTTP transport error: {0}")]
  Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// True for failures raised before any network call was attempted
  pub fn is_pre_flight(&self) -> bool {
    !matches!(self, Error::Transport(_))
  }
}

/// Result type alias for wa-* crates
pub type Result<T> = std::result::Result<T, Error>;
