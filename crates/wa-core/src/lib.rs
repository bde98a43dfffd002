//! # wa-core
//!
//! Configuration, credentials, parameter types and the shared error type
//! for the Wealth Access client crates.

pub mod config;
pub mod credentials;
pub mod error;
pub mod types;

pub use config::Config;
pub use credentials::{CredentialOverrides, Credentials};
pub use error::{Error, Result};
pub use types::{Method, PathParams, QueryParams, QueryValue, Surface};

/// Base URL for the Wealth Access API
pub const WEALTH_ACCESS_BASE_URL: &str = "https://api.wealthaccess.com";

/// User agent sent by the client
pub const USER_AGENT: &str = concat!("wa-client/", env!("CARGO_PKG_VERSION"));
