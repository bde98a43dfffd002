//! # wa-client
//!
//! A signed-request client for the Wealth Access API.
//!
//! ## Features
//!
//! - **WAS signing**: every request carries an HMAC-SHA256 signature over a
//!   canonical string, plus the `x-WAApiKey` and `x-WATimestamp` headers
//! - **One registry**: all operations live in a single table of URI
//!   templates and allowed query parameters
//! - **Raw responses**: the `reqwest::Response` comes back untouched
//! - **Configurable**: environment-based configuration via wa-core
//!
//! ## Usage
//!
//! ```rust,no_run
//! use wa_client::WealthAccessClient;
//! use wa_core::{Config, types::HoldingsQuery};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = WealthAccessClient::new(config)?;
//!
//!     let response = client.advisor().investor_holdings(42, HoldingsQuery::ignore_orion(true)).await?;
//!     println!("{}: {}", response.status(), response.text().await?);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Credentials
//!
//! `WA_API_KEY`, `WA_SECRET_KEY` and `WA_USER_GUID` are read once into
//! [`Config`]. Any of them can be replaced for a single request with
//! [`WealthAccessClient::call_with`].
//!
//! ## Error Handling
//!
//! All methods return `Result<T, wa_core::Error>`. Lookup, credential and
//! path errors are raised before anything is sent.

#![deny(missing_docs)]
#![warn(clippy::all)]

/// The client facade
pub mod client;
/// Convenience wrappers grouped by API surface
pub mod endpoints;
pub mod registry;
pub mod signing;
pub mod transport;

// Re-export the main client and common types
pub use client::WealthAccessClient;
pub use registry::{EndpointSpec, lookup};
pub use signing::SignedRequest;
pub use wa_core::{Config, CredentialOverrides, Error, PathParams, QueryParams, QueryValue, Result};

// Re-export endpoint modules for direct access if needed
pub use endpoints::{advisor::AdvisorEndpoints, firm::FirmEndpoints, investor::InvestorEndpoints};
