//! Common types used across wa-* crates

pub mod common;
pub mod params;
pub mod query;

pub use common::{Method, Surface};
pub use params::{DiversificationQuery, DocumentQuery, HoldingsQuery, TransactionQuery};
pub use query::{PathParams, QueryParams, QueryValue};
