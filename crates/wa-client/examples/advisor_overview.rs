//! Advisor Overview Example
//!
//! This example demonstrates how to use wa-client to:
//! - Load credentials from the environment
//! - List an advisor's investors
//! - Pull holdings and recent transactions for one investor
//! - Handle non-2xx responses, which come back as ordinary responses
//!
//! Run with `WA_API_KEY`, `WA_SECRET_KEY` and `WA_USER_GUID` set:
//!
//! ```text
//! cargo run -p wa-client --example advisor_overview -- 42
//! ```

use chrono::{Duration, Utc};
use wa_client::{Config, WealthAccessClient};
use wa_core::types::{HoldingsQuery, TransactionQuery};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  // Initialize logging
  tracing_subscriber::fmt::init();

  // Load configuration from environment
  let config = Config::from_env()?;
  let client = WealthAccessClient::new(config)?;

  let investors = client.advisor().investors().await?;
  println!("Investors: HTTP {}", investors.status());
  println!("{}", investors.text().await?);

  let Some(investor_id) = std::env::args().nth(1).and_then(|id| id.parse::<i64>().ok()) else {
    println!("Pass an investor id to see holdings and transactions");
    return Ok(());
  };

  let holdings = client.advisor().investor_holdings(investor_id, HoldingsQuery::ignore_orion(false)).await?;
  if !holdings.status().is_success() {
    eprintln!("Holdings request rejected: HTTP {}", holdings.status());
    return Ok(());
  }
  println!("Holdings: {}", holdings.text().await?);

  let today = Utc::now().date_naive();
  let last_month = TransactionQuery::between(today - Duration::days(30), today);
  let transactions = client.advisor().investor_transactions(investor_id, last_month).await?;
  println!("Transactions (30 days): HTTP {}", transactions.status());
  println!("{}", transactions.text().await?);

  Ok(())
}
