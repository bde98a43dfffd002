use super::RequestArgs;
use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use tracing::{info, warn};
use wa_client::WealthAccessClient;

#[derive(Args, Debug)]
pub struct CallCommand {
  #[command(flatten)]
  request: RequestArgs,

  /// Exit with an error when the API answers with a non-2xx status
  #[arg(long)]
  fail: bool,
}

pub async fn execute(cmd: CallCommand, config: Config) -> Result<()> {
  let client = WealthAccessClient::new(config.api_config)?;

  let response = client
    .call_with(
      &cmd.request.operation,
      &cmd.request.path_params(),
      cmd.request.query_params(),
      &config.overrides,
    )
    .await
    .with_context(|| format!("{} failed", cmd.request.operation))?;

  let status = response.status();
  if status.is_success() {
    info!("{} returned {}", cmd.request.operation, status);
  } else {
    warn!("{} returned {}", cmd.request.operation, status);
  }
  eprintln!("HTTP {}", status);

  let body = response.text().await.context("Failed to read response body")?;
  println!("{}", body);

  if cmd.fail && !status.is_success() {
    anyhow::bail!("{} returned HTTP {}", cmd.request.operation, status);
  }
  Ok(())
}
