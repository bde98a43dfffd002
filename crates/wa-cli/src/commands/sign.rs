use super::RequestArgs;
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use wa_client::{SignedRequest, WealthAccessClient};

/// Build and sign a request without sending it
#[derive(Args, Debug)]
pub struct SignCommand {
  #[command(flatten)]
  request: RequestArgs,

  /// Timestamp to sign instead of the current time,
  /// e.g. "Mon, 01 Jan 2024 00:00:00 GMT"
  #[arg(long)]
  timestamp: Option<String>,
}

pub fn execute(cmd: SignCommand, config: Config) -> Result<()> {
  let client = WealthAccessClient::new(config.api_config)?;

  let request = client.prepare(
    &cmd.request.operation,
    &cmd.request.path_params(),
    &cmd.request.query_params(),
    &config.overrides,
    cmd.timestamp.as_deref(),
  )?;
  let url = client.transport().build_url(&request)?;

  print!("{}", render(&request, url.as_str()));
  Ok(())
}

fn render(request: &SignedRequest, url: &str) -> String {
  let mut out = format!("{} {}\n", request.method, url);
  out.push_str(&format!("canonical query: {}\n", request.query));
  for (name, value) in request.headers.pairs() {
    out.push_str(&format!("{}: {}\n", name, value));
  }
  out
}
