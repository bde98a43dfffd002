use anyhow::{Context, Result};
use clap::Args;
use wa_core::{Config as CoreConfig, CredentialOverrides};

/// Connection and credential flags shared by every command
#[derive(Args, Clone, Default)]
pub struct GlobalArgs {
  /// Wealth Access API key
  #[arg(long, env = "WA_API_KEY", hide_env_values = true, global = true)]
  pub api_key: Option<String>,

  /// Wealth Access secret key used to sign requests
  #[arg(long, env = "WA_SECRET_KEY", hide_env_values = true, global = true)]
  pub secret_key: Option<String>,

  /// GUID of the user the request is made for
  #[arg(long, env = "WA_USER_GUID", hide_env_values = true, global = true)]
  pub user_guid: Option<String>,

  /// Override the API base URL
  #[arg(long, env = "WA_BASE_URL", global = true)]
  pub base_url: Option<String>,
}

impl std::fmt::Debug for GlobalArgs {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("GlobalArgs")
      .field("api_key", &self.api_key)
      .field("secret_key", &self.secret_key.as_ref().map(|_| "<redacted>"))
      .field("user_guid", &self.user_guid)
      .field("base_url", &self.base_url)
      .finish()
  }
}

#[derive(Debug, Clone)]
pub struct Config {
  pub api_config: CoreConfig,
  /// Credentials given on the command line, applied per request
  pub overrides: CredentialOverrides,
}

impl Config {
  pub fn from_env(args: &GlobalArgs) -> Result<Self> {
    let mut api_config = CoreConfig::from_env().context("Failed to load Wealth Access configuration")?;

    if let Some(base_url) = &args.base_url {
      url_check(base_url)?;
      api_config = api_config.with_base_url(base_url.as_str());
    }

    let overrides = CredentialOverrides {
      api_key: args.api_key.clone(),
      secret_key: args.secret_key.clone(),
      user_guid: args.user_guid.clone(),
    };

    Ok(Self { api_config, overrides })
  }
}

fn url_check(base_url: &str) -> Result<()> {
  if base_url.starts_with("http://") || base_url.starts_with("https://") {
    Ok(())
  } else {
    anyhow::bail!("--base-url must start with http:// or https://, got {}", base_url)
  }
}
