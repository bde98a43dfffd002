pub mod call;
pub mod list;
pub mod sign;

use clap::Args;
use wa_core::{PathParams, QueryParams, QueryValue};

/// An operation key plus its path and query parameters
#[derive(Args, Debug, Clone)]
pub struct RequestArgs {
  /// Operation key, e.g. AdvisorInvestorHoldings (see `wa list`)
  pub operation: String,

  /// Path parameter as name=value, e.g. -p investor_id=42
  #[arg(short = 'p', long = "path", value_parser = parse_key_val)]
  pub path: Vec<(String, String)>,

  /// Query parameter as name=value, e.g. -q ignoreOrion=true
  #[arg(short = 'q', long = "query", value_parser = parse_key_val)]
  pub query: Vec<(String, String)>,
}

impl RequestArgs {
  pub fn path_params(&self) -> PathParams {
    self.path.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
  }

  /// `true`/`false` become booleans and integers become ints
  pub fn query_params(&self) -> QueryParams {
    self.query.iter().map(|(k, v)| (k.clone(), QueryValue::parse_loose(v))).collect()
  }
}

/// Parse a single `name=value` pair
fn parse_key_val(s: &str) -> Result<(String, String), String> {
  let (key, value) = s.split_once('=').ok_or_else(|| format!("expected name=value, got `{}`", s))?;
  if key.is_empty() {
    return Err(format!("empty parameter name in `{}`", s));
  }
  Ok((key.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_key_val() {
    assert_eq!(parse_key_val("investor_id=42").unwrap(), ("investor_id".into(), "42".into()));
    // only the first '=' splits
    assert_eq!(parse_key_val("searchTerm=a=b").unwrap(), ("searchTerm".into(), "a=b".into()));
    assert!(parse_key_val("novalue").is_err());
    assert!(parse_key_val("=x").is_err());
  }

  #[test]
  fn test_request_args_conversion() {
    let args = RequestArgs {
      operation: "AdvisorInvestorHoldings".into(),
      path: vec![("investor_id".into(), "42".into())],
      query: vec![("ignoreOrion".into(), "true".into()), ("categoryId".into(), "3".into())],
    };
    assert_eq!(args.path_params().get("investor_id"), Some("42"));
    let query = args.query_params();
    assert_eq!(query.get("ignoreOrion"), Some(&QueryValue::Bool(true)));
    assert_eq!(query.get("categoryId"), Some(&QueryValue::Int(3)));
  }
}
