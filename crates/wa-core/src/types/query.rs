//! Query and path parameter containers

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A scalar query parameter value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
  Bool(bool),
  Int(i64),
  Str(String),
}

impl QueryValue {
  /// Wire form of the value. Booleans are always the lowercase literals
  /// `true` / `false` because the signature covers the exact bytes.
  pub fn render(&self) -> String {
    match self {
      QueryValue::Bool(true) => "true".to_string(),
      QueryValue::Bool(false) => "false".to_string(),
      QueryValue::Int(i) => i.to_string(),
      QueryValue::Str(s) => s.clone(),
    }
  }

  /// Parse a command-line style value: `true`/`false` become booleans,
  /// integers become ints, anything else stays a string.
  pub fn parse_loose(raw: &str) -> Self {
    match raw {
      "true" => QueryValue::Bool(true),
      "false" => QueryValue::Bool(false),
      _ => match raw.parse::<i64>() {
        Ok(i) => QueryValue::Int(i),
        Err(_) => QueryValue::Str(raw.to_string()),
      },
    }
  }
}

impl fmt::Display for QueryValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.render())
  }
}

impl From<bool> for QueryValue {
  fn from(value: bool) -> Self {
    QueryValue::Bool(value)
  }
}

impl From<i64> for QueryValue {
  fn from(value: i64) -> Self {
    QueryValue::Int(value)
  }
}

impl From<i32> for QueryValue {
  fn from(value: i32) -> Self {
    QueryValue::Int(value.into())
  }
}

impl From<u32> for QueryValue {
  fn from(value: u32) -> Self {
    QueryValue::Int(value.into())
  }
}

impl From<String> for QueryValue {
  fn from(value: String) -> Self {
    QueryValue::Str(value)
  }
}

impl From<&str> for QueryValue {
  fn from(value: &str) -> Self {
    QueryValue::Str(value.to_string())
  }
}

impl From<&String> for QueryValue {
  fn from(value: &String) -> Self {
    QueryValue::Str(value.clone())
  }
}

impl From<NaiveDate> for QueryValue {
  fn from(value: NaiveDate) -> Self {
    QueryValue::Str(value.format("%Y-%m-%d").to_string())
  }
}

/// Raw query parameters as supplied by a caller, before filtering against
/// an endpoint's allow-list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams(BTreeMap<String, QueryValue>);

impl QueryParams {
  pub fn new() -> Self {
    Self::default()
  }

  /// Insert or replace a parameter
  pub fn insert(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> &mut Self {
    self.0.insert(key.into(), value.into());
    self
  }

  /// Builder form of [`insert`](Self::insert)
  pub fn with(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
    self.insert(key, value);
    self
  }

  /// Insert only when `value` is present
  pub fn with_opt<V: Into<QueryValue>>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
    if let Some(value) = value {
      self.insert(key, value);
    }
    self
  }

  pub fn get(&self, key: &str) -> Option<&QueryValue> {
    self.0.get(key)
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&String, &QueryValue)> {
    self.0.iter()
  }

  /// Add every entry of `other`, replacing existing keys
  pub fn extend(&mut self, other: QueryParams) {
    self.0.extend(other.0);
  }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
  K: Into<String>,
  V: Into<QueryValue>,
{
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
  }
}

/// Values for the `{name}` placeholders of a URI template
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathParams(BTreeMap<String, String>);

impl PathParams {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn insert(&mut self, name: impl Into<String>, value: impl fmt::Display) -> &mut Self {
    self.0.insert(name.into(), value.to_string());
    self
  }

  pub fn with(mut self, name: impl Into<String>, value: impl fmt::Display) -> Self {
    self.insert(name, value);
    self
  }

  pub fn get(&self, name: &str) -> Option<&str> {
    self.0.get(name).map(String::as_str)
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}

impl<K, V> FromIterator<(K, V)> for PathParams
where
  K: Into<String>,
  V: fmt::Display,
{
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    Self(iter.into_iter().map(|(k, v)| (k.into(), v.to_string())).collect())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_bool_render_is_lowercase_literal() {
    assert_eq!(QueryValue::from(true).render(), "true");
    assert_eq!(QueryValue::from(false).render(), "false");
  }

  #[test]
  fn test_date_render() {
    let date = NaiveDate::from_ymd_opt(2024, 2, 9).unwrap();
    assert_eq!(QueryValue::from(date).render(), "2024-02-09");
  }

  #[test]
  fn test_parse_loose() {
    assert_eq!(QueryValue::parse_loose("true"), QueryValue::Bool(true));
    assert_eq!(QueryValue::parse_loose("42"), QueryValue::Int(42));
    assert_eq!(QueryValue::parse_loose("2024-01-01"), QueryValue::Str("2024-01-01".into()));
    // Only the exact lowercase literals are booleans
    assert_eq!(QueryValue::parse_loose("True"), QueryValue::Str("True".into()));
  }

  #[test]
  fn test_with_opt_skips_none() {
    let params = QueryParams::new().with("a", 1).with_opt::<bool>("b", None).with_opt("c", Some(true));
    assert_eq!(params.len(), 2);
    assert_eq!(params.get("c"), Some(&QueryValue::Bool(true)));
    assert!(params.get("b").is_none());
  }

  #[test]
  fn test_path_params() {
    let path: PathParams = [("investor_id", 42)].into_iter().collect();
    assert_eq!(path.get("investor_id"), Some("42"));
    assert!(PathParams::new().is_empty());
  }
}
