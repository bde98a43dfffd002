//! Common types used across the API

use serde::{Deserialize, Serialize};

/// HTTP method used by an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
  Get,
  Post,
}

impl std::fmt::Display for Method {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Method::Get => write!(f, "GET"),
      Method::Post => write!(f, "POST"),
    }
  }
}

impl Method {
  /// Method name as it appears in the signing string
  pub fn as_str(&self) -> &'static str {
    match self {
      Method::Get => "GET",
      Method::Post => "POST",
    }
  }
}

/// The three API surfaces exposed by Wealth Access
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Surface {
  /// Endpoints acting on behalf of an advisor
  Advisor,
  /// Endpoints acting on behalf of a single end user
  Investor,
  /// Firm-wide endpoints
  Firm,
}

impl std::fmt::Display for Surface {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Surface::Advisor => write!(f, "advisor"),
      Surface::Investor => write!(f, "investor"),
      Surface::Firm => write!(f, "firm"),
    }
  }
}

impl std::str::FromStr for Surface {
  type Err = String;

  /// Parse a surface name, ignoring case
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "advisor" => Ok(Surface::Advisor),
      "investor" => Ok(Surface::Investor),
      "firm" => Ok(Surface::Firm),
      _ => Err(format!("Unknown surface '{}', expected advisor, investor or firm", s)),
    }
  }
}

impl Surface {
  /// All surfaces in display order
  pub fn all() -> [Surface; 3] {
    [Surface::Advisor, Surface::Investor, Surface::Firm]
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_method_display() {
    assert_eq!(Method::Get.to_string(), "GET");
    assert_eq!(Method::Post.as_str(), "POST");
  }

  #[test]
  fn test_surface_parsing() {
    assert_eq!("advisor".parse::<Surface>(), Ok(Surface::Advisor));
    assert_eq!("Firm".parse::<Surface>(), Ok(Surface::Firm));
    let err = "bank".parse::<Surface>().unwrap_err();
    assert!(err.contains("bank"));
  }
}
