use std::fmt::Display;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
  #[default]
  Production,
  Development,
}

impl Mode {
  /// Only the exact value `development` selects development mode, an unset or unknown value
  /// builds for production.
  pub fn from_node_env(value: Option<&str>) -> Self {
    match value {
      Some("development") => Self::Development,
      _ => Self::Production,
    }
  }

  #[inline]
  pub fn is_production(self) -> bool {
    matches!(self, Self::Production)
  }
}

impl Display for Mode {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Production => write!(f, "production"),
      Self::Development => write!(f, "development"),
    }
  }
}

#[test]
fn test_from_node_env() {
  assert_eq!(Mode::from_node_env(None), Mode::Production);
  assert_eq!(Mode::from_node_env(Some("development")), Mode::Development);
  assert_eq!(Mode::from_node_env(Some("production")), Mode::Production);
  assert_eq!(Mode::from_node_env(Some("Development")), Mode::Production);
  assert_eq!(Mode::from_node_env(Some("")), Mode::Production);
}
