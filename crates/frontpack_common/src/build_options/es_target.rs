use serde::Serialize;

/// Syntax level handed to the script transpiler and minifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ESTarget {
  #[default]
  Es2015,
}

#[test]
fn test_serialize_target() {
  assert_eq!(serde_json::to_string(&ESTarget::Es2015).unwrap(), r#""es2015""#);
}
