use regex::Regex;
use serde::Serialize;

/// A regular expression that serializes as its source text.
#[derive(Debug, Clone)]
pub struct Pattern(Regex);

impl Pattern {
  pub fn new(source: &str) -> anyhow::Result<Self> {
    Ok(Self(Regex::new(source)?))
  }

  #[inline]
  pub fn is_match(&self, haystack: &str) -> bool {
    self.0.is_match(haystack)
  }

  pub fn as_str(&self) -> &str {
    self.0.as_str()
  }
}

impl PartialEq for Pattern {
  fn eq(&self, other: &Self) -> bool {
    self.as_str() == other.as_str()
  }
}

impl Eq for Pattern {}

impl Serialize for Pattern {
  fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(self.as_str())
  }
}

#[test]
fn test_pattern() {
  let pattern = Pattern::new(r"(?i).css$").unwrap();
  assert!(pattern.is_match("web_src/fomantic/build/semantic.CSS"));
  assert!(!pattern.is_match("web_src/js/index.js"));
  assert_eq!(serde_json::to_string(&pattern).unwrap(), r#""(?i).css$""#);
  assert!(Pattern::new("(unclosed").is_err());
}
