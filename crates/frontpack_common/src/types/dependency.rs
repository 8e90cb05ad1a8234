use serde::{Deserialize, Serialize};

/// A third-party package as reported by the license collector.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
  pub name: String,
  pub version: String,
  #[serde(default)]
  pub license_name: Option<String>,
  #[serde(default)]
  pub license_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseOverride {
  pub license_name: String,
}

impl Dependency {
  /// Matches selectors of the form `name@version-glob`, e.g. `jquery.are-you-sure@*` or
  /// `@scope/pkg@1.*`.
  pub fn matches_selector(&self, selector: &str) -> bool {
    match selector.rsplit_once('@') {
      Some((name, version)) if !name.is_empty() => {
        name == self.name && fast_glob::glob_match(version, &self.version)
      }
      _ => selector == self.name,
    }
  }
}

#[test]
fn test_matches_selector() {
  let dependency = Dependency {
    name: "jquery.are-you-sure".to_string(),
    version: "1.9.0".to_string(),
    license_name: None,
    license_text: None,
  };
  assert!(dependency.matches_selector("jquery.are-you-sure@*"));
  assert!(dependency.matches_selector("jquery.are-you-sure@1.*"));
  assert!(dependency.matches_selector("jquery.are-you-sure"));
  assert!(!dependency.matches_selector("jquery.are-you-sure@2.*"));
  assert!(!dependency.matches_selector("jquery@*"));

  let scoped = Dependency { name: "@babel/runtime".to_string(), ..dependency };
  assert!(scoped.matches_selector("@babel/runtime@*"));
  assert!(!scoped.matches_selector("@babel/core@*"));
}
