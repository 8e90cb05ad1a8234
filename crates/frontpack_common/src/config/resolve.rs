use std::borrow::Cow;

use serde::Serialize;

use frontpack_utils::indexmap::FxIndexMap;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveOptions {
  pub symlinks: bool,
  /// A key ending in `$` only matches the exact request, other keys also match sub-paths.
  pub alias: FxIndexMap<String, String>,
}

impl ResolveOptions {
  pub fn apply_alias<'a>(&self, request: &'a str) -> Cow<'a, str> {
    for (key, target) in &self.alias {
      if let Some(exact) = key.strip_suffix('$') {
        if request == exact {
          return Cow::Owned(target.clone());
        }
      } else if request == key {
        return Cow::Owned(target.clone());
      } else if let Some(rest) = request.strip_prefix(key.as_str()) {
        if rest.starts_with('/') {
          return Cow::Owned(format!("{target}{rest}"));
        }
      }
    }
    Cow::Borrowed(request)
  }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchOptions {
  /// Globs relative to the project root.
  pub ignored: Vec<String>,
}

impl WatchOptions {
  pub fn is_ignored(&self, relative_path: &str) -> bool {
    self.ignored.iter().any(|glob| fast_glob::glob_match(glob, relative_path))
  }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceOptions {
  pub hints: bool,
  pub max_entrypoint_size: Option<u64>,
  pub max_asset_size: Option<u64>,
}

#[cfg(test)]
mod tests {
  use frontpack_utils::indexmap::FxIndexMap;

  use super::{ResolveOptions, WatchOptions};

  #[test]
  fn test_apply_alias() {
    let mut alias = FxIndexMap::default();
    alias.insert("vue$".to_string(), "vue/dist/vue.esm.js".to_string());
    alias.insert("@".to_string(), "/srv/web_src/js".to_string());
    let resolve = ResolveOptions { symlinks: false, alias };

    assert_eq!(resolve.apply_alias("vue"), "vue/dist/vue.esm.js");
    assert_eq!(resolve.apply_alias("vue/dist/vue.runtime.js"), "vue/dist/vue.runtime.js");
    assert_eq!(resolve.apply_alias("vuex"), "vuex");
    assert_eq!(resolve.apply_alias("@/utils.js"), "/srv/web_src/js/utils.js");
    assert_eq!(resolve.apply_alias("@babel/runtime"), "@babel/runtime");
  }

  #[test]
  fn test_is_ignored() {
    let watch = WatchOptions { ignored: vec!["node_modules/**".to_string()] };
    assert!(watch.is_ignored("node_modules/vue/dist/vue.esm.js"));
    assert!(!watch.is_ignored("web_src/js/index.js"));
  }
}
