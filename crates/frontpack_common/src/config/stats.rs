use serde::Serialize;

use crate::Pattern;

/// Controls the console report printed after a build. `None` sizes mean unbounded.
#[allow(clippy::struct_excessive_bools)] // Mirrors the reporter's own switches one to one
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsOptions {
  pub assets_sort: String,
  pub assets_space: Option<usize>,
  pub cached: bool,
  pub cached_modules: bool,
  pub children: bool,
  pub chunk_modules: bool,
  pub chunk_origins: bool,
  pub chunks_sort: String,
  pub colors: bool,
  pub entrypoints: bool,
  pub exclude_assets: Vec<Pattern>,
  pub group_assets_by_chunk: bool,
  pub group_assets_by_emit_status: bool,
  pub group_assets_by_info: bool,
  pub group_modules_by_attributes: bool,
  pub modules: bool,
  pub reasons: bool,
  pub runtime_modules: bool,
}

impl StatsOptions {
  pub fn is_asset_excluded(&self, asset: &str) -> bool {
    self.exclude_assets.iter().any(|pattern| pattern.is_match(asset))
  }

  /// Asset names that survive `exclude_assets`, in report order.
  pub fn reported_assets<'a>(&self, assets: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    let mut reported =
      assets.into_iter().filter(|asset| !self.is_asset_excluded(asset)).collect::<Vec<_>>();
    if self.assets_sort == "name" {
      reported.sort_unstable();
    }
    reported
  }
}

#[cfg(test)]
mod tests {
  use super::StatsOptions;
  use crate::Pattern;

  fn stats(exclude_assets: &[&str]) -> StatsOptions {
    StatsOptions {
      assets_sort: "name".to_string(),
      assets_space: None,
      cached: false,
      cached_modules: false,
      children: false,
      chunk_modules: false,
      chunk_origins: false,
      chunks_sort: "name".to_string(),
      colors: true,
      entrypoints: false,
      exclude_assets: exclude_assets.iter().map(|source| Pattern::new(source).unwrap()).collect(),
      group_assets_by_chunk: false,
      group_assets_by_emit_status: false,
      group_assets_by_info: false,
      group_modules_by_attributes: false,
      modules: false,
      reasons: false,
      runtime_modules: false,
    }
  }

  #[test]
  fn test_reported_assets() {
    let stats = stats(&[r"^js/monaco-language-.+\.js$"]);
    assert!(stats.is_asset_excluded("js/monaco-language-python.js"));
    assert!(!stats.is_asset_excluded("js/monaco-editor.worker.js"));
    assert_eq!(
      stats.reported_assets(["js/index.js", "js/monaco-language-go.js", "css/index.css"]),
      vec!["css/index.css", "js/index.js"]
    );
  }
}
