use serde::Serialize;

use frontpack_utils::indexmap::FxIndexMap;

use crate::{Dependency, FilenameTemplate, FilenameTemplateData, LicenseOverride};

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "plugin", rename_all = "kebab-case")]
pub enum Plugin {
  VueLoader,
  MiniCssExtract(MiniCssExtractOptions),
  SourceMapDevTool(SourceMapDevToolOptions),
  MonacoEditor(MonacoEditorOptions),
  LicenseChecker(LicenseCheckerOptions),
  AddAsset(AddAssetOptions),
}

impl Plugin {
  pub fn name(&self) -> &'static str {
    match self {
      Self::VueLoader => "vue-loader",
      Self::MiniCssExtract(_) => "mini-css-extract",
      Self::SourceMapDevTool(_) => "source-map-dev-tool",
      Self::MonacoEditor(_) => "monaco-editor",
      Self::LicenseChecker(_) => "license-checker",
      Self::AddAsset(_) => "add-asset",
    }
  }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MiniCssExtractOptions {
  pub filename: FilenameTemplate,
  pub chunk_filename: FilenameTemplate,
}

impl MiniCssExtractOptions {
  pub fn css_filename(&self, name: &str, is_entry: bool) -> String {
    if is_entry { self.filename.render_name(name) } else { self.chunk_filename.render_name(name) }
  }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceMapDevToolOptions {
  pub filename: FilenameTemplate,
  /// Output files that get a source map, everything else ships without one.
  pub include: Vec<String>,
}

impl SourceMapDevToolOptions {
  pub fn map_filename(&self, file: &str) -> Option<String> {
    self.include.iter().any(|included| included == file).then(|| {
      self.filename.render(FilenameTemplateData { file: Some(file), ..Default::default() })
    })
  }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonacoEditorOptions {
  pub filename: FilenameTemplate,
}

impl MonacoEditorOptions {
  pub fn worker_filename(&self, worker: &str) -> String {
    self.filename.render_name(worker)
  }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseCheckerOptions {
  pub output_filename: String,
  pub line_width: usize,
  pub overrides: FxIndexMap<String, LicenseOverride>,
}

impl LicenseCheckerOptions {
  pub fn license_name_for<'a>(&'a self, dependency: &'a Dependency) -> &'a str {
    self
      .overrides
      .iter()
      .find(|(selector, _)| dependency.matches_selector(selector))
      .map(|(_, license)| license.license_name.as_str())
      .or(dependency.license_name.as_deref())
      .unwrap_or_default()
  }
}

/// Emits a fixed asset.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddAssetOptions {
  pub filename: String,
  pub source: String,
}

#[cfg(test)]
mod tests {
  use frontpack_utils::indexmap::FxIndexMap;

  use super::{
    LicenseCheckerOptions, MiniCssExtractOptions, MonacoEditorOptions, SourceMapDevToolOptions,
  };
  use crate::{Dependency, LicenseOverride};

  #[test]
  fn test_map_filename() {
    let options = SourceMapDevToolOptions {
      filename: "[file].map".into(),
      include: vec!["js/index.js".to_string(), "css/index.css".to_string()],
    };
    assert_eq!(options.map_filename("js/index.js").as_deref(), Some("js/index.js.map"));
    assert_eq!(options.map_filename("css/index.css").as_deref(), Some("css/index.css.map"));
    assert_eq!(options.map_filename("js/swagger.js"), None);
  }

  #[test]
  fn test_css_filename() {
    let options =
      MiniCssExtractOptions { filename: "css/[name].css".into(), chunk_filename: "css/[id].css".into() };
    assert_eq!(options.css_filename("index", true), "css/index.css");
    assert_eq!(options.css_filename("index", false), "css/[id].css");
  }

  #[test]
  fn test_worker_filename() {
    let options = MonacoEditorOptions { filename: "js/monaco-[name].worker.js".into() };
    assert_eq!(options.worker_filename("editor"), "js/monaco-editor.worker.js");
  }

  #[test]
  fn test_license_name_for() {
    let mut overrides = FxIndexMap::default();
    overrides.insert(
      "jquery.are-you-sure@*".to_string(),
      LicenseOverride { license_name: "MIT".to_string() },
    );
    let options =
      LicenseCheckerOptions { output_filename: "js/licenses.txt".to_string(), line_width: 80, overrides };

    let overridden = Dependency {
      name: "jquery.are-you-sure".to_string(),
      version: "1.9.0".to_string(),
      license_name: None,
      license_text: None,
    };
    assert_eq!(options.license_name_for(&overridden), "MIT");

    let plain = Dependency {
      name: "vue".to_string(),
      license_name: Some("MIT".to_string()),
      ..overridden.clone()
    };
    assert_eq!(options.license_name_for(&plain), "MIT");

    let unknown = Dependency { name: "mystery".to_string(), ..overridden };
    assert_eq!(options.license_name_for(&unknown), "");
  }
}
