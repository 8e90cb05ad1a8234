use frontpack_common::{
  AddAssetOptions, LicenseCheckerOptions, LicenseOverride, MiniCssExtractOptions,
  MonacoEditorOptions, Plugin, SourceMapDevToolOptions,
};
use frontpack_fs::FileSystem;
use frontpack_utils::indexmap::FxIndexMap;

use crate::builder::ConfigBuilder;

const LICENSES_FILENAME: &str = "js/licenses.txt";

impl<Fs: FileSystem> ConfigBuilder<Fs> {
  pub(crate) fn create_plugins(&self) -> Vec<Plugin> {
    let licenses = if self.options.is_production() {
      let mut overrides = FxIndexMap::default();
      overrides.insert(
        "jquery.are-you-sure@*".to_string(),
        LicenseOverride { license_name: "MIT".to_string() },
      );
      Plugin::LicenseChecker(LicenseCheckerOptions {
        output_filename: LICENSES_FILENAME.to_string(),
        line_width: 80,
        overrides,
      })
    } else {
      Plugin::AddAsset(AddAssetOptions {
        filename: LICENSES_FILENAME.to_string(),
        source: "Licenses are disabled during development".to_string(),
      })
    };

    vec![
      Plugin::VueLoader,
      Plugin::MiniCssExtract(MiniCssExtractOptions {
        filename: "css/[name].css".into(),
        chunk_filename: "css/[name].css".into(),
      }),
      Plugin::SourceMapDevTool(SourceMapDevToolOptions {
        filename: "[file].map".into(),
        include: vec!["js/index.js".to_string(), "css/index.css".to_string()],
      }),
      Plugin::MonacoEditor(MonacoEditorOptions { filename: "js/monaco-[name].worker.js".into() }),
      licenses,
    ]
  }
}
