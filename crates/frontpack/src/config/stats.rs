use frontpack_common::{Pattern, StatsOptions};
use frontpack_error::BuildResult;
use frontpack_fs::FileSystem;

use crate::builder::ConfigBuilder;

impl<Fs: FileSystem> ConfigBuilder<Fs> {
  pub(crate) fn create_stats(&self) -> BuildResult<StatsOptions> {
    let mut exclude_assets = vec![Pattern::new(r"^js/monaco-language-.+\.js$")?];
    if !self.options.is_production() {
      exclude_assets.push(Pattern::new(r"^js/licenses.txt$")?);
    }

    Ok(StatsOptions {
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
      exclude_assets,
      group_assets_by_chunk: false,
      group_assets_by_emit_status: false,
      group_assets_by_info: false,
      group_modules_by_attributes: false,
      modules: false,
      reasons: false,
      runtime_modules: false,
    })
  }
}
