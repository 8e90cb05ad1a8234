use frontpack_common::{PerformanceOptions, ResolveOptions, WatchOptions};
use frontpack_fs::FileSystem;
use frontpack_utils::indexmap::FxIndexMap;

use crate::builder::ConfigBuilder;

impl<Fs: FileSystem> ConfigBuilder<Fs> {
  pub(crate) fn create_resolve() -> ResolveOptions {
    let mut alias = FxIndexMap::default();
    // The package's default export is the runtime-only build, templates need the compiler.
    alias.insert("vue$".to_string(), "vue/dist/vue.esm.js".to_string());
    ResolveOptions { symlinks: false, alias }
  }

  pub(crate) fn create_watch_options() -> WatchOptions {
    WatchOptions { ignored: vec!["node_modules/**".to_string()] }
  }

  pub(crate) fn create_performance() -> PerformanceOptions {
    PerformanceOptions { hints: false, max_entrypoint_size: None, max_asset_size: None }
  }
}
