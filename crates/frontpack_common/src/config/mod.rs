pub mod module_rule;
pub mod optimization;
pub mod output;
pub mod plugin;
pub mod resolve;
pub mod stats;

use std::path::PathBuf;

use serde::Serialize;

use frontpack_utils::indexmap::FxIndexMap;

use crate::{
  Mode, ModuleOptions, OptimizationOptions, OutputOptions, PerformanceOptions, Plugin,
  ResolveOptions, StatsOptions, WatchOptions,
};

/// Bundle name to the modules concatenated into it, in order. Earlier modules may set up globals
/// that later ones rely on.
pub type EntryMap = FxIndexMap<String, Vec<PathBuf>>;

/// The configuration handed to the bundler. Serializes to the JSON the bundler reads.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
  pub mode: Mode,
  pub devtool: bool,
  pub entry: EntryMap,
  pub output: OutputOptions,
  pub optimization: OptimizationOptions,
  pub module: ModuleOptions,
  pub plugins: Vec<Plugin>,
  pub performance: PerformanceOptions,
  pub resolve: ResolveOptions,
  pub watch_options: WatchOptions,
  pub stats: StatsOptions,
}

impl BuildConfig {
  /// Output file of every entry, in entry order.
  pub fn entry_filenames(&self) -> impl Iterator<Item = (&str, String)> {
    self.entry.keys().map(|name| (name.as_str(), self.output.entry_filename(name)))
  }

  pub fn plugin(&self, name: &str) -> Option<&Plugin> {
    self.plugins.iter().find(|plugin| plugin.name() == name)
  }
}
