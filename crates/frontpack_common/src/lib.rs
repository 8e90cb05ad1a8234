mod build_options;
mod config;
mod types;

pub use build_options::{
  BuildOptions,
  es_target::ESTarget,
  filename_template::{FilenameTemplate, FilenameTemplateData},
  mode::Mode,
  normalized_build_options::NormalizedBuildOptions,
};

pub use crate::{
  config::{
    BuildConfig, EntryMap,
    module_rule::{Loader, ModuleOptions, ModuleRule, RuleAction},
    optimization::{ChunksSelector, IdStrategy, Minimizer, OptimizationOptions, SplitChunksOptions},
    output::{OutputOptions, monaco_language},
    plugin::{
      AddAssetOptions, LicenseCheckerOptions, MiniCssExtractOptions, MonacoEditorOptions, Plugin,
      SourceMapDevToolOptions,
    },
    resolve::{PerformanceOptions, ResolveOptions, WatchOptions},
    stats::StatsOptions,
  },
  types::{
    dependency::{Dependency, LicenseOverride},
    pattern::Pattern,
  },
};
