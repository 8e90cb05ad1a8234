use std::sync::Arc;

use frontpack_common::{BuildConfig, BuildOptions};
use frontpack_error::BuildResult;
use frontpack_fs::{FileSystem, OsFileSystem};

use crate::{
  types::{build_output::BuildOutput, SharedOptions},
  utils::normalize_options::normalize_options,
};

pub struct ConfigBuilder<Fs: FileSystem = OsFileSystem> {
  pub(crate) fs: Fs,
  pub(crate) options: SharedOptions,
}

impl ConfigBuilder {
  pub fn new(options: BuildOptions) -> BuildResult<Self> {
    Self::with_file_system(options, OsFileSystem)
  }
}

impl<Fs: FileSystem> ConfigBuilder<Fs> {
  pub fn with_file_system(options: BuildOptions, fs: Fs) -> BuildResult<Self> {
    let options = normalize_options(options)?;
    Ok(Self { fs, options: Arc::new(options) })
  }

  pub fn options(&self) -> &SharedOptions {
    &self.options
  }

  /// Produces the whole configuration in one pass. The themes directory is the only thing read
  /// from disk besides existence checks on the fixed entry modules.
  pub fn build(&self) -> BuildResult<BuildOutput> {
    let mut warnings = vec![];

    tracing::debug!(mode = %self.options.mode, cwd = %self.options.cwd.display(), "Building config");

    let config = BuildConfig {
      mode: self.options.mode,
      devtool: false,
      entry: self.create_entry(&mut warnings)?,
      output: self.create_output(),
      optimization: self.create_optimization(),
      module: self.create_module_options()?,
      plugins: self.create_plugins(),
      performance: Self::create_performance(),
      resolve: Self::create_resolve(),
      watch_options: Self::create_watch_options(),
      stats: self.create_stats()?,
    };

    Ok(BuildOutput { config, warnings })
  }
}
