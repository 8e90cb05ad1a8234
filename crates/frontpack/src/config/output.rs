use frontpack_common::OutputOptions;
use frontpack_fs::FileSystem;

use crate::builder::ConfigBuilder;

impl<Fs: FileSystem> ConfigBuilder<Fs> {
  pub(crate) fn create_output(&self) -> OutputOptions {
    OutputOptions::new(self.options.output_path())
  }
}
