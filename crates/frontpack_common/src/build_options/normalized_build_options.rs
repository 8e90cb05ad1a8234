use std::path::PathBuf;

use crate::Mode;

#[derive(Debug, Clone)]
pub struct NormalizedBuildOptions {
  pub cwd: PathBuf,
  pub mode: Mode,
  pub themes_dir: String,
  pub themes_pattern: String,
  pub output_dir: String,
}

impl NormalizedBuildOptions {
  #[inline]
  pub fn is_production(&self) -> bool {
    self.mode.is_production()
  }

  pub fn themes_path(&self) -> PathBuf {
    self.cwd.join(&self.themes_dir)
  }

  pub fn output_path(&self) -> PathBuf {
    self.cwd.join(&self.output_dir)
  }
}
