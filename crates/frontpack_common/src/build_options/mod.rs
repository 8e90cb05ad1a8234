pub mod es_target;
pub mod filename_template;
pub mod mode;
pub mod normalized_build_options;

use std::path::PathBuf;

use crate::Mode;

#[derive(Default, Debug, Clone)]
pub struct BuildOptions {
  // --- Input
  pub cwd: Option<PathBuf>,
  pub mode: Option<Mode>,
  pub themes_dir: Option<String>,
  /// Matched against file names inside `themes_dir`.
  pub themes_pattern: Option<String>,

  // --- Output
  pub output_dir: Option<String>,
}
