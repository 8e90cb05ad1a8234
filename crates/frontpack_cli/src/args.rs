use std::path::PathBuf;

use clap::Args;

use crate::types::mode::Mode;

#[derive(Args)]
pub struct InputArgs {
  #[clap(long)]
  pub cwd: Option<PathBuf>,

  /// Falls back to `NODE_ENV`, anything but `development` builds for production.
  #[clap(long, short)]
  pub mode: Option<Mode>,

  #[clap(long)]
  pub themes_dir: Option<String>,

  #[clap(long)]
  pub themes_pattern: Option<String>,
}

#[derive(Args)]
pub struct OutputArgs {
  #[clap(long, short = 'd')]
  pub dir: Option<String>,

  /// Print the whole configuration as JSON instead of the entry summary.
  #[clap(long)]
  pub json: bool,

  /// Render the license report for the dependencies listed in this JSON file.
  #[clap(long)]
  pub licenses: Option<PathBuf>,
}
