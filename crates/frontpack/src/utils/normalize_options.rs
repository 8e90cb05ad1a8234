use anyhow::Context;
use frontpack_common::{BuildOptions, NormalizedBuildOptions};
use frontpack_error::BuildResult;
use sugar_path::SugarPath;

pub fn normalize_options(raw_options: BuildOptions) -> BuildResult<NormalizedBuildOptions> {
  let cwd = match raw_options.cwd {
    Some(cwd) => cwd.absolutize(),
    None => std::env::current_dir().context("Failed to get current dir")?,
  };

  Ok(NormalizedBuildOptions {
    cwd,
    mode: raw_options.mode.unwrap_or_default(),
    themes_dir: raw_options.themes_dir.unwrap_or_else(|| "web_src/less/themes".to_string()),
    themes_pattern: raw_options.themes_pattern.unwrap_or_else(|| "*.less".to_string()),
    output_dir: raw_options.output_dir.unwrap_or_else(|| "public".to_string()),
  })
}

#[test]
fn test_defaults() {
  use frontpack_common::Mode;

  let options =
    normalize_options(BuildOptions { cwd: Some("/srv/app".into()), ..Default::default() }).unwrap();
  assert_eq!(options.mode, Mode::Production);
  assert_eq!(options.themes_path(), std::path::Path::new("/srv/app/web_src/less/themes"));
  assert_eq!(options.themes_pattern, "*.less");
  assert_eq!(options.output_path(), std::path::Path::new("/srv/app/public"));
}
