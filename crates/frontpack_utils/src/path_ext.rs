use std::borrow::Cow;

use sugar_path::SugarPath;

pub trait PathExt {
  /// Forward-slash rendition, used wherever paths are matched against string patterns.
  fn to_slash_string(&self) -> String;

  /// File name without its last extension, e.g. `theme-dark` for `themes/theme-dark.less`.
  fn stem_name(&self) -> Cow<str>;
}

impl PathExt for std::path::Path {
  fn to_slash_string(&self) -> String {
    self.to_slash_lossy().into_owned()
  }

  fn stem_name(&self) -> Cow<str> {
    self.file_stem().map_or_else(|| self.to_string_lossy(), |stem| stem.to_string_lossy())
  }
}

#[test]
fn test_stem_name() {
  use std::path::Path;

  let root = Path::new(".").join("web_src").join("less").join("themes");
  assert_eq!(root.join("theme-arc-green.less").stem_name(), "theme-arc-green");
  assert_eq!(root.join("eventsource.sharedworker.js").stem_name(), "eventsource.sharedworker");
  assert_eq!(Path::new("no-extension").stem_name(), "no-extension");
}

#[test]
fn test_to_slash_string() {
  use std::path::Path;

  let path = Path::new("node_modules").join("fomantic").join("semantic.css");
  assert_eq!(path.to_slash_string(), "node_modules/fomantic/semantic.css");
}
