use std::{ffi::OsStr, path::Path};

use anyhow::Context;
use frontpack_common::EntryMap;
use frontpack_error::BuildResult;
use frontpack_fs::FileSystem;
use frontpack_utils::path_ext::PathExt;

/// Maps every file in `dir` whose name matches `pattern` to a single-module entry named after the
/// file stem. The directory is listed once; entries come out sorted by name so repeated builds
/// agree regardless of directory order.
pub fn scan_themes(fs: &impl FileSystem, dir: &Path, pattern: &str) -> BuildResult<EntryMap> {
  let children = fs
    .read_dir(dir)
    .with_context(|| format!("Failed to read themes directory {}", dir.display()))?;

  let mut themes = children
    .into_iter()
    .filter(|path| {
      path
        .file_name()
        .and_then(OsStr::to_str)
        // Hidden files only match a pattern that itself starts with a dot.
        .is_some_and(|file_name| {
          (!file_name.starts_with('.') || pattern.starts_with('.'))
            && fast_glob::glob_match(pattern, file_name)
        })
    })
    .filter(|path| fs.is_file(path))
    .map(|path| (path.stem_name().into_owned(), path))
    .collect::<Vec<_>>();

  themes.sort_by(|(a, _), (b, _)| a.cmp(b));

  Ok(
    themes
      .into_iter()
      .map(|(name, path)| {
        tracing::debug!(theme = %name, path = %path.display(), "Found theme");
        (name, vec![path])
      })
      .collect(),
  )
}

#[cfg(test)]
mod tests {
  use frontpack_fs::OsFileSystem;

  use super::scan_themes;

  #[test]
  fn test_scan_themes() {
    let dir = tempfile::tempdir().unwrap();
    for file in [
      "theme-gitea.less",
      "theme-arc-green.less",
      ".theme-gitea.less",
      "._theme-arc-green.less",
      "README.md",
      "theme-auto.css",
    ] {
      std::fs::write(dir.path().join(file), "").unwrap();
    }
    std::fs::create_dir(dir.path().join("partial.less")).unwrap();

    let themes = scan_themes(&OsFileSystem, dir.path(), "*.less").unwrap();
    assert_eq!(themes.keys().collect::<Vec<_>>(), vec!["theme-arc-green", "theme-gitea"]);
    assert_eq!(themes["theme-gitea"], vec![dir.path().join("theme-gitea.less")]);
  }

  #[test]
  fn test_hidden_files_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".theme-gitea.less"), "").unwrap();
    std::fs::write(dir.path().join("theme-gitea.less"), "").unwrap();

    let themes = scan_themes(&OsFileSystem, dir.path(), "*.less").unwrap();
    assert_eq!(themes.keys().collect::<Vec<_>>(), vec!["theme-gitea"]);
    let hidden = scan_themes(&OsFileSystem, dir.path(), ".*.less").unwrap();
    assert_eq!(hidden.keys().collect::<Vec<_>>(), vec![".theme-gitea"]);
  }

  #[test]
  fn test_scan_empty_dir() {
    let dir = tempfile::tempdir().unwrap();
    assert!(scan_themes(&OsFileSystem, dir.path(), "*.less").unwrap().is_empty());
  }

  #[test]
  fn test_missing_dir_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("themes");
    let error = scan_themes(&OsFileSystem, &missing, "*.less").unwrap_err();
    assert_eq!(error.len(), 1);
    assert!(error[0].to_string().starts_with("Failed to read themes directory"));
  }
}
