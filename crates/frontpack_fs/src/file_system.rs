use std::{io, path::Path, path::PathBuf};

pub trait FileSystem: Send + Sync {
  /// Lists the direct children of `path`. Order is whatever the backing store yields.
  fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>>;

  fn is_file(&self, path: &Path) -> bool;
}
