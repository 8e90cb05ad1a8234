use std::{
  io,
  path::{Path, PathBuf},
};

use crate::file_system::FileSystem;

#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
  fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
    std::fs::read_dir(path)?.map(|entry| entry.map(|entry| entry.path())).collect()
  }

  fn is_file(&self, path: &Path) -> bool {
    std::fs::metadata(path).is_ok_and(|metadata| metadata.is_file())
  }
}

#[test]
fn test_read_dir() {
  let dir = tempfile::tempdir().unwrap();
  std::fs::write(dir.path().join("a.less"), "").unwrap();
  std::fs::create_dir(dir.path().join("nested")).unwrap();

  let fs = OsFileSystem;
  let mut children = fs.read_dir(dir.path()).unwrap();
  children.sort();
  assert_eq!(children, vec![dir.path().join("a.less"), dir.path().join("nested")]);
  assert!(fs.is_file(&dir.path().join("a.less")));
  assert!(!fs.is_file(&dir.path().join("nested")));
  assert!(!fs.is_file(&dir.path().join("missing.less")));
  assert!(fs.read_dir(&dir.path().join("missing")).is_err());
}
