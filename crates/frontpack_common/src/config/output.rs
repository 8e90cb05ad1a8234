use std::{path::PathBuf, sync::LazyLock};

use regex::Regex;
use serde::Serialize;

use crate::FilenameTemplate;

static MONACO_LANGUAGE_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"monaco.*languages?_.+?_(.+?)_").unwrap());

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputOptions {
  pub path: PathBuf,
  pub filename: FilenameTemplate,
  /// Entries listed here are emitted at the output root through `root_filename`.
  pub root_entries: Vec<String>,
  pub root_filename: FilenameTemplate,
  pub chunk_filename: FilenameTemplate,
  pub language_chunk_filename: FilenameTemplate,
}

impl OutputOptions {
  pub fn new(path: PathBuf) -> Self {
    Self {
      path,
      filename: "js/[name].js".into(),
      // A service worker only controls pages below its own directory, so it has to live in `/`.
      root_entries: vec!["serviceworker".to_string()],
      root_filename: "[name].js".into(),
      chunk_filename: "js/[name].js".into(),
      language_chunk_filename: "js/monaco-language-[name].js".into(),
    }
  }

  pub fn entry_filename(&self, name: &str) -> String {
    if self.root_entries.iter().any(|root| root == name) {
      self.root_filename.render_name(name)
    } else {
      self.filename.render_name(name)
    }
  }

  /// Editor language chunks get a stable name derived from their id, everything else is named
  /// after the chunk itself.
  pub fn chunk_filename(&self, name: &str, id: &str) -> String {
    match monaco_language(id) {
      Some(language) => self.language_chunk_filename.render_name(&language),
      None => self.chunk_filename.render_name(name),
    }
  }
}

/// Extracts the lowercased language label from an editor language chunk id such as
/// `monaco-editor_esm_vs_basic-languages_python_python_js`.
pub fn monaco_language(chunk_id: &str) -> Option<String> {
  MONACO_LANGUAGE_RE
    .captures(chunk_id)
    .and_then(|captures| captures.get(1))
    .map(|label| label.as_str().to_lowercase())
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use super::{monaco_language, OutputOptions};

  fn output() -> OutputOptions {
    OutputOptions::new(PathBuf::from("/srv/app/public"))
  }

  #[test]
  fn test_entry_filename() {
    let output = output();
    assert_eq!(output.entry_filename("serviceworker"), "serviceworker.js");
    assert_eq!(output.entry_filename("index"), "js/index.js");
    assert_eq!(output.entry_filename("eventsource.sharedworker"), "js/eventsource.sharedworker.js");
    assert_eq!(output.entry_filename("theme-arc-green"), "js/theme-arc-green.js");
  }

  #[test]
  fn test_chunk_filename() {
    let output = output();
    assert_eq!(
      output.chunk_filename("anything", "monaco...languages_foo_Python_bar_"),
      "js/monaco-language-python.js"
    );
    assert_eq!(
      output.chunk_filename(
        "vendors",
        "node_modules_monaco-editor_esm_vs_basic-languages_python_python_js"
      ),
      "js/monaco-language-python.js"
    );
    assert_eq!(output.chunk_filename("vendors", "node_modules_vue_dist_vue_js"), "js/vendors.js");
    assert_eq!(output.chunk_filename("contributors", ""), "js/contributors.js");
  }

  #[test]
  fn test_chunk_filename_is_stable() {
    let output = output();
    let id = "monaco-editor_esm_vs_basic-languages_Go_go_js";
    assert_eq!(output.chunk_filename("a", id), output.chunk_filename("a", id));
  }

  #[test]
  fn test_monaco_language() {
    assert_eq!(monaco_language("monaco_language_x_Rust_y"), Some("rust".to_string()));
    assert_eq!(monaco_language("monaco_languages_x_"), None);
    assert_eq!(monaco_language("languages_x_go_"), None);
  }
}
