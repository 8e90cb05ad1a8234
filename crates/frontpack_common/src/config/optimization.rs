use itertools::Itertools;
use serde::Serialize;

use crate::ESTarget;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationOptions {
  pub minimize: bool,
  pub minimizer: Vec<Minimizer>,
  pub split_chunks: SplitChunksOptions,
  pub module_ids: IdStrategy,
  pub chunk_ids: IdStrategy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "minimizer", rename_all = "kebab-case")]
pub enum Minimizer {
  Esbuild {
    target: ESTarget,
    minify: bool,
  },
  #[serde(rename_all = "camelCase")]
  Css {
    source_map: bool,
    preset: String,
    remove_all_comments: bool,
  },
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitChunksOptions {
  pub chunks: ChunksSelector,
  pub name_separator: String,
}

impl SplitChunksOptions {
  /// Names a split chunk after the chunks it was split from, e.g. `index-swagger`.
  pub fn chunk_name<'a>(&self, chunk_names: impl IntoIterator<Item = &'a str>) -> String {
    chunk_names.into_iter().join(&self.name_separator)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunksSelector {
  Async,
  Initial,
  All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
  Natural,
  Named,
  Deterministic,
}

#[test]
fn test_chunk_name() {
  let split_chunks =
    SplitChunksOptions { chunks: ChunksSelector::Async, name_separator: "-".to_string() };
  assert_eq!(split_chunks.chunk_name(["index", "swagger"]), "index-swagger");
  assert_eq!(split_chunks.chunk_name(["index"]), "index");
  assert_eq!(split_chunks.chunk_name([]), "");
}
