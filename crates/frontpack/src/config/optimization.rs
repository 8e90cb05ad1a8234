use frontpack_common::{
  ChunksSelector, ESTarget, IdStrategy, Minimizer, OptimizationOptions, SplitChunksOptions,
};
use frontpack_fs::FileSystem;

use crate::builder::ConfigBuilder;

impl<Fs: FileSystem> ConfigBuilder<Fs> {
  pub(crate) fn create_optimization(&self) -> OptimizationOptions {
    OptimizationOptions {
      minimize: self.options.is_production(),
      minimizer: vec![
        Minimizer::Esbuild { target: ESTarget::Es2015, minify: true },
        Minimizer::Css {
          source_map: true,
          preset: "default".to_string(),
          remove_all_comments: true,
        },
      ],
      split_chunks: SplitChunksOptions {
        chunks: ChunksSelector::Async,
        name_separator: "-".to_string(),
      },
      module_ids: IdStrategy::Named,
      chunk_ids: IdStrategy::Named,
    }
  }
}
