use frontpack_common::BuildConfig;

pub struct BuildOutput {
  pub config: BuildConfig,
  /// Findings that did not stop the build, e.g. an entry module missing on disk.
  pub warnings: Vec<anyhow::Error>,
}
