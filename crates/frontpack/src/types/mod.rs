pub mod build_output;

use std::sync::Arc;

use frontpack_common::NormalizedBuildOptions;

pub type SharedOptions = Arc<NormalizedBuildOptions>;
