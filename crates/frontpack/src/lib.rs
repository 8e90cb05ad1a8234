mod builder;
mod config;
mod types;
mod utils;

pub use crate::{
  builder::ConfigBuilder,
  types::build_output::BuildOutput,
  utils::{
    filter_css_import::{CssImportRequest, filter_css_import},
    render_licenses::render_licenses,
    scan_themes::scan_themes,
  },
};
pub use frontpack_common::*;
pub use frontpack_error::{BuildError, BuildResult};
pub use frontpack_fs::{FileSystem, OsFileSystem};
