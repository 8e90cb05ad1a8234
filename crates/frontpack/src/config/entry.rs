use frontpack_common::EntryMap;
use frontpack_error::BuildResult;
use frontpack_fs::FileSystem;

use crate::{builder::ConfigBuilder, utils::scan_themes::scan_themes};

/// Fixed bundles and their modules, relative to the project root. `index` loads jQuery before
/// the Fomantic script, which expects it as a global.
const ENTRIES: [(&str, &[&str]); 5] = [
  (
    "index",
    &[
      "web_src/js/jquery.js",
      "web_src/fomantic/build/semantic.js",
      "web_src/js/index.js",
      "web_src/fomantic/build/semantic.css",
      "web_src/less/index.less",
    ],
  ),
  ("swagger", &["web_src/js/standalone/swagger.js", "web_src/less/standalone/swagger.less"]),
  ("serviceworker", &["web_src/js/serviceworker.js"]),
  ("eventsource.sharedworker", &["web_src/js/features/eventsource.sharedworker.js"]),
  ("easymde", &["web_src/js/easymde.js", "node_modules/easymde/dist/easymde.min.css"]),
];

impl<Fs: FileSystem> ConfigBuilder<Fs> {
  pub(crate) fn create_entry(&self, warnings: &mut Vec<anyhow::Error>) -> BuildResult<EntryMap> {
    let cwd = &self.options.cwd;
    let mut entry = EntryMap::default();

    for (name, modules) in ENTRIES {
      let modules = modules.iter().map(|module| cwd.join(module)).collect::<Vec<_>>();
      for module in modules.iter().filter(|module| !self.fs.is_file(module)) {
        tracing::warn!(entry = name, module = %module.display(), "Entry module not found");
        warnings.push(anyhow::anyhow!(
          "Entry \"{name}\" refers to a missing module: {}",
          module.display()
        ));
      }
      entry.insert(name.to_string(), modules);
    }

    // A theme named like a fixed entry takes its place.
    let themes =
      scan_themes(&self.fs, &self.options.themes_path(), &self.options.themes_pattern)?;
    entry.extend(themes);

    Ok(entry)
  }
}
