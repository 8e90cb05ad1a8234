use std::path::{Path, PathBuf};

use frontpack_utils::path_ext::PathExt;
use serde::Serialize;

use crate::{ESTarget, FilenameTemplate, Pattern};

#[derive(Debug, Clone, Serialize)]
pub struct ModuleOptions {
  pub rules: Vec<ModuleRule>,
}

impl ModuleOptions {
  /// The first rule whose conditions hold for `path`.
  pub fn find_rule(&self, path: &Path) -> Option<&ModuleRule> {
    self.rules.iter().find(|rule| rule.matches(path))
  }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleRule {
  pub test: Pattern,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub include: Option<PathBuf>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub exclude: Option<Pattern>,
  #[serde(flatten)]
  pub action: RuleAction,
}

impl ModuleRule {
  pub fn new(test: Pattern, action: RuleAction) -> Self {
    Self { test, include: None, exclude: None, action }
  }

  pub fn matches(&self, path: &Path) -> bool {
    let slashed = path.to_slash_string();
    self.test.is_match(&slashed)
      && self.include.as_ref().is_none_or(|dir| path.starts_with(dir))
      && !self.exclude.as_ref().is_some_and(|exclude| exclude.is_match(&slashed))
  }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RuleAction {
  /// Loaders run from last to first, like a function composition.
  Use { loaders: Vec<Loader> },
  /// Inlines the file content as a string.
  #[serde(rename = "asset/source")]
  AssetSource,
  /// Emits the file as a separate asset.
  #[serde(rename = "asset/resource", rename_all = "camelCase")]
  AssetResource { filename: FilenameTemplate, public_path: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "loader")]
pub enum Loader {
  #[serde(rename = "vue-loader")]
  Vue,
  #[serde(rename = "worker-loader")]
  Worker { inline: String },
  #[serde(rename = "esbuild-loader")]
  Esbuild { target: ESTarget },
  #[serde(rename = "mini-css-extract-plugin/loader")]
  CssExtract,
  /// `filter_imports` hands `url()` and `@import` references to the sub-resource filter.
  #[serde(rename = "css-loader", rename_all = "camelCase")]
  Css {
    source_map: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    import_loaders: Option<u32>,
    filter_imports: bool,
  },
  #[serde(rename = "less-loader", rename_all = "camelCase")]
  Less { source_map: bool },
}

#[cfg(test)]
mod tests {
  use std::path::Path;

  use super::{Loader, ModuleOptions, ModuleRule, RuleAction};
  use crate::Pattern;

  fn rule(test: &str, exclude: Option<&str>) -> ModuleRule {
    ModuleRule {
      exclude: exclude.map(|source| Pattern::new(source).unwrap()),
      ..ModuleRule::new(
        Pattern::new(test).unwrap(),
        RuleAction::Use { loaders: vec![Loader::Vue] },
      )
    }
  }

  #[test]
  fn test_matches() {
    let vue = rule(r"\.vue$", Some("node_modules"));
    assert!(vue.matches(Path::new("/srv/web_src/js/components/DiffFileTree.vue")));
    assert!(!vue.matches(Path::new("/srv/node_modules/pkg/Button.vue")));
    assert!(!vue.matches(Path::new("/srv/web_src/js/index.js")));

    let svg = ModuleRule {
      include: Some("/srv/public/img/svg".into()),
      ..ModuleRule::new(Pattern::new(r"\.svg$").unwrap(), RuleAction::AssetSource)
    };
    assert!(svg.matches(Path::new("/srv/public/img/svg/octicon-repo.svg")));
    assert!(!svg.matches(Path::new("/srv/node_modules/fomantic/icons.svg")));
  }

  #[test]
  fn test_find_rule_takes_first_match() {
    let module = ModuleOptions { rules: vec![rule(r"\.worker\.js$", None), rule(r"\.js$", None)] };
    let found = module.find_rule(Path::new("/srv/web_src/js/foo.worker.js")).unwrap();
    assert_eq!(found.test.as_str(), r"\.worker\.js$");
    assert!(module.find_rule(Path::new("/srv/web_src/less/index.less")).is_none());
  }
}
