use frontpack_common::{ESTarget, Loader, ModuleOptions, ModuleRule, Pattern, RuleAction};
use frontpack_error::BuildResult;
use frontpack_fs::FileSystem;

use crate::builder::ConfigBuilder;

impl<Fs: FileSystem> ConfigBuilder<Fs> {
  pub(crate) fn create_module_options(&self) -> BuildResult<ModuleOptions> {
    let css_loader =
      |import_loaders| Loader::Css { source_map: true, import_loaders, filter_imports: true };

    let rules = vec![
      ModuleRule {
        exclude: Some(Pattern::new("node_modules")?),
        ..ModuleRule::new(Pattern::new(r"\.vue$")?, RuleAction::Use { loaders: vec![Loader::Vue] })
      },
      ModuleRule {
        // The editor bundles its own workers.
        exclude: Some(Pattern::new("monaco")?),
        ..ModuleRule::new(
          Pattern::new(r"\.worker\.js$")?,
          RuleAction::Use { loaders: vec![Loader::Worker { inline: "no-fallback".to_string() }] },
        )
      },
      ModuleRule {
        exclude: Some(Pattern::new("node_modules")?),
        ..ModuleRule::new(
          Pattern::new(r"\.js$")?,
          RuleAction::Use { loaders: vec![Loader::Esbuild { target: ESTarget::Es2015 }] },
        )
      },
      ModuleRule::new(
        Pattern::new(r"(?i).css$")?,
        RuleAction::Use { loaders: vec![Loader::CssExtract, css_loader(None)] },
      ),
      ModuleRule::new(
        Pattern::new(r"(?i).less$")?,
        RuleAction::Use {
          loaders: vec![
            Loader::CssExtract,
            css_loader(Some(1)),
            Loader::Less { source_map: true },
          ],
        },
      ),
      ModuleRule {
        include: Some(self.options.cwd.join("public/img/svg")),
        ..ModuleRule::new(Pattern::new(r"\.svg$")?, RuleAction::AssetSource)
      },
      // Assets referenced from style sheets are served from the site root, not from `css/`.
      ModuleRule::new(
        Pattern::new(r"\.(ttf|woff2?)$")?,
        RuleAction::AssetResource {
          filename: "fonts/[name][ext]".into(),
          public_path: "/".to_string(),
        },
      ),
      ModuleRule::new(
        Pattern::new(r"(?i)\.png$")?,
        RuleAction::AssetResource {
          filename: "img/webpack/[name][ext]".into(),
          public_path: "/".to_string(),
        },
      ),
    ];

    Ok(ModuleOptions { rules })
  }
}
