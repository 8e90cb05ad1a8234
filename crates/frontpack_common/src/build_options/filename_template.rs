use serde::Serialize;

/// A file name with `[name]`, `[ext]` and `[file]` placeholders, e.g. `css/[name].css`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FilenameTemplate(String);

#[derive(Debug, Default, Clone, Copy)]
pub struct FilenameTemplateData<'a> {
  pub name: Option<&'a str>,
  /// Including the leading dot.
  pub ext: Option<&'a str>,
  pub file: Option<&'a str>,
}

impl FilenameTemplate {
  pub fn new(template: impl Into<String>) -> Self {
    Self(template.into())
  }

  pub fn template(&self) -> &str {
    &self.0
  }

  /// Placeholders without a value are left untouched.
  pub fn render(&self, data: FilenameTemplateData<'_>) -> String {
    let mut rendered = self.0.clone();
    for (placeholder, value) in [("[name]", data.name), ("[ext]", data.ext), ("[file]", data.file)]
    {
      if let Some(value) = value {
        rendered = rendered.replace(placeholder, value);
      }
    }
    rendered
  }

  pub fn render_name(&self, name: &str) -> String {
    self.render(FilenameTemplateData { name: Some(name), ..Default::default() })
  }
}

impl From<&str> for FilenameTemplate {
  fn from(value: &str) -> Self {
    Self::new(value)
  }
}

#[test]
fn test_render() {
  let template = FilenameTemplate::new("fonts/[name][ext]");
  assert_eq!(
    template.render(FilenameTemplateData { name: Some("inter"), ext: Some(".woff2"), file: None }),
    "fonts/inter.woff2"
  );
  assert_eq!(template.render_name("inter"), "fonts/inter[ext]");
  assert_eq!(
    FilenameTemplate::new("[file].map")
      .render(FilenameTemplateData { file: Some("js/index.js"), ..Default::default() }),
    "js/index.js.map"
  );
}
