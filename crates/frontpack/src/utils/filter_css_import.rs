use std::sync::LazyLock;

use regex::Regex;

static QUERY_OR_FRAGMENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[?#].+").unwrap());

/// Suffixes of icon font files. Matched without the dot, so `woff2` is not covered.
const ICON_FONT_SUFFIXES: [&str; 5] = ["eot", "ttf", "otf", "woff", "svg"];

/// Decides whether a `url()` or `@import` reference found in the style sheet at `resource_path`
/// gets resolved and emitted. The two vendor style sheets below ship icon fonts that are never
/// used, so their font references are dropped.
pub fn filter_css_import(url: &str, resource_path: &str) -> bool {
  let imported = QUERY_OR_FRAGMENT_RE.replace(url, "").to_lowercase();
  let is_icon_font = ICON_FONT_SUFFIXES.iter().any(|suffix| imported.ends_with(suffix));

  if resource_path.contains("fomantic") && (imported.contains("brand-icons") || is_icon_font) {
    return false;
  }

  if resource_path.contains("font-awesome") && is_icon_font {
    return false;
  }

  true
}

/// A reference as reported by the style loader, which passes the referencing file at a different
/// position for `url()` and `@import`.
#[derive(Debug, Clone, Copy)]
pub enum CssImportRequest<'a> {
  Url { url: &'a str, resource_path: &'a str },
  AtImport { url: &'a str, media: &'a str, resource_path: &'a str },
}

impl CssImportRequest<'_> {
  pub fn is_included(&self) -> bool {
    match *self {
      Self::Url { url, resource_path } | Self::AtImport { url, resource_path, .. } => {
        filter_css_import(url, resource_path)
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::{CssImportRequest, filter_css_import};

  const FOMANTIC: &str = "node_modules/fomantic/semantic.css";

  #[test]
  fn test_fomantic() {
    assert!(!filter_css_import("icons.woff", FOMANTIC));
    assert!(!filter_css_import("themes/default/assets/fonts/brand-icons.woff2", FOMANTIC));
    assert!(!filter_css_import("themes/default/assets/fonts/icons.EOT?#iefix", FOMANTIC));
    assert!(!filter_css_import("outline-icons.svg#icons", FOMANTIC));
    assert!(filter_css_import("logo.png", FOMANTIC));
    assert!(filter_css_import("themes/default/assets/fonts/Lato.woff2", FOMANTIC));
  }

  #[test]
  fn test_font_awesome() {
    assert!(!filter_css_import("awesome.svg", "font-awesome/style.css"));
    assert!(!filter_css_import("../fonts/fontawesome-webfont.ttf?v=4.7.0", "font-awesome/style.css"));
    assert!(filter_css_import("brand-icons.png", "font-awesome/style.css"));
  }

  #[test]
  fn test_other_style_sheets() {
    assert!(filter_css_import("style.css?v=2", "other/file.css"));
    assert!(filter_css_import("icons.woff", "web_src/less/index.less"));
    assert!(filter_css_import("brand-icons.svg", "web_src/less/index.less"));
  }

  #[test]
  fn test_lone_query_marker_is_kept() {
    // `?` with nothing after it is not stripped, so the suffix check sees `svg?`.
    assert!(filter_css_import("icons.svg?", FOMANTIC));
  }

  #[test]
  fn test_request_adapter() {
    assert!(!CssImportRequest::Url { url: "icons.woff", resource_path: FOMANTIC }.is_included());
    assert!(
      !CssImportRequest::AtImport { url: "icons.ttf", media: "screen", resource_path: FOMANTIC }
        .is_included()
    );
    assert!(
      CssImportRequest::AtImport { url: "site.css", media: "", resource_path: FOMANTIC }
        .is_included()
    );
  }
}
