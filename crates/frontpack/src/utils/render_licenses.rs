use frontpack_common::{Dependency, LicenseCheckerOptions};
use frontpack_utils::wrap_text::wrap_text;

/// Renders the third-party license report: one block per dependency, each framed by rule lines
/// as wide as the report.
pub fn render_licenses(dependencies: &[Dependency], options: &LicenseCheckerOptions) -> String {
  let line = "-".repeat(options.line_width);

  dependencies
    .iter()
    .map(|dependency| {
      let license_name = options.license_name_for(dependency);
      let body = wrap_text(dependency.license_text.as_deref().unwrap_or_default(), options.line_width);
      format!("{line}\n{}@{} - {license_name}\n{line}\n{body}", dependency.name, dependency.version)
    })
    .collect::<Vec<_>>()
    .join("\n")
}

#[cfg(test)]
mod tests {
  use frontpack_common::{Dependency, LicenseCheckerOptions, LicenseOverride};
  use frontpack_utils::indexmap::FxIndexMap;

  use super::render_licenses;

  fn options() -> LicenseCheckerOptions {
    let mut overrides = FxIndexMap::default();
    overrides.insert(
      "jquery.are-you-sure@*".to_string(),
      LicenseOverride { license_name: "MIT".to_string() },
    );
    LicenseCheckerOptions { output_filename: "js/licenses.txt".to_string(), line_width: 20, overrides }
  }

  #[test]
  fn test_render_licenses() {
    let dependencies = vec![
      Dependency {
        name: "vue".to_string(),
        version: "2.6.14".to_string(),
        license_name: Some("MIT".to_string()),
        license_text: Some("Permission is hereby granted, free of charge".to_string()),
      },
      Dependency {
        name: "jquery.are-you-sure".to_string(),
        version: "1.9.0".to_string(),
        license_name: None,
        license_text: None,
      },
    ];

    let rule = "-".repeat(20);
    let rule = rule.as_str();
    let expected = [
      rule,
      "vue@2.6.14 - MIT",
      rule,
      "Permission is hereby",
      "granted, free of",
      "charge",
      rule,
      "jquery.are-you-sure@1.9.0 - MIT",
      rule,
      "",
    ]
    .join("\n");
    assert_eq!(render_licenses(&dependencies, &options()), expected);
  }

  #[test]
  fn test_render_no_dependencies() {
    assert_eq!(render_licenses(&[], &options()), "");
  }
}
