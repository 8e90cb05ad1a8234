pub mod filter_css_import;
pub mod normalize_options;
pub mod render_licenses;
pub mod scan_themes;
