pub mod dependency;
pub mod pattern;
