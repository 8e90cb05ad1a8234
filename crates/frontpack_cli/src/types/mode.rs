use clap::ValueEnum;

#[derive(PartialEq, Eq, Clone, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum Mode {
  Production,
  Development,
}

impl From<Mode> for frontpack::Mode {
  fn from(value: Mode) -> Self {
    match value {
      Mode::Production => frontpack::Mode::Production,
      Mode::Development => frontpack::Mode::Development,
    }
  }
}
