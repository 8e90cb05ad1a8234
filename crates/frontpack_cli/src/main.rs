mod args;
mod types;

use std::{path::Path, process::ExitCode, time::Instant};

use ansi_term::Colour;
use anyhow::Context;
use args::{InputArgs, OutputArgs};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use frontpack::{BuildConfig, BuildOptions, ConfigBuilder, Dependency, Plugin, render_licenses};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Commands {
  #[clap(flatten)]
  input: InputArgs,

  #[clap(flatten)]
  output: OutputArgs,
}

fn print_entries(config: &BuildConfig) {
  let entries = config
    .entry_filenames()
    .map(|(name, filename)| (filename, config.entry[name].len()))
    .collect::<Vec<_>>();
  let left = entries.iter().map(|(filename, _)| filename.len()).max().unwrap_or_default();

  let dim = Colour::White.dimmed();
  let color = Colour::Cyan;

  for (filename, modules) in entries {
    let filename_len = filename.len();
    println!(
      "{}{}{:left$} {}{}{}",
      dim.paint("<DIR>/"),
      color.paint(filename),
      "",
      dim.paint("entry"),
      dim.paint(" │ modules: "),
      modules,
      left = left - filename_len,
    );
  }
}

fn render_license_report(config: &BuildConfig, path: &Path) -> anyhow::Result<String> {
  match config.plugin("license-checker") {
    Some(Plugin::LicenseChecker(options)) => {
      let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
      let dependencies: Vec<Dependency> = serde_json::from_str(&source)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
      Ok(render_licenses(&dependencies, options))
    }
    _ => match config.plugin("add-asset") {
      Some(Plugin::AddAsset(asset)) => Ok(asset.source.clone()),
      _ => anyhow::bail!("No license output is configured"),
    },
  }
}

fn main() -> ExitCode {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_env("FRONTPACK_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
    )
    .with_writer(std::io::stderr)
    .init();

  let args = Commands::parse();
  let InputArgs { cwd, mode, themes_dir, themes_pattern } = args.input;
  let mode = mode.map_or_else(
    || frontpack::Mode::from_node_env(std::env::var("NODE_ENV").ok().as_deref()),
    Into::into,
  );

  let start = Instant::now();
  let output = ConfigBuilder::new(BuildOptions {
    cwd,
    mode: Some(mode),
    themes_dir,
    themes_pattern,
    output_dir: args.output.dir,
  })
  .and_then(|builder| builder.build());

  let output = match output {
    Ok(output) => output,
    Err(errors) => {
      for error in errors.into_vec() {
        eprintln!("{} {:#}", Colour::Red.paint("Error:"), error);
      }
      return ExitCode::FAILURE;
    }
  };

  tracing::debug!(entries = output.config.entry.len(), "Config built");

  for warning in &output.warnings {
    eprintln!("{} {}", Colour::Yellow.paint("Warning:"), warning);
  }

  if let Some(path) = &args.output.licenses {
    return match render_license_report(&output.config, path) {
      Ok(report) => {
        println!("{report}");
        ExitCode::SUCCESS
      }
      Err(error) => {
        eprintln!("{} {:#}", Colour::Red.paint("Error:"), error);
        ExitCode::FAILURE
      }
    };
  }

  if args.output.json {
    match serde_json::to_string_pretty(&output.config) {
      Ok(json) => println!("{json}"),
      Err(error) => {
        eprintln!("{} {}", Colour::Red.paint("Error:"), error);
        return ExitCode::FAILURE;
      }
    }
    return ExitCode::SUCCESS;
  }

  print_entries(&output.config);

  let elapsed = format!("{:.2} ms", start.elapsed().as_secs_f64() * 1000.0);
  println!(
    "\n{} {} config ready in {}",
    Colour::Green.paint("✔"),
    output.config.mode,
    Colour::White.bold().paint(elapsed)
  );
  ExitCode::SUCCESS
}
