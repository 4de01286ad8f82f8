mod cli;
mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use tinta_cix::{CixOptions, ComicInfoXml};
use tinta_config::{TintaPaths, TomlConfigBackend};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};

fn main() -> Result<()> {
  let cli = Cli::parse();
  init_tracing(cli.verbose)?;

  let codec = load_codec()?;

  match cli.command {
    Command::Show { path, json } => commands::emit(&commands::show(&codec, &path, json)?, None),
    Command::Merge { paths, output } => commands::emit(&commands::merge(&codec, &paths)?, output.as_deref()),
    Command::Normalize { path, output, pad } => {
      commands::emit(&commands::normalize(&codec, &path, pad)?, output.as_deref())
    }
    Command::Pages { count } => commands::emit(&commands::pages(&codec, count)?, None),
    Command::Roles => commands::emit(&commands::roles(), None),
  }
}

fn init_tracing(verbose: bool) -> Result<()> {
  let level = if verbose { "debug" } else { "info" };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env().add_directive(level.parse()?))
    .with_writer(std::io::stderr)
    .init();
  Ok(())
}

/// Codec configured from the `[comicinfo]` section of tinta.toml.
fn load_codec() -> Result<ComicInfoXml> {
  let paths = TintaPaths::detect().context("resolving config directories")?;
  let backend = TomlConfigBackend::new(paths);
  let options = CixOptions::load_from(&backend)
    .with_context(|| format!("loading {}", backend.paths().config_file().display()))?;

  debug!(issue_padding = options.issue_padding, indent_width = options.indent_width, "comicinfo options");
  Ok(ComicInfoXml::with_options(options))
}
