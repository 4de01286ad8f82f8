use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tinta")]
#[command(about = "Read, merge and rewrite ComicInfo.xml metadata", long_about = None)]
pub struct Cli {
  /// Log at debug level (RUST_LOG still applies on top)
  #[arg(short, long, global = true)]
  pub verbose: bool,

  #[command(subcommand)]
  pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
  /// Print a readable summary of a ComicInfo.xml (file or directory containing one)
  Show {
    path: PathBuf,

    /// Dump the parsed record as JSON instead
    #[arg(long)]
    json: bool,
  },

  /// Overlay several documents left to right onto an empty record
  Merge {
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
  },

  /// Parse and re-serialize a document in canonical form
  Normalize {
    path: PathBuf,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Minimum integer digits for Number / AlternateNumber (overrides config)
    #[arg(long)]
    pad: Option<usize>,
  },

  /// Print a document holding only a default page list
  Pages { count: usize },

  /// List every credit role the ComicInfo export understands
  Roles,
}
