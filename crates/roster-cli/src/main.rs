//! Command line interface for the roster authors page generator.
//!
//! This crate wraps the `roster` library so a documentation build (or a
//! person editing `.authors.yml`) can:
//! - Generate the authors page into the site's content directory
//! - Check the roster file and list every problem in it
//! - Print the rendered page without writing anything
//!
//! # Usage
//!
//! ```bash
//! # Generate docs/authors.md from .authors.yml
//! roster build
//!
//! # Use a different content directory and output page
//! roster build --docs-dir site/docs --output-page about/team.md
//!
//! # Validate only, printing the normalized roster as JSON
//! roster check --json
//!
//! # Preview the page
//! roster render
//! ```
//!
//! Options can also come from a TOML file passed with `--config`; flags win
//! over the file. Logging goes to stderr and is raised with `-v`.

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::{path::PathBuf, process::ExitCode};

use clap::{builder::ArgAction, Args, Parser, Subcommand};
use console::style;
use roster::{
  error::RosterError,
  plugin::{AuthorsPlugin, PluginConfig, SiteConfig},
  schema::Roster,
};
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod error;

use crate::{commands::*, error::*};

/// Prefix for information messages
static INFO_PREFIX: &str = "ℹ ";
/// Prefix for success messages
static SUCCESS_PREFIX: &str = "✓ ";
/// Prefix for warning messages
static WARNING_PREFIX: &str = "⚠️ ";
/// Prefix for error messages
static ERROR_PREFIX: &str = "✗ ";
/// Branch character for tree structure
static TREE_BRANCH: &str = "├";
/// Leaf character for tree structure (end of branch)
static TREE_LEAF: &str = "└";

/// Command line interface configuration and argument parsing
#[derive(Parser)]
#[command(author, version, about = "Generate an authors page for a documentation site")]
pub struct Cli {
  /// Verbose mode (-v, -vv, -vvv) for different levels of logging detail
  #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase logging verbosity"
    )]
  verbose: u8,

  /// TOML file with `authors_file` and `output_page` options. Flags given on the command line
  /// take precedence over values from this file.
  #[arg(long, short, global = true)]
  config: Option<PathBuf>,

  /// The subcommand to execute
  #[command(subcommand)]
  command: Commands,
}

/// Configures the logging system based on the verbosity level
///
/// # Arguments
///
/// * `verbosity` - Number of times the verbose flag was used
///
/// The verbosity levels are:
/// - 0: warn (default)
/// - 1: info
/// - 2: debug
/// - 3+: trace
///
/// `RUST_LOG` overrides the level chosen here.
fn setup_logging(verbosity: u8) {
  let filter = match verbosity {
    0 => "warn",
    1 => "info",
    2 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_file(true)
    .with_line_number(true)
    .with_target(true)
    .init();
}

/// Entry point for the roster CLI application
///
/// Parses arguments, sets up logging and runs the requested command. Any
/// error is printed to stderr and turns into a failing exit status, so a
/// surrounding build aborts instead of publishing a stale page.
fn main() -> ExitCode {
  let cli = Cli::parse();
  setup_logging(cli.verbose);

  match run(&cli) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      eprintln!("{} {e}", style(ERROR_PREFIX).red());
      ExitCode::FAILURE
    },
  }
}

/// Dispatches to the selected command.
fn run(cli: &Cli) -> Result<()> {
  trace!(command = ?cli.command, "Dispatching command");
  match &cli.command {
    Commands::Build(options) => build(cli, options),
    Commands::Check(options) => check(cli, options),
    Commands::Render(options) => render(cli, options),
  }
}
