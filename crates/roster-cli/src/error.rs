//! Error types for the roster CLI.

use thiserror::Error;

use super::*;

/// Error type alias used for the CLI.
pub type Result<T> = core::result::Result<T, RosterCliError>;

/// Errors that can occur while running a CLI command.
#[derive(Error, Debug)]
pub enum RosterCliError {
  /// Loading, validating or writing the roster failed.
  #[error(transparent)]
  Roster(#[from] RosterError),

  /// The roster could not be printed as JSON.
  #[error(transparent)]
  Json(#[from] serde_json::Error),

  /// A command that needs the roster file could not find it.
  #[error("authors file not found at {}", .0.display())]
  MissingAuthorsFile(PathBuf),
}
