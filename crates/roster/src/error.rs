//! Error types for the roster library.
//!
//! Failures fall into two groups:
//! - Problems with the roster document itself (structure, fields, YAML syntax)
//! - Problems reaching the files a build hook reads and writes
//!
//! # Examples
//!
//! ```
//! use roster::{error::RosterError, schema::Roster};
//!
//! let result = Roster::from_yaml_str("authors:\n  a:\n    description: x\n");
//! match result {
//!   Err(RosterError::Field(problems)) => assert_eq!(problems[0].scope, "authors.a"),
//!   Err(e) => panic!("unexpected error: {e}"),
//!   Ok(_) => panic!("a record without a name must not validate"),
//! }
//! ```

use thiserror::Error;

use super::*;

/// Error type alias used for the [`roster`](crate) crate.
pub type Result<T> = core::result::Result<T, RosterError>;

/// Errors that can occur when loading, validating or writing a roster page.
#[derive(Error, Debug)]
pub enum RosterError {
  /// The document does not have the expected overall shape.
  ///
  /// This occurs when:
  /// - The top-level `authors` key is missing
  /// - `authors` is present but holds no entries
  /// - `authors` or `page_params` is not a mapping
  #[error("schema error: {0}")]
  Schema(String),

  /// One or more records or page parameters failed a field-level constraint.
  ///
  /// Every problem found during validation is carried, so a single run
  /// reports all of the keys that need fixing.
  #[error("invalid roster fields:\n{}", describe(.0))]
  Field(Vec<FieldProblem>),

  /// The roster document is not valid YAML.
  #[error(transparent)]
  Yaml(#[from] serde_yaml::Error),

  /// A file system operation failed while reading input or writing output.
  #[error(transparent)]
  Io(#[from] std::io::Error),

  /// The hook configuration file is not valid TOML for [`PluginConfig`].
  ///
  /// [`PluginConfig`]: crate::plugin::PluginConfig
  #[error(transparent)]
  TomlDe(#[from] toml::de::Error),

  /// The hook configuration is unusable.
  #[error("{0}")]
  Config(String),
}

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldProblem {
  /// Where the problem lives: `page_params` or `authors.<key>`
  pub scope:  String,
  /// The offending field name
  pub field:  String,
  /// What is wrong with it
  pub reason: String,
}

impl FieldProblem {
  /// Creates a problem for `field` within `scope`.
  pub fn new(scope: impl Into<String>, field: impl Into<String>, reason: impl Into<String>) -> Self {
    Self { scope: scope.into(), field: field.into(), reason: reason.into() }
  }
}

impl Display for FieldProblem {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: field '{}' {}", self.scope, self.field, self.reason)
  }
}

/// Lists problems one per line for the [`RosterError::Field`] message.
fn describe(problems: &[FieldProblem]) -> String {
  problems.iter().map(|p| format!("  - {p}")).collect::<Vec<_>>().join("\n")
}
