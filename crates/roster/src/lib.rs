//! Author roster page generation for static documentation sites.
//!
//! `roster` turns a YAML description of a project's authors into a single
//! Markdown page that a documentation build (MkDocs and friends) can serve.
//! It provides:
//!
//! - A typed schema for page parameters and author records
//! - Validation that reports every offending author key at once
//! - A deterministic Markdown renderer with contact/social link construction
//! - A build hook that reads the roster file and writes the generated page
//!
//! # Getting Started
//!
//! ```
//! use roster::prelude::*;
//!
//! # fn example() -> Result<(), RosterError> {
//! let payload = r#"
//! authors:
//!   ann:
//!     name: Ann
//!   bo:
//!     name: Bo
//!     github: bo99
//! "#;
//!
//! let roster = Roster::from_yaml_str(payload)?;
//! let page = roster.render();
//! assert!(page.starts_with("# Our Amazing Authors"));
//! assert!(page.contains("(https://github.com/bo99)"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! # Module Organization
//!
//! - [`schema`]: Page parameters, author records and the validator
//! - [`render`]: Markdown generation for a validated roster
//! - [`plugin`]: Build hook and its configuration
//! - [`error`]: Error types and the crate `Result` alias
//! - [`prelude`]: Common types for ergonomic imports

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::{
  collections::HashSet,
  fmt::{self, Display},
  path::{Path, PathBuf},
  str::FromStr,
};

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use tracing::{debug, info, instrument, warn};
#[cfg(test)] use tracing_test::traced_test;

pub mod error;
pub mod plugin;
pub mod render;
pub mod schema;

use crate::error::*;

/// Validates a YAML roster payload and renders it to Markdown in one step.
///
/// This is the narrow entry point for hosts that manage their own files: no
/// I/O is performed and the output is fully determined by `payload`.
///
/// # Errors
///
/// Returns the validation failure when the payload is malformed, has no
/// authors, or has records with invalid fields.
pub fn render_page(payload: &str) -> Result<String> {
  Ok(schema::Roster::from_yaml_str(payload)?.render())
}

/// Common types for ergonomic imports.
///
/// ```
/// use roster::prelude::*;
///
/// fn check(payload: &str) -> Result<usize, RosterError> {
///   Ok(Roster::from_yaml_str(payload)?.authors.len())
/// }
/// ```
pub mod prelude {
  pub use crate::{
    error::{FieldProblem, RosterError},
    plugin::{AuthorsPlugin, PluginConfig, SiteConfig},
    render::render,
    render_page,
    schema::{AuthorRecord, AvatarAlign, AvatarShape, PageParams, Roster},
  };
}
