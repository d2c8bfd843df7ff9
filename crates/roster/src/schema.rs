//! Page parameters, author records and the roster validator.
//!
//! A roster document is a YAML mapping with an optional `page_params` entry
//! and a required `authors` entry:
//!
//! ```yaml
//! page_params:
//!   title: Maintainers
//!   avatar_shape: circle
//! authors:
//!   author_one:
//!     name: Author One
//!     github: authorone
//! ```
//!
//! Validation walks the parsed document rather than deserializing it in one
//! shot, so that every broken record is reported in a single
//! [`RosterError::Field`] instead of stopping at the first one. Unknown fields
//! are logged and otherwise ignored.

use super::*;

/// Heading used when `page_params.title` is not given.
pub const DEFAULT_TITLE: &str = "Our Amazing Authors";

/// Avatar edge length in pixels when `page_params.avatar_size` is not given.
pub const DEFAULT_AVATAR_SIZE: u32 = 100;

/// Scope name used in [`FieldProblem`]s raised for page parameters.
const PAGE_SCOPE: &str = "page_params";

/// Fields recognized in `page_params`.
const PAGE_FIELDS: [&str; 5] = ["title", "description", "avatar_size", "avatar_shape", "avatar_align"];

/// Fields recognized in an author record.
const AUTHOR_FIELDS: [&str; 9] = [
  "name",
  "description",
  "avatar",
  "affiliation",
  "email",
  "github",
  "linkedin",
  "twitter",
  "orcid",
];

/// Shape applied to author avatars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvatarShape {
  /// Image is shown as-is
  #[default]
  Square,
  /// Image is clipped to a circle
  Circle,
}

/// Placement of author avatars relative to the surrounding text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvatarAlign {
  /// Floated left, text flows on the right
  Left,
  /// Floated right, text flows on the left
  Right,
  /// On its own line, centered
  #[default]
  Center,
}

impl AvatarShape {
  /// Accepted spellings, for error messages.
  pub const ALLOWED: &'static str = "square, circle";
}

impl AvatarAlign {
  /// Accepted spellings, for error messages.
  pub const ALLOWED: &'static str = "left, right, center";
}

impl FromStr for AvatarShape {
  type Err = RosterError;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "square" => Ok(Self::Square),
      "circle" => Ok(Self::Circle),
      other => Err(RosterError::Config(format!(
        "unknown avatar shape '{other}', expected one of: {}",
        Self::ALLOWED
      ))),
    }
  }
}

impl FromStr for AvatarAlign {
  type Err = RosterError;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "left" => Ok(Self::Left),
      "right" => Ok(Self::Right),
      "center" => Ok(Self::Center),
      other => Err(RosterError::Config(format!(
        "unknown avatar alignment '{other}', expected one of: {}",
        Self::ALLOWED
      ))),
    }
  }
}

impl Display for AvatarShape {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Square => write!(f, "square"),
      Self::Circle => write!(f, "circle"),
    }
  }
}

impl Display for AvatarAlign {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Left => write!(f, "left"),
      Self::Right => write!(f, "right"),
      Self::Center => write!(f, "center"),
    }
  }
}

/// Page-level presentation settings, applied once per generated page.
///
/// Every field has a default, so an absent `page_params` entry yields
/// [`PageParams::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageParams {
  /// Top-level page heading
  pub title:        String,
  /// Optional paragraph shown under the heading
  pub description:  Option<String>,
  /// Avatar width and height in pixels
  pub avatar_size:  u32,
  /// Avatar clipping
  pub avatar_shape: AvatarShape,
  /// Avatar placement
  pub avatar_align: AvatarAlign,
}

impl Default for PageParams {
  fn default() -> Self {
    Self {
      title:        DEFAULT_TITLE.to_string(),
      description:  None,
      avatar_size:  DEFAULT_AVATAR_SIZE,
      avatar_shape: AvatarShape::default(),
      avatar_align: AvatarAlign::default(),
    }
  }
}

/// A single contributor entry of the `authors` mapping.
///
/// Only `name` is required. `None` means the field was absent from the
/// document and nothing is rendered for it; `Some(String::new())` means it was
/// given as an empty string and is rendered empty.
///
/// # Examples
///
/// ```
/// use roster::schema::AuthorRecord;
///
/// let author = AuthorRecord::new("ann", "Ann Example");
/// assert_eq!(author.id, "ann");
/// assert!(author.github.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuthorRecord {
  /// The mapping key; identity only, never rendered
  pub id:          String,
  /// Display name
  pub name:        String,
  /// Role or short bio
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  /// Image path or URL
  #[serde(skip_serializing_if = "Option::is_none")]
  pub avatar:      Option<String>,
  /// Institution or company
  #[serde(skip_serializing_if = "Option::is_none")]
  pub affiliation: Option<String>,
  /// Contact address
  #[serde(skip_serializing_if = "Option::is_none")]
  pub email:       Option<String>,
  /// GitHub handle
  #[serde(skip_serializing_if = "Option::is_none")]
  pub github:      Option<String>,
  /// LinkedIn profile slug
  #[serde(skip_serializing_if = "Option::is_none")]
  pub linkedin:    Option<String>,
  /// Twitter/X handle
  #[serde(skip_serializing_if = "Option::is_none")]
  pub twitter:     Option<String>,
  /// ORCID identifier
  #[serde(skip_serializing_if = "Option::is_none")]
  pub orcid:       Option<String>,
}

impl AuthorRecord {
  /// Creates a record with only the required fields set.
  pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
    Self { id: id.into(), name: name.into(), ..Default::default() }
  }
}

/// A validated roster: page parameters plus authors in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Roster {
  /// Presentation settings, defaults filled in
  pub page:    PageParams,
  /// Authors in the order their keys appear in the document
  pub authors: Vec<AuthorRecord>,
}

impl Roster {
  /// Reads, parses and validates a roster document from disk.
  pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
    let content = std::fs::read_to_string(path)?;
    Self::from_yaml_str(&content)
  }

  /// Parses and validates a roster document.
  ///
  /// An empty document is treated as one without an `authors` key.
  #[instrument(skip_all, fields(bytes = payload.len()), level = "debug")]
  pub fn from_yaml_str(payload: &str) -> Result<Self> {
    if payload.trim().is_empty() {
      return Self::from_value(Value::Null);
    }
    let value: Value = serde_yaml::from_str(payload)?;
    Self::from_value(value)
  }

  /// Validates an already parsed roster document.
  ///
  /// Structural problems (no `authors`, empty `authors`, entries of the wrong
  /// kind) fail immediately with [`RosterError::Schema`]. Field problems are
  /// collected across `page_params` and every author and returned together as
  /// [`RosterError::Field`].
  #[instrument(skip_all, level = "debug")]
  pub fn from_value(value: Value) -> Result<Self> {
    let root = match value {
      Value::Null => Mapping::new(),
      Value::Mapping(root) => root,
      other => {
        return Err(RosterError::Schema(format!(
          "top-level document must be a mapping, found {}",
          type_name_of_value(&other)
        )))
      },
    };

    let entries = match root.get("authors") {
      None => return Err(RosterError::Schema("authors key required".to_string())),
      Some(Value::Null) => None,
      Some(Value::Mapping(entries)) => Some(entries),
      Some(other) => {
        return Err(RosterError::Schema(format!(
          "authors must be a mapping of author keys to records, found {}",
          type_name_of_value(other)
        )))
      },
    };
    let Some(entries) = entries.filter(|entries| !entries.is_empty()) else {
      return Err(RosterError::Schema("at least one author required".to_string()));
    };

    for key in root.keys().filter_map(Value::as_str) {
      if key != "authors" && key != PAGE_SCOPE {
        warn!(key = %key, "Ignoring unknown top-level key in roster document");
      }
    }

    let mut problems = Vec::new();

    let page = match root.get(PAGE_SCOPE) {
      None | Some(Value::Null) => PageParams::default(),
      Some(Value::Mapping(fields)) => PageParams::from_fields(fields, &mut problems),
      Some(other) => {
        return Err(RosterError::Schema(format!(
          "page_params must be a mapping, found {}",
          type_name_of_value(other)
        )))
      },
    };

    let mut seen = HashSet::new();
    let mut authors = Vec::with_capacity(entries.len());
    for (key, entry) in entries {
      let Some(id) = key_text(key) else {
        problems.push(FieldProblem::new(
          "authors",
          "key",
          format!("author keys must be text, found {}", type_name_of_value(key)),
        ));
        continue;
      };
      let scope = format!("authors.{id}");
      if !seen.insert(id.clone()) {
        problems.push(FieldProblem::new(scope, "key", "duplicates another author key"));
        continue;
      }

      let empty = Mapping::new();
      let fields = match entry {
        Value::Mapping(fields) => fields,
        Value::Null => &empty,
        other => {
          problems.push(FieldProblem::new(
            scope,
            "record",
            format!("must be a mapping of fields, found {}", type_name_of_value(other)),
          ));
          continue;
        },
      };

      if let Some(author) = AuthorRecord::from_fields(id, fields, &mut problems) {
        debug!(id = %author.id, name = %author.name, "Validated author record");
        authors.push(author);
      }
    }

    if !problems.is_empty() {
      warn!(problems = problems.len(), "Roster validation failed");
      return Err(RosterError::Field(problems));
    }

    debug!(authors = authors.len(), title = %page.title, "Roster validation completed");
    Ok(Self { page, authors })
  }

  /// Renders this roster to Markdown. See [`render::render`].
  pub fn render(&self) -> String { render::render(&self.page, &self.authors) }
}

impl PageParams {
  /// Builds page parameters from a `page_params` mapping, recording problems.
  fn from_fields(fields: &Mapping, problems: &mut Vec<FieldProblem>) -> Self {
    let mut page = Self::default();

    if let Some(title) = text_field(fields, "title", PAGE_SCOPE, problems) {
      match heading_text(&title) {
        _ if title.trim().is_empty() =>
          problems.push(FieldProblem::new(PAGE_SCOPE, "title", "must not be empty")),
        Some(title) => page.title = title,
        None => problems.push(FieldProblem::new(PAGE_SCOPE, "title", "must be a single line")),
      }
    }

    page.description = text_field(fields, "description", PAGE_SCOPE, problems);

    match fields.get("avatar_size") {
      None | Some(Value::Null) => {},
      Some(Value::Number(n)) => match n.as_u64().filter(|&px| px > 0).map(u32::try_from) {
        Some(Ok(px)) => page.avatar_size = px,
        _ => problems.push(FieldProblem::new(
          PAGE_SCOPE,
          "avatar_size",
          format!("must be a positive integer number of pixels, found {n}"),
        )),
      },
      Some(other) => problems.push(FieldProblem::new(
        PAGE_SCOPE,
        "avatar_size",
        format!("must be a positive integer number of pixels, found {}", type_name_of_value(other)),
      )),
    }

    if let Some(shape) = text_field(fields, "avatar_shape", PAGE_SCOPE, problems) {
      match shape.parse() {
        Ok(shape) => page.avatar_shape = shape,
        Err(_) => problems.push(FieldProblem::new(
          PAGE_SCOPE,
          "avatar_shape",
          format!("must be one of: {}, found '{shape}'", AvatarShape::ALLOWED),
        )),
      }
    }

    if let Some(align) = text_field(fields, "avatar_align", PAGE_SCOPE, problems) {
      match align.parse() {
        Ok(align) => page.avatar_align = align,
        Err(_) => problems.push(FieldProblem::new(
          PAGE_SCOPE,
          "avatar_align",
          format!("must be one of: {}, found '{align}'", AvatarAlign::ALLOWED),
        )),
      }
    }

    warn_unknown_fields(fields, &PAGE_FIELDS, PAGE_SCOPE);
    page
  }
}

impl AuthorRecord {
  /// Builds a record from one `authors` entry.
  ///
  /// Returns `None` when any problem was recorded for this entry.
  fn from_fields(id: String, fields: &Mapping, problems: &mut Vec<FieldProblem>) -> Option<Self> {
    let scope = format!("authors.{id}");
    let before = problems.len();

    let name = match text_field(fields, "name", &scope, problems) {
      None => {
        if problems.len() == before {
          problems.push(FieldProblem::new(&scope, "name", "is required"));
        }
        None
      },
      Some(name) if name.trim().is_empty() => {
        problems.push(FieldProblem::new(&scope, "name", "must not be empty"));
        None
      },
      Some(name) => {
        let heading = heading_text(&name);
        if heading.is_none() {
          problems.push(FieldProblem::new(&scope, "name", "must be a single line"));
        }
        heading
      },
    };

    let record = Self {
      id,
      name: name.unwrap_or_default(),
      description: text_field(fields, "description", &scope, problems),
      avatar: text_field(fields, "avatar", &scope, problems),
      affiliation: text_field(fields, "affiliation", &scope, problems),
      email: text_field(fields, "email", &scope, problems),
      github: text_field(fields, "github", &scope, problems),
      linkedin: text_field(fields, "linkedin", &scope, problems),
      twitter: text_field(fields, "twitter", &scope, problems),
      orcid: text_field(fields, "orcid", &scope, problems),
    };

    warn_unknown_fields(fields, &AUTHOR_FIELDS, &scope);
    (problems.len() == before).then_some(record)
  }
}

/// Reads an optional text field.
///
/// Null counts as absent. Numbers and booleans are taken as their YAML text;
/// sequences, mappings and tagged values are recorded as problems.
fn text_field(
  fields: &Mapping,
  field: &str,
  scope: &str,
  problems: &mut Vec<FieldProblem>,
) -> Option<String> {
  match fields.get(field)? {
    Value::Null => None,
    Value::String(s) => Some(s.clone()),
    Value::Number(n) => Some(n.to_string()),
    Value::Bool(b) => Some(b.to_string()),
    other => {
      problems.push(FieldProblem::new(
        scope,
        field,
        format!("must be text, found {}", type_name_of_value(other)),
      ));
      None
    },
  }
}

/// Text usable as a Markdown heading: trailing line breaks (as left by `|`
/// block scalars) are dropped, any other line break is rejected.
fn heading_text(value: &str) -> Option<String> {
  let value = value.trim_end_matches(['\n', '\r']);
  (!value.contains(['\n', '\r'])).then(|| value.to_string())
}

/// Text form of a mapping key, if it is a scalar.
fn key_text(key: &Value) -> Option<String> {
  match key {
    Value::String(s) => Some(s.clone()),
    Value::Number(n) => Some(n.to_string()),
    Value::Bool(b) => Some(b.to_string()),
    _ => None,
  }
}

/// Logs fields that the schema does not know about.
fn warn_unknown_fields(fields: &Mapping, known: &[&str], scope: &str) {
  let unknown: Vec<_> = fields
    .keys()
    .filter(|key| key.as_str().map_or(true, |key| !known.contains(&key)))
    .collect();

  if !unknown.is_empty() {
    warn!(scope = %scope, unknown_fields = ?unknown, "Ignoring unknown fields");
  }
}

/// Human readable name of a YAML value's kind.
const fn type_name_of_value(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "boolean",
    Value::Number(_) => "number",
    Value::String(_) => "string",
    Value::Sequence(_) => "sequence",
    Value::Mapping(_) => "mapping",
    Value::Tagged(_) => "tagged value",
  }
}
