//! Markdown generation for a validated roster.
//!
//! The output is a sequence of blocks separated by a blank line:
//!
//! ```markdown
//! # Our Amazing Authors
//!
//! ## Author One
//!
//! <div style="text-align: center;"><img src="one.png" alt="Author One avatar" width="100" height="100" /></div>
//!
//! > Owner
//!
//! **Affiliation:** British Antarctic Survey
//!
//! - **Email:** [one@example.com](mailto:one@example.com)
//! - **GitHub:** [authorone](https://github.com/authorone)
//!
//! ---
//! ```
//!
//! Rendering never fails and has no side effects: the same roster always
//! produces the same bytes.

use super::*;
use crate::schema::{AuthorRecord, AvatarAlign, AvatarShape, PageParams};

/// Profile URL prefix for GitHub handles.
pub const GITHUB_URL: &str = "https://github.com/";
/// Profile URL prefix for LinkedIn slugs.
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/";
/// Profile URL prefix for Twitter/X handles.
pub const TWITTER_URL: &str = "https://twitter.com/";
/// URL prefix for ORCID identifiers.
pub const ORCID_URL: &str = "https://orcid.org/";

/// Closes an author block whose avatar floats beside the text.
const CLEAR_FLOAT: &str = r#"<div style="clear: both;"></div>"#;

/// Closes every author block.
const AUTHOR_SEPARATOR: &str = "---";

/// Contact fields that become link lines, in output order.
#[derive(Debug, Clone, Copy)]
enum Contact {
  /// `mailto:` link
  Email,
  /// GitHub profile
  GitHub,
  /// LinkedIn profile
  LinkedIn,
  /// Twitter/X profile
  Twitter,
  /// ORCID record
  Orcid,
}

impl Contact {
  /// Every contact field, in the order lines are emitted.
  const ALL: [Self; 5] = [Self::Email, Self::GitHub, Self::LinkedIn, Self::Twitter, Self::Orcid];

  /// Bold label leading the line.
  const fn label(self) -> &'static str {
    match self {
      Self::Email => "Email",
      Self::GitHub => "GitHub",
      Self::LinkedIn => "LinkedIn",
      Self::Twitter => "Twitter/X",
      Self::Orcid => "ORCID",
    }
  }

  /// The record's value for this field, if present.
  fn value(self, author: &AuthorRecord) -> Option<&str> {
    match self {
      Self::Email => author.email.as_deref(),
      Self::GitHub => author.github.as_deref(),
      Self::LinkedIn => author.linkedin.as_deref(),
      Self::Twitter => author.twitter.as_deref(),
      Self::Orcid => author.orcid.as_deref(),
    }
  }

  /// Link target built from the field value.
  fn href(self, value: &str) -> String {
    match self {
      Self::Email => format!("mailto:{value}"),
      Self::GitHub => format!("{GITHUB_URL}{value}"),
      Self::LinkedIn => format!("{LINKEDIN_URL}{value}"),
      Self::Twitter => format!("{TWITTER_URL}{value}"),
      Self::Orcid => format!("{ORCID_URL}{value}"),
    }
  }

  /// The full list line for this field.
  fn line(self, value: &str) -> String {
    format!("- **{}:** [{value}]({})", self.label(), self.href(value))
  }
}

/// Renders page parameters and authors into a Markdown page.
///
/// Authors are emitted in slice order. Optional fields that are `None`
/// produce no output at all.
///
/// # Examples
///
/// ```
/// use roster::{
///   render::render,
///   schema::{AuthorRecord, PageParams},
/// };
///
/// let mut bo = AuthorRecord::new("b", "Bo");
/// bo.github = Some("bo99".to_string());
///
/// let page = render(&PageParams::default(), &[AuthorRecord::new("a", "Ann"), bo]);
/// assert!(page.contains("## Ann\n\n---"));
/// assert!(page.contains("- **GitHub:** [bo99](https://github.com/bo99)"));
/// ```
#[instrument(skip_all, fields(authors = authors.len()), level = "debug")]
pub fn render(page: &PageParams, authors: &[AuthorRecord]) -> String {
  let mut blocks = vec![format!("# {}", page.title)];
  if let Some(description) = &page.description {
    blocks.push(description.clone());
  }

  for author in authors {
    author_blocks(page, author, &mut blocks);
  }

  let mut markdown = blocks.join("\n\n");
  markdown.push('\n');
  debug!(bytes = markdown.len(), "Rendered roster page");
  markdown
}

/// Appends the blocks for one author.
fn author_blocks(page: &PageParams, author: &AuthorRecord, blocks: &mut Vec<String>) {
  blocks.push(format!("## {}", author.name));

  if let Some(avatar) = &author.avatar {
    blocks.push(avatar_image(page, &author.name, avatar));
  }

  if let Some(description) = &author.description {
    blocks.push(blockquote(description));
  }

  if let Some(affiliation) = &author.affiliation {
    blocks.push(format!("**Affiliation:** {affiliation}"));
  }

  let contacts: Vec<String> = Contact::ALL
    .into_iter()
    .filter_map(|contact| contact.value(author).map(|value| contact.line(value)))
    .collect();
  if !contacts.is_empty() {
    blocks.push(contacts.join("\n"));
  }

  if author.avatar.is_some() && page.avatar_align != AvatarAlign::Center {
    blocks.push(CLEAR_FLOAT.to_string());
  }

  blocks.push(AUTHOR_SEPARATOR.to_string());
}

/// HTML image for an avatar, sized, shaped and placed per the page settings.
fn avatar_image(page: &PageParams, name: &str, avatar: &str) -> String {
  let mut style = Vec::new();
  match page.avatar_align {
    AvatarAlign::Left => style.push("float: left; margin: 0 1em 1em 0;"),
    AvatarAlign::Right => style.push("float: right; margin: 0 0 1em 1em;"),
    AvatarAlign::Center => {},
  }
  if page.avatar_shape == AvatarShape::Circle {
    style.push("border-radius: 50%; object-fit: cover;");
  }

  let style = if style.is_empty() {
    String::new()
  } else {
    format!(r#" style="{}""#, style.join(" "))
  };
  let image = format!(
    r#"<img src="{}" alt="{} avatar" width="{size}" height="{size}"{style} />"#,
    escape_attribute(avatar),
    escape_attribute(name),
    size = page.avatar_size,
  );

  match page.avatar_align {
    AvatarAlign::Center => format!(r#"<div style="text-align: center;">{image}</div>"#),
    AvatarAlign::Left | AvatarAlign::Right => image,
  }
}

/// Quotes every line of `text`.
fn blockquote(text: &str) -> String {
  if text.is_empty() {
    return ">".to_string();
  }
  text
    .lines()
    .map(|line| if line.is_empty() { ">".to_string() } else { format!("> {line}") })
    .collect::<Vec<_>>()
    .join("\n")
}

/// Escapes a value for use inside a double-quoted HTML attribute.
fn escape_attribute(value: &str) -> String {
  let mut escaped = String::with_capacity(value.len());
  for c in value.chars() {
    match c {
      '&' => escaped.push_str("&amp;"),
      '"' => escaped.push_str("&quot;"),
      '<' => escaped.push_str("&lt;"),
      '>' => escaped.push_str("&gt;"),
      c => escaped.push(c),
    }
  }
  escaped
}
