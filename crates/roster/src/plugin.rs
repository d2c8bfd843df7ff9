//! Build hook that turns the roster file into a page of a documentation site.
//!
//! The hook follows the usual static-site layout: the roster file lives in the
//! project root, one level above the content directory (`docs_dir`), and the
//! generated page is written inside the content directory.
//!
//! ```text
//! project/
//! ├── .authors.yml      <- PluginConfig::authors_file, relative to the project root
//! └── docs/             <- SiteConfig::docs_dir
//!     └── authors.md    <- PluginConfig::output_page, relative to docs_dir
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use roster::prelude::*;
//!
//! # fn example() -> Result<(), RosterError> {
//! let plugin = AuthorsPlugin::new(PluginConfig::default().with_output_page("about/team.md"));
//! let site = SiteConfig::new("docs");
//!
//! if let Some(written) = plugin.on_pre_build(&site)? {
//!   println!("generated {}", written.display());
//! }
//!
//! let mut files = vec![std::path::PathBuf::from("index.md")];
//! plugin.on_files(&mut files);
//! # Ok(())
//! # }
//! ```

use std::path::Component;

use super::*;
use crate::schema::Roster;

/// Default location of the roster file, relative to the project root.
pub const DEFAULT_AUTHORS_FILE: &str = ".authors.yml";

/// Default location of the generated page, relative to the content root.
pub const DEFAULT_OUTPUT_PAGE: &str = "authors.md";

/// Options a host sets for the hook.
///
/// Loaded from TOML with every key optional:
///
/// ```toml
/// authors_file = "config/team.yml"
/// output_page = "about/team.md"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PluginConfig {
  /// Path to the roster file, relative to the project root
  pub authors_file: PathBuf,
  /// Path of the generated page, relative to the content root
  pub output_page:  PathBuf,
}

impl Default for PluginConfig {
  fn default() -> Self {
    Self {
      authors_file: PathBuf::from(DEFAULT_AUTHORS_FILE),
      output_page:  PathBuf::from(DEFAULT_OUTPUT_PAGE),
    }
  }
}

impl PluginConfig {
  /// Loads options from a TOML file, falling back to defaults for missing keys.
  #[instrument(skip_all, fields(path = %path.as_ref().display()), level = "debug")]
  pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
    let content = std::fs::read_to_string(path)?;
    let config: Self = toml::from_str(&content)?;
    config.validate()?;
    debug!(?config, "Loaded plugin configuration");
    Ok(config)
  }

  /// Sets the roster file location.
  pub fn with_authors_file(mut self, authors_file: impl AsRef<Path>) -> Self {
    self.authors_file = authors_file.as_ref().to_path_buf();
    self
  }

  /// Sets the generated page location.
  pub fn with_output_page(mut self, output_page: impl AsRef<Path>) -> Self {
    self.output_page = output_page.as_ref().to_path_buf();
    self
  }

  /// Checks that both paths are usable.
  ///
  /// `output_page` must be a relative path that stays inside the content root.
  pub fn validate(&self) -> Result<()> {
    if self.authors_file.as_os_str().is_empty() {
      return Err(RosterError::Config("authors_file must not be empty".to_string()));
    }
    if self.output_page.as_os_str().is_empty() {
      return Err(RosterError::Config("output_page must not be empty".to_string()));
    }
    if !self.output_page.components().all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
    {
      return Err(RosterError::Config(format!(
        "output_page must be relative to the docs directory, got {}",
        self.output_page.display()
      )));
    }
    Ok(())
  }
}

/// The host site's layout, as far as the hook needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
  /// Content root the generated page is written into
  pub docs_dir: PathBuf,
}

impl SiteConfig {
  /// Describes a site whose content lives in `docs_dir`.
  pub fn new(docs_dir: impl Into<PathBuf>) -> Self { Self { docs_dir: docs_dir.into() } }

  /// The project root: the directory containing `docs_dir`.
  pub fn project_dir(&self) -> PathBuf {
    match self.docs_dir.components().next_back() {
      Some(Component::Normal(_)) => self.docs_dir.parent().map(Path::to_path_buf).unwrap_or_default(),
      _ => self.docs_dir.join(".."),
    }
  }
}

/// Generates the authors page during a site build.
#[derive(Debug, Clone, Default)]
pub struct AuthorsPlugin {
  /// Host options
  config: PluginConfig,
}

impl AuthorsPlugin {
  /// Creates the hook with the given options.
  pub fn new(config: PluginConfig) -> Self { Self { config } }

  /// The options this hook runs with.
  pub fn config(&self) -> &PluginConfig { &self.config }

  /// Where the roster file is read from for `site`.
  pub fn authors_path(&self, site: &SiteConfig) -> PathBuf {
    site.project_dir().join(&self.config.authors_file)
  }

  /// Where the generated page is written for `site`.
  pub fn output_path(&self, site: &SiteConfig) -> PathBuf {
    site.docs_dir.join(&self.config.output_page)
  }

  /// Reads and validates the roster file for `site`.
  ///
  /// Returns `Ok(None)` when the file does not exist.
  pub fn load(&self, site: &SiteConfig) -> Result<Option<Roster>> {
    let path = self.authors_path(site);
    let content = match std::fs::read_to_string(&path) {
      Ok(content) => content,
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
        warn!(path = %path.display(), "Authors file not found, no authors page will be generated");
        return Ok(None);
      },
      Err(e) => return Err(e.into()),
    };
    Roster::from_yaml_str(&content).map(Some)
  }

  /// Runs before the site is built: validates the roster and writes the page.
  ///
  /// Returns the path written, or `None` when there is no roster file. The
  /// page is rendered completely before anything touches the disk, so a
  /// validation failure leaves no output behind.
  #[instrument(skip_all, fields(docs_dir = %site.docs_dir.display()))]
  pub fn on_pre_build(&self, site: &SiteConfig) -> Result<Option<PathBuf>> {
    self.config.validate()?;
    let Some(roster) = self.load(site)? else {
      return Ok(None);
    };

    let markdown = roster.render();
    let output = self.output_path(site);
    if let Some(parent) = output.parent() {
      std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&output, markdown)?;

    info!(path = %output.display(), authors = roster.authors.len(), "Authors page generated");
    Ok(Some(output))
  }

  /// Runs once the host has gathered its source files: makes sure the
  /// generated page is among them exactly once.
  ///
  /// `files` holds paths relative to the content root. Returns whether the
  /// page was added.
  pub fn on_files(&self, files: &mut Vec<PathBuf>) -> bool {
    let page = without_cur_dir(&self.config.output_page);
    if files.iter().any(|file| without_cur_dir(file) == page) {
      debug!(page = %page.display(), "Generated page already listed");
      return false;
    }
    info!(page = %page.display(), "Added generated page to site files");
    files.push(page);
    true
  }
}

/// Drops `.` components, so `./authors.md` and `authors.md` compare equal.
fn without_cur_dir(path: &Path) -> PathBuf {
  path.components().filter(|c| !matches!(c, Component::CurDir)).collect()
}

#[cfg(test)]
mod tests {
  use tempfile::tempdir;

  use super::*;

  #[test]
  fn test_default_config() {
    let config = PluginConfig::default();
    assert_eq!(config.authors_file, PathBuf::from(".authors.yml"));
    assert_eq!(config.output_page, PathBuf::from("authors.md"));
    assert!(config.validate().is_ok());
  }

  #[test]
  #[traced_test]
  fn test_config_from_toml() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("roster.toml");

    std::fs::write(&path, "output_page = \"about/team.md\"\n").unwrap();
    let config = PluginConfig::from_path(&path).unwrap();
    assert_eq!(config, PluginConfig::default().with_output_page("about/team.md"));

    std::fs::write(&path, "output = \"team.md\"\n").unwrap();
    assert!(matches!(PluginConfig::from_path(&path), Err(RosterError::TomlDe(_))));

    std::fs::write(&path, "output_page = \"../outside.md\"\n").unwrap();
    assert!(matches!(PluginConfig::from_path(&path), Err(RosterError::Config(_))));
  }

  #[test]
  fn test_project_dir() {
    assert_eq!(SiteConfig::new("docs").project_dir(), PathBuf::from(""));
    assert_eq!(SiteConfig::new("/srv/site/docs").project_dir(), PathBuf::from("/srv/site"));
    assert_eq!(SiteConfig::new(".").project_dir(), PathBuf::from("./.."));
  }

  #[test]
  fn test_paths() {
    let plugin = AuthorsPlugin::new(PluginConfig::default().with_authors_file("team.yml"));
    let site = SiteConfig::new("/srv/site/docs");

    assert_eq!(plugin.authors_path(&site), PathBuf::from("/srv/site/team.yml"));
    assert_eq!(plugin.output_path(&site), PathBuf::from("/srv/site/docs/authors.md"));
  }

  #[test]
  #[traced_test]
  fn test_on_files_adds_once() {
    let plugin = AuthorsPlugin::default();
    let mut files = vec![PathBuf::from("index.md"), PathBuf::from("about.md")];

    assert!(plugin.on_files(&mut files));
    assert!(!plugin.on_files(&mut files));
    assert_eq!(files.len(), 3);
    assert_eq!(files[2], PathBuf::from("authors.md"));
  }

  #[test]
  #[traced_test]
  fn test_on_files_ignores_cur_dir_components() {
    let plugin = AuthorsPlugin::new(PluginConfig::default().with_output_page("./authors.md"));
    let mut files = vec![PathBuf::from("authors.md")];

    assert!(!plugin.on_files(&mut files));
    assert_eq!(files, vec![PathBuf::from("authors.md")]);

    let plugin = AuthorsPlugin::new(PluginConfig::default().with_output_page("./about/./team.md"));
    let mut files = vec![PathBuf::from("./index.md")];

    assert!(plugin.on_files(&mut files));
    assert!(!plugin.on_files(&mut files));
    assert_eq!(files, vec![PathBuf::from("./index.md"), PathBuf::from("about/team.md")]);
  }
}
