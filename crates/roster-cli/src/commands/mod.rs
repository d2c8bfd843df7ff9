use super::*;

pub mod build;
pub mod check;
pub mod render;

pub use build::build;
pub use check::check;
pub use render::render;

/// Available commands for the CLI
#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
  /// Generate the authors page into the docs directory
  Build(BuildOptions),

  /// Validate the authors file and report every problem found
  Check(CheckOptions),

  /// Print the rendered authors page to stdout
  Render(RenderOptions),
}

/// Where to find the site and its roster file.
#[derive(Args, Clone, Debug)]
pub struct SiteOptions {
  /// Content directory of the site; the roster file is looked up in its parent
  #[arg(long, default_value = "docs")]
  pub docs_dir: PathBuf,

  /// Roster file, relative to the project root (default `.authors.yml`)
  #[arg(long)]
  pub authors_file: Option<PathBuf>,
}

/// Options for [`Commands::Build`].
#[derive(Args, Clone, Debug)]
pub struct BuildOptions {
  #[command(flatten)]
  pub site: SiteOptions,

  /// Generated page, relative to the docs directory (default `authors.md`)
  #[arg(long)]
  pub output_page: Option<PathBuf>,
}

/// Options for [`Commands::Check`].
#[derive(Args, Clone, Debug)]
pub struct CheckOptions {
  #[command(flatten)]
  pub site: SiteOptions,

  /// Print the validated roster as JSON
  #[arg(long)]
  pub json: bool,
}

/// Options for [`Commands::Render`].
#[derive(Args, Clone, Debug)]
pub struct RenderOptions {
  #[command(flatten)]
  pub site: SiteOptions,
}

/// Builds the hook from the `--config` file, if any, overlaid with flags.
fn plugin_for(
  cli: &Cli,
  site: &SiteOptions,
  output_page: Option<&PathBuf>,
) -> Result<AuthorsPlugin> {
  let mut config = match &cli.config {
    Some(path) => PluginConfig::from_path(path)?,
    None => PluginConfig::default(),
  };
  if let Some(authors_file) = &site.authors_file {
    config = config.with_authors_file(authors_file);
  }
  if let Some(output_page) = output_page {
    config = config.with_output_page(output_page);
  }
  debug!(?config, docs_dir = %site.docs_dir.display(), "Resolved plugin configuration");
  Ok(AuthorsPlugin::new(config))
}

/// Loads the roster, treating a missing file as an error.
fn load_roster(plugin: &AuthorsPlugin, site: &SiteConfig) -> Result<Roster> {
  plugin
    .load(site)?
    .ok_or_else(|| RosterCliError::MissingAuthorsFile(plugin.authors_path(site)))
}
