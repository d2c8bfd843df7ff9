//! Module for the "build" command: runs the hook the way a site build would.

use super::*;

/// Function for the [`Commands::Build`] in the CLI.
pub fn build(cli: &Cli, options: &BuildOptions) -> Result<()> {
  let plugin = plugin_for(cli, &options.site, options.output_page.as_ref())?;
  let site = SiteConfig::new(&options.site.docs_dir);

  match plugin.on_pre_build(&site)? {
    Some(path) => println!(
      "{} Authors page generated at: {}",
      style(SUCCESS_PREFIX).green(),
      style(path.display()).yellow()
    ),
    None => println!(
      "{} Authors file not found at {}. No authors page generated.",
      style(WARNING_PREFIX).yellow(),
      style(plugin.authors_path(&site).display()).yellow()
    ),
  }
  Ok(())
}
