//! Module for the "render" command: prints the page instead of writing it.

use super::*;

/// Function for the [`Commands::Render`] in the CLI.
pub fn render(cli: &Cli, options: &RenderOptions) -> Result<()> {
  let plugin = plugin_for(cli, &options.site, None)?;
  let site = SiteConfig::new(&options.site.docs_dir);
  print!("{}", load_roster(&plugin, &site)?.render());
  Ok(())
}
