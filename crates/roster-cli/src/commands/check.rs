//! Module for the "check" command: validation without writing anything.

use super::*;

/// Function for the [`Commands::Check`] in the CLI.
pub fn check(cli: &Cli, options: &CheckOptions) -> Result<()> {
  let plugin = plugin_for(cli, &options.site, None)?;
  let site = SiteConfig::new(&options.site.docs_dir);
  let roster = load_roster(&plugin, &site)?;

  if options.json {
    println!("{}", serde_json::to_string_pretty(&roster)?);
    return Ok(());
  }

  println!(
    "{} {} is valid: {} author(s)",
    style(SUCCESS_PREFIX).green(),
    style(plugin.authors_path(&site).display()).yellow(),
    roster.authors.len()
  );
  println!("{} Page title: {}", style(INFO_PREFIX).cyan(), roster.page.title);
  for (index, author) in roster.authors.iter().enumerate() {
    let branch = if index + 1 == roster.authors.len() { TREE_LEAF } else { TREE_BRANCH };
    println!("  {branch} {} ({})", style(&author.name).bold(), style(&author.id).dim());
  }
  Ok(())
}
