use super::*;

const TWO_AUTHORS: &str = r#"
authors:
  author_one:
    name: Author One
    description: Owner
    avatar: headshot_one.png
    affiliation: British Antarctic Survey
    email: author.one@example.com
    github: authorone
    linkedin: author-one-profile
    twitter: author_one_dev
  author_two:
    name: Author Two
    description: Maintainer
    avatar: headshot_two.png
    affiliation: UK Centre for Ecology & Hydrology
"#;

#[test]
#[traced_test]
fn test_authors_page_generation_success() -> TestResult<()> {
  let (dir, site) = create_test_site();
  write_authors_file(dir.path(), TWO_AUTHORS);

  let written = AuthorsPlugin::default().on_pre_build(&site)?;
  assert_eq!(written, Some(site.docs_dir.join("authors.md")));

  let page = read_generated_page(&site).expect("page should be generated");
  assert!(page.contains("# Our Amazing Authors"));
  assert!(page.contains("## Author One"));
  assert!(page.contains("**Affiliation:** British Antarctic Survey"));
  assert!(page.contains("> Owner"));
  assert!(page.contains("[author.one@example.com](mailto:author.one@example.com)"));
  assert!(page.contains("[authorone](https://github.com/authorone)"));
  assert!(page.contains("[author-one-profile](https://www.linkedin.com/in/author-one-profile)"));
  assert!(page.contains("[author_one_dev](https://twitter.com/author_one_dev)"));
  assert!(page.contains("## Author Two"));
  assert!(page.contains("**Affiliation:** UK Centre for Ecology & Hydrology"));
  assert!(page.contains("> Maintainer"));
  assert!(!page.contains("author_one\n") && !page.contains("author_two"));

  let two = page.find("## Author Two").unwrap();
  assert!(!page[two..].contains("Email"), "Author Two has no email");
  Ok(())
}

#[test]
#[traced_test]
fn test_authors_file_not_found() -> TestResult<()> {
  let (_dir, site) = create_test_site();

  assert_eq!(AuthorsPlugin::default().on_pre_build(&site)?, None);
  assert!(read_generated_page(&site).is_none());
  Ok(())
}

#[test]
#[traced_test]
fn test_authors_file_empty() {
  let (dir, site) = create_test_site();
  write_authors_file(dir.path(), "");

  let result = AuthorsPlugin::default().on_pre_build(&site);
  assert!(matches!(result, Err(RosterError::Schema(ref m)) if m == "authors key required"));
  assert!(read_generated_page(&site).is_none());
}

#[test]
#[traced_test]
fn test_authors_file_malformed() {
  let (dir, site) = create_test_site();
  write_authors_file(dir.path(), "not: valid: yaml");

  let result = AuthorsPlugin::default().on_pre_build(&site);
  assert!(matches!(result, Err(RosterError::Yaml(_))));
  assert!(read_generated_page(&site).is_none());
}

#[test]
#[traced_test]
fn test_authors_file_wrong_top_level_key() {
  let (dir, site) = create_test_site();
  write_authors_file(dir.path(), "contributors:\n  author_one:\n    name: Author One\n");

  let result = AuthorsPlugin::default().on_pre_build(&site);
  assert!(matches!(result, Err(RosterError::Schema(_))));
  assert!(read_generated_page(&site).is_none());
}

#[test]
#[traced_test]
fn test_invalid_author_writes_nothing() {
  let (dir, site) = create_test_site();
  write_authors_file(dir.path(), "authors:\n  a:\n    description: x\n");

  let err = AuthorsPlugin::default().on_pre_build(&site).unwrap_err();
  assert!(err.to_string().contains("authors.a: field 'name' is required"));
  assert!(read_generated_page(&site).is_none());
}

#[test]
#[traced_test]
fn test_failed_build_keeps_previous_page() -> TestResult<()> {
  let (dir, site) = create_test_site();
  let plugin = AuthorsPlugin::default();

  write_authors_file(dir.path(), "authors:\n  a:\n    name: Ann\n");
  plugin.on_pre_build(&site)?;
  let before = read_generated_page(&site).unwrap();

  write_authors_file(dir.path(), "page_params:\n  avatar_shape: triangle\nauthors:\n  a:\n    name: Ann\n");
  assert!(plugin.on_pre_build(&site).is_err());
  assert_eq!(read_generated_page(&site).unwrap(), before);
  Ok(())
}

#[test]
#[traced_test]
fn test_custom_paths() -> TestResult<()> {
  let (dir, site) = create_test_site();
  fs::create_dir_all(dir.path().join("config"))?;
  fs::write(dir.path().join("config/team.yml"), "authors:\n  a:\n    name: Ann\n")?;

  let plugin = AuthorsPlugin::new(
    PluginConfig::default().with_authors_file("config/team.yml").with_output_page("about/team.md"),
  );
  let written = plugin.on_pre_build(&site)?.unwrap();

  assert_eq!(written, site.docs_dir.join("about/team.md"));
  assert!(fs::read_to_string(written)?.contains("## Ann"));
  Ok(())
}

#[test]
#[traced_test]
fn test_on_files_adds_generated_page() -> TestResult<()> {
  let (dir, site) = create_test_site();
  write_authors_file(dir.path(), "authors:\n  author_one:\n    name: Author One\n");
  let plugin = AuthorsPlugin::default();
  plugin.on_pre_build(&site)?;

  let mut files = vec![PathBuf::from("index.md"), PathBuf::from("about.md")];
  assert!(plugin.on_files(&mut files));
  assert!(files.contains(&PathBuf::from("authors.md")));
  assert_eq!(files.len(), 3);
  Ok(())
}

#[test]
#[traced_test]
fn test_on_files_does_not_duplicate_generated_page() -> TestResult<()> {
  let (dir, site) = create_test_site();
  write_authors_file(dir.path(), "authors:\n  author_one:\n    name: Author One\n");
  let plugin = AuthorsPlugin::default();
  plugin.on_pre_build(&site)?;

  let mut files =
    vec![PathBuf::from("index.md"), PathBuf::from("about.md"), PathBuf::from("authors.md")];
  assert!(!plugin.on_files(&mut files));
  assert_eq!(files.len(), 3);
  Ok(())
}
