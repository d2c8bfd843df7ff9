use super::*;

#[test]
#[traced_test]
fn test_end_to_end_ann_and_bo() -> TestResult<()> {
  let page = render_page("authors: {a: {name: \"Ann\"}, b: {name: \"Bo\", github: \"bo99\"}}")?;

  let ann = page.find("## Ann").unwrap();
  let bo = page.find("## Bo").unwrap();
  assert!(page.starts_with("# Our Amazing Authors"));
  assert!(!page[ann..bo].contains("]("));

  let links: Vec<_> = page[bo..].lines().filter(|line| line.contains("](")).collect();
  assert_eq!(links, ["- **GitHub:** [bo99](https://github.com/bo99)"]);
  Ok(())
}

#[test]
#[traced_test]
fn test_order_matches_document_for_many_authors() -> TestResult<()> {
  let page = render_page(
    r#"
authors:
  delta: {name: Delta}
  alpha: {name: Alpha}
  charlie: {name: Charlie}
  bravo: {name: Bravo}
"#,
  )?;

  let headings: Vec<_> = page.lines().filter(|line| line.starts_with("## ")).collect();
  assert_eq!(headings, ["## Delta", "## Alpha", "## Charlie", "## Bravo"]);
  Ok(())
}

#[test]
#[traced_test]
fn test_absent_fields_have_no_lines() -> TestResult<()> {
  let roster = Roster::from_yaml_str("authors:\n  a:\n    name: Ann\n    orcid: 0000-0002-1825-0097\n")?;
  let page = roster.render();

  assert!(page.contains("- **ORCID:** [0000-0002-1825-0097](https://orcid.org/0000-0002-1825-0097)"));
  for label in ["**Email:**", "**GitHub:**", "**LinkedIn:**", "**Twitter/X:**", "**Affiliation:**"] {
    assert!(!page.contains(label), "unexpected {label}");
  }
  Ok(())
}

#[test]
#[traced_test]
fn test_repeated_renders_identical() -> TestResult<()> {
  let payload = r#"
page_params:
  title: Team
  description: Everyone who helped.
  avatar_size: 80
  avatar_shape: circle
  avatar_align: right
authors:
  x: {name: Xi, avatar: xi.jpg, twitter: xi}
  y: {name: Yu, email: yu@example.com}
  z: {name: Zo, linkedin: zo}
"#;

  let first = render_page(payload)?;
  let second = render_page(payload)?;
  assert_eq!(first.as_bytes(), second.as_bytes());
  assert!(first.starts_with("# Team\n\nEveryone who helped.\n"));
  Ok(())
}

#[test]
#[traced_test]
fn test_failures_name_offenders() {
  match render_page("authors:\n  a:\n    description: x\n  b:\n    name: ' '\n") {
    Err(RosterError::Field(problems)) => {
      let scopes: Vec<_> = problems.iter().map(|p| p.scope.as_str()).collect();
      assert_eq!(scopes, ["authors.a", "authors.b"]);
    },
    other => panic!("expected field problems, got {other:?}"),
  }

  match render_page("page_params: {avatar_shape: triangle}\nauthors:\n  a: {name: Ann}\n") {
    Err(RosterError::Field(problems)) => assert_eq!(problems[0].field, "avatar_shape"),
    other => panic!("expected field problems, got {other:?}"),
  }
}

#[test]
#[traced_test]
fn test_roster_from_path() -> TestResult<()> {
  let (dir, _site) = create_test_site();
  let path = write_authors_file(dir.path(), "authors:\n  a:\n    name: Ann\n    twitter: ann_x\n");

  let roster = Roster::from_path(&path)?;
  assert_eq!(roster.authors.len(), 1);
  assert!(roster.render().contains("- **Twitter/X:** [ann_x](https://twitter.com/ann_x)"));

  assert!(matches!(Roster::from_path(dir.path().join("missing.yml")), Err(RosterError::Io(_))));
  Ok(())
}
