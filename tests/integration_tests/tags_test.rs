// tests/integration_tests/tags_test.rs
use crate::common::{create_test_file, tags_args};
use anyhow::Result;
use clap::Parser as _;
use markdex::cli::{Cli, Command, run_tags};
use std::fs;
use tempfile::TempDir;

fn setup_basic_notes() -> Result<TempDir> {
    let dir = TempDir::new()?;
    create_test_file(
        dir.path(),
        "foo.md",
        "---\ntags: [foo, spam]\n---\n# Foo\nSome content about foo.\n",
    )?;
    create_test_file(
        dir.path(),
        "bar.md",
        "---\ntags: [bar, eggs, spam]\n---\n# Bar\nSome content about bar.\n",
    )?;
    Ok(dir)
}

#[test]
fn test_basic_tag_index() -> Result<()> {
    let dir = setup_basic_notes()?;
    let output = dir.path().join("index.md");

    run_tags(&tags_args(dir.path(), &output))?;

    let text = fs::read_to_string(&output)?;
    assert_eq!(
        text,
        "# Index\n\
         ## bar\n\
         - [Bar](bar.md)\n\
         \n\
         ## eggs\n\
         - [Bar](bar.md)\n\
         \n\
         ## foo\n\
         - [Foo](foo.md)\n\
         \n\
         ## spam\n\
         - [Bar](bar.md)\n\
         - [Foo](foo.md)"
    );
    Ok(())
}

#[test]
fn test_tag_index_is_idempotent() -> Result<()> {
    let dir = setup_basic_notes()?;
    let output = dir.path().join("index.md");

    run_tags(&tags_args(dir.path(), &output))?;
    let first = fs::read_to_string(&output)?;

    // The second run also discovers the generated index, which has no
    // front matter and therefore contributes nothing.
    run_tags(&tags_args(dir.path(), &output))?;
    let second = fs::read_to_string(&output)?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_wiki_links_drop_extensions() -> Result<()> {
    let dir = setup_basic_notes()?;
    let output = dir.path().join("index.md");

    let mut args = tags_args(dir.path(), &output);
    args.wiki_links = true;
    run_tags(&args)?;

    let text = fs::read_to_string(&output)?;
    assert!(text.contains("- [Bar](bar)\n"));
    assert!(text.ends_with("- [Foo](foo)"));
    Ok(())
}

#[test]
fn test_capitalized_headings() -> Result<()> {
    let dir = setup_basic_notes()?;
    let output = dir.path().join("index.md");

    let mut args = tags_args(dir.path(), &output);
    args.capitalize = true;
    run_tags(&args)?;

    let text = fs::read_to_string(&output)?;
    for header in ["## Bar\n", "## Eggs\n", "## Foo\n", "## Spam\n"] {
        assert!(text.contains(header), "missing {header:?}");
    }
    Ok(())
}

#[test]
fn test_tag_annotations() -> Result<()> {
    let dir = setup_basic_notes()?;
    let output = dir.path().join("index.md");

    let mut args = tags_args(dir.path(), &output);
    args.tag_links = true;
    run_tags(&args)?;

    let text = fs::read_to_string(&output)?;
    assert!(text.contains("- [Bar](bar.md) `eggs` `spam`\n"));
    assert!(text.ends_with("- [Bar](bar.md) `bar` `eggs`\n- [Foo](foo.md) `foo`"));
    Ok(())
}

#[test]
fn test_table_of_contents() -> Result<()> {
    let dir = setup_basic_notes()?;
    let output = dir.path().join("index.md");

    let mut args = tags_args(dir.path(), &output);
    args.toc = true;
    run_tags(&args)?;

    let text = fs::read_to_string(&output)?;
    assert!(text.starts_with(
        "# Index\n\
         \n\
         ---\n\
         \n\
         ## Table of contents\n\
         - [bar](#bar)\n\
         - [eggs](#eggs)\n\
         - [foo](#foo)\n\
         - [spam](#spam)\n\
         \n\
         ---\n\
         \n\
         ## bar\n"
    ));
    Ok(())
}

#[test]
fn test_custom_title() -> Result<()> {
    let dir = setup_basic_notes()?;
    let output = dir.path().join("index.md");

    let mut args = tags_args(dir.path(), &output);
    args.title = String::from("My Notes");
    run_tags(&args)?;

    let text = fs::read_to_string(&output)?;
    assert!(text.starts_with("# My Notes\n"));
    Ok(())
}

#[test]
fn test_hidden_directories_excluded() -> Result<()> {
    let dir = setup_basic_notes()?;
    create_test_file(
        dir.path(),
        ".bar/hidden.md",
        "---\ntags: [secret]\n---\n# Hidden\n",
    )?;
    create_test_file(dir.path(), ".stray.md", "---\ntags: [secret]\n---\n")?;
    let output = dir.path().join("index.md");

    run_tags(&tags_args(dir.path(), &output))?;

    let text = fs::read_to_string(&output)?;
    assert!(!text.contains("secret"));
    assert!(!text.contains("hidden.md"));
    Ok(())
}

#[test]
fn test_documents_in_subdirectories() -> Result<()> {
    let dir = TempDir::new()?;
    create_test_file(
        dir.path(),
        "sub/deep.md",
        "---\ntags: [deep]\n---\n# Deep\n",
    )?;
    let output = dir.path().join("index.md");

    run_tags(&tags_args(dir.path(), &output))?;

    let text = fs::read_to_string(&output)?;
    assert_eq!(text, "# Index\n## deep\n- [Deep](sub/deep.md)");
    Ok(())
}

#[test]
fn test_body_backticks_produce_no_tags() -> Result<()> {
    let dir = TempDir::new()?;
    create_test_file(
        dir.path(),
        "tagged.md",
        "---\ntags: [real]\n---\n# Tagged\n",
    )?;
    create_test_file(
        dir.path(),
        "plain.md",
        "# Plain\nBody text mentioning `notatag` and `another` inline.\n",
    )?;
    let output = dir.path().join("index.md");

    run_tags(&tags_args(dir.path(), &output))?;

    let text = fs::read_to_string(&output)?;
    assert_eq!(text, "# Index\n## real\n- [Tagged](tagged.md)");
    Ok(())
}

#[test]
fn test_malformed_front_matter_does_not_abort() -> Result<()> {
    let dir = TempDir::new()?;
    create_test_file(dir.path(), "good.md", "---\ntags: [ok]\n---\n# Good\n")?;
    create_test_file(dir.path(), "bad.md", "---\ntags: [broken\n---\n# Bad\n")?;
    let output = dir.path().join("index.md");

    run_tags(&tags_args(dir.path(), &output))?;

    let text = fs::read_to_string(&output)?;
    assert_eq!(text, "# Index\n## ok\n- [Good](good.md)");
    Ok(())
}

#[test]
fn test_non_utf8_document_does_not_abort() -> Result<()> {
    let dir = TempDir::new()?;
    create_test_file(dir.path(), "good.md", "---\ntags: [ok]\n---\n# Good\n")?;
    fs::write(dir.path().join("binary.bin"), [0xff, 0xfe, 0x00, 0x42])?;
    let output = dir.path().join("index.md");

    run_tags(&tags_args(dir.path(), &output))?;

    let text = fs::read_to_string(&output)?;
    assert_eq!(text, "# Index\n## ok\n- [Good](good.md)");
    Ok(())
}

#[test]
fn test_duplicate_titles_across_tags() -> Result<()> {
    let dir = TempDir::new()?;
    create_test_file(dir.path(), "one.md", "---\ntags: [shared, solo]\n---\n# Note\n")?;
    create_test_file(dir.path(), "two.md", "---\ntags: [shared]\n---\n# Note\n")?;
    let output = dir.path().join("index.md");

    run_tags(&tags_args(dir.path(), &output))?;

    let text = fs::read_to_string(&output)?;
    assert!(text.contains("## shared\n- [one.md](one.md)\n- [two.md](two.md)\n"));
    assert!(text.ends_with("## solo\n- [Note](one.md)"));
    Ok(())
}

#[test]
fn test_missing_input_root_is_fatal() {
    let dir = TempDir::new().unwrap();
    let args = tags_args(
        &dir.path().join("does-not-exist"),
        &dir.path().join("index.md"),
    );
    let result = run_tags(&args);
    assert!(result.is_err());
    assert!(!dir.path().join("index.md").exists(), "no partial output");
}

#[test]
fn test_cli_parses_tags_flags() {
    let cli = Cli::try_parse_from([
        "markdex",
        "tags",
        "-i",
        "notes",
        "-o",
        "index.md",
        "-t",
        "My Index",
        "--wiki-links",
        "--toc",
    ])
    .unwrap();
    match cli.command {
        Command::Tags(args) => {
            assert_eq!(args.input.display().to_string(), "notes");
            assert_eq!(args.title, "My Index");
            assert!(args.wiki_links);
            assert!(args.toc);
            assert!(!args.capitalize);
            assert!(!args.tag_links);
            assert!(!args.debug);
        }
        other => panic!("expected tags command, got {other:?}"),
    }
}
