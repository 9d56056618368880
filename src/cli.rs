// src/cli.rs
use anyhow::{Context as _, Result};
use clap::{Args, Parser, Subcommand};
use log::{LevelFilter, debug};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::index::{BacklinkIndex, TagIndex};
use crate::core::links::scrape_backlinks;
use crate::core::render::{render_backlinks, render_index};
use crate::core::scrape::scrape_tags_and_title;
use crate::core::walker::discover_files;
use crate::models::RenderOptions;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a tag index from the front matter of a directory of notes
    Tags(TagsArgs),
    /// Work with the inline links between notes
    Backlinks {
        #[command(subcommand)]
        command: BacklinksCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum BacklinksCommand {
    /// Find the links in each note and write a report of them
    Find(FindArgs),
}

#[derive(Args, Debug)]
pub struct TagsArgs {
    /// The location of the input files
    #[arg(short, long)]
    pub input: PathBuf,

    /// The location of the output file
    #[arg(short, long)]
    pub output: PathBuf,

    /// The title of the generated index file
    #[arg(short, long, default_value = "Index")]
    pub title: String,

    /// If set, links will be generated for a wiki with file extensions excluded
    #[arg(long)]
    pub wiki_links: bool,

    /// If set, tag names in the generated index will have their first character capitalized
    #[arg(long)]
    pub capitalize: bool,

    /// If set, links to files in the generated index will be annotated with the list of other tags they have
    #[arg(long)]
    pub tag_links: bool,

    /// If set, a table of contents will be generated containing a link to the heading of each tag
    #[arg(long)]
    pub toc: bool,

    /// If set, debug logging will be enabled
    #[arg(long)]
    pub debug: bool,
}

#[derive(Args, Debug)]
pub struct FindArgs {
    /// The location of the input files
    #[arg(short, long)]
    pub input: PathBuf,

    /// The location of the output file
    #[arg(short, long)]
    pub output: PathBuf,

    /// If set, debug logging will be enabled
    #[arg(long)]
    pub debug: bool,
}

/// Dispatches a parsed command line.
///
/// # Errors
///
/// Returns an error when the selected subcommand fails; see [`run_tags`]
/// and [`run_backlinks_find`].
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Tags(args) => run_tags(&args),
        Command::Backlinks {
            command: BacklinksCommand::Find(args),
        } => run_backlinks_find(&args),
    }
}

/// Scans the input tree, aggregates front-matter tags, and writes the
/// rendered tag index to the output path.
///
/// The output is rendered fully in memory and written in a single call, so
/// nothing is left behind when the run fails partway.
///
/// # Errors
///
/// Returns an error if the input tree cannot be walked, a document cannot
/// be read, or the output file cannot be written. Malformed front matter
/// is not an error; the document is indexed as tagless.
pub fn run_tags(args: &TagsArgs) -> Result<()> {
    init_logging(args.debug);
    debug!(
        "tags called with -i {} and -o {}",
        args.input.display(),
        args.output.display()
    );

    let mut index = TagIndex::new();
    for path in discover_files(&args.input)? {
        let content = read_document(&path)?;
        let (tags, title) = scrape_tags_and_title(&content);
        index.add_document(&path, &tags, title.as_deref());
    }

    let options = RenderOptions {
        title: args.title.clone(),
        wiki_links: args.wiki_links,
        capitalize: args.capitalize,
        tag_links: args.tag_links,
        toc: args.toc,
    };
    let text = render_index(&index, &options, &args.output);
    fs::write(&args.output, text)
        .with_context(|| format!("Failed to write output file: {}", args.output.display()))
}

/// Scans the input tree for inline links and writes the backlink report to
/// the output path.
///
/// # Errors
///
/// Returns an error if the input tree cannot be walked, a document cannot
/// be read, or the output file cannot be written.
pub fn run_backlinks_find(args: &FindArgs) -> Result<()> {
    init_logging(args.debug);
    debug!(
        "backlinks find called with -i {} and -o {}",
        args.input.display(),
        args.output.display()
    );

    let mut index = BacklinkIndex::new();
    for path in discover_files(&args.input)? {
        let content = read_document(&path)?;
        index.add_document(&path, scrape_backlinks(&content));
    }

    let text = render_backlinks(&index, &args.output);
    fs::write(&args.output, text)
        .with_context(|| format!("Failed to write output file: {}", args.output.display()))
}

// Documents are byte content; anything that is not valid UTF-8 is decoded
// lossily rather than aborting the run.
fn read_document(path: &Path) -> Result<String> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn init_logging(debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    // try_init so that repeated runs in one process (tests) stay quiet.
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .try_init();
}
