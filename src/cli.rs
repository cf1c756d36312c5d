//! Command-line interface for fontsnip.
//!
//! Argument parsing and subcommand dispatch: the two insert commands
//! and the browse window.

use crate::browse_window;
use crate::editor::{self, InsertPosition, SelectionRange};
use crate::picker;
use anyhow::{Context as _, Result, bail};
use clap::{Args, Parser, Subcommand};
use fontsnip_catalog::{FontFamily, fetch_catalog, import_snippet, link_snippet};
use fontsnip_config::{API_KEY_ENV_VAR, Config};
use std::path::PathBuf;

/// fontsnip - Google Fonts snippets for your documents
#[derive(Parser)]
#[command(name = "fontsnip")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Pick a font family and insert an HTML <link> snippet
    InsertLink {
        #[command(flatten)]
        args: InsertArgs,
    },
    /// Pick a font family and insert a CSS @import snippet
    InsertImport {
        #[command(flatten)]
        args: InsertArgs,
    },
    /// Browse the font catalog in a window
    Browse,
}

/// Target options shared by the insert commands.
#[derive(Args, Debug)]
pub struct InsertArgs {
    /// File to edit (the editing context)
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Byte range of the current selection to replace
    #[arg(long, value_name = "START..END", conflicts_with = "at", requires = "file")]
    pub replace: Option<SelectionRange>,

    /// Byte offset to insert at (default: end of file)
    #[arg(long, value_name = "OFFSET", requires = "file")]
    pub at: Option<usize>,

    /// Copy the snippet to the clipboard instead of editing a file
    #[arg(long, conflicts_with = "file")]
    pub copy: bool,

    /// Select this family non-interactively (exact name, case-insensitive)
    #[arg(long, value_name = "NAME")]
    pub family: Option<String>,
}

/// Which snippet an insert command produces.
#[derive(Debug, Clone, Copy)]
enum InsertKind {
    Link,
    Import,
}

/// Parse arguments and run the selected command.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::InsertLink { args } => insert(&config, InsertKind::Link, &args),
        Commands::InsertImport { args } => insert(&config, InsertKind::Import, &args),
        Commands::Browse => browse(&config),
    }
}

/// Where an insert command puts its snippet.
enum InsertTarget<'a> {
    Clipboard,
    File(&'a std::path::Path),
}

fn insert(config: &Config, kind: InsertKind, args: &InsertArgs) -> Result<()> {
    // Validate the editing context before touching the network, so an
    // invocation with nowhere to put the snippet fails fast with no
    // fetch and no mutation.
    let target = if args.copy {
        InsertTarget::Clipboard
    } else if let Some(file) = args.file.as_deref() {
        if !file.exists() {
            bail!("No editing context: file {} does not exist", file.display());
        }
        InsertTarget::File(file)
    } else {
        bail!(
            "No editing context: pass --file <PATH> to edit a file or --copy \
             to put the snippet on the clipboard"
        );
    };

    let families = fetch(config)?;
    let family = select_family(&families, args.family.as_deref())?;

    let snippet = match kind {
        InsertKind::Link => link_snippet(family),
        InsertKind::Import => import_snippet(family),
    };

    match target {
        InsertTarget::Clipboard => {
            let mut clipboard =
                arboard::Clipboard::new().context("Failed to access the system clipboard")?;
            clipboard
                .set_text(snippet)
                .context("Failed to copy the snippet to the clipboard")?;
            println!("Snippet for the {} font has been copied!", family.family);
        }
        InsertTarget::File(path) => {
            let position = match (&args.replace, args.at) {
                (Some(range), _) => InsertPosition::Replace(range.start..range.end),
                (None, Some(offset)) => InsertPosition::At(offset),
                (None, None) => InsertPosition::End,
            };
            editor::apply_edit(path, &position, &snippet)?;
            println!("Inserted {} snippet into {}", family.family, path.display());
        }
    }
    Ok(())
}

fn browse(config: &Config) -> Result<()> {
    let families = fetch(config)?;
    browse_window::run_browse_window(families, config.page_size)
}

/// Fetch the catalog using the configured credential and endpoint.
fn fetch(config: &Config) -> Result<Vec<FontFamily>> {
    let Some(api_key) = config.resolve_api_key() else {
        bail!(
            "No webfonts API key configured. Set {} or put `api_key: <key>` in {}",
            API_KEY_ENV_VAR,
            Config::config_path().display()
        );
    };
    let families = fetch_catalog(&api_key, config.endpoint.as_deref())?;
    if families.is_empty() {
        bail!("The font catalog is empty");
    }
    Ok(families)
}

/// Resolve the family to use: `--family` when given, the interactive
/// picker otherwise.
fn select_family<'a>(families: &'a [FontFamily], name: Option<&str>) -> Result<&'a FontFamily> {
    match name {
        Some(name) => picker::find_exact(families, name)
            .ok_or_else(|| anyhow::anyhow!("No font family named '{}' in the catalog", name)),
        None => picker::pick_interactive(families),
    }
}
