//! Command-line interface for the viewer.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;

use crate::display::{render_alignment, render_metadata, render_sections};
use crate::error::Result;
use crate::identity::current_user;
use crate::store::{DirStore, DocumentStore};

/// Default store directory.
pub const DEFAULT_STORE_DIR: &str = "documents";

/// Synopsis - store and read TEI critical editions from the terminal.
#[derive(Parser)]
#[command(name = "synopsis")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Store a document file.
    Upload {
        /// Path of the file to store
        path: PathBuf,

        /// Store directory
        #[arg(short, long, default_value = DEFAULT_STORE_DIR)]
        store: PathBuf,

        /// Owner to attribute the upload to (default: current user)
        #[arg(long)]
        owner: Option<String>,
    },

    /// List stored documents.
    List {
        /// Store directory
        #[arg(short, long, default_value = DEFAULT_STORE_DIR)]
        store: PathBuf,

        /// Owner whose documents to list (default: current user)
        #[arg(long)]
        owner: Option<String>,
    },

    /// Delete a stored document.
    Delete {
        /// Id of the stored document
        id: String,

        /// Store directory
        #[arg(short, long, default_value = DEFAULT_STORE_DIR)]
        store: PathBuf,
    },

    /// Parse a stored document and display it.
    Show {
        /// Id of the stored document
        id: String,

        /// Store directory
        #[arg(short, long, default_value = DEFAULT_STORE_DIR)]
        store: PathBuf,

        /// Align layers by verse number instead of listing sections
        #[arg(long)]
        align: bool,

        /// Print the stored text without parsing
        #[arg(long)]
        raw: bool,
    },

    /// Export a parsed document as JSON.
    Export {
        /// Id of the stored document
        id: String,

        /// Store directory
        #[arg(short, long, default_value = DEFAULT_STORE_DIR)]
        store: PathBuf,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Upload { path, store, owner } => upload_command(&path, &store, owner),
        Commands::List { store, owner } => list_command(&store, owner),
        Commands::Delete { id, store } => delete_command(&id, &store),
        Commands::Show {
            id,
            store,
            align,
            raw,
        } => show_command(&id, &store, align, raw),
        Commands::Export { id, store, output } => export_command(&id, &store, output.as_deref()),
    }
}

/// Execute the upload command.
fn upload_command(path: &Path, store_dir: &Path, owner: Option<String>) -> Result<()> {
    let owner = owner.unwrap_or_else(current_user);
    let bytes = fs::read(path)?;
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("document");

    let mut store = DirStore::open(store_dir)?;
    let file = store.upload(&owner, name, &bytes)?;

    println!(
        "{} {} ({} bytes, {})",
        style("Stored").bold(),
        file.name,
        file.size,
        file.content_type
    );
    println!("  id: {}", file.id);
    Ok(())
}

/// Execute the list command.
fn list_command(store_dir: &Path, owner: Option<String>) -> Result<()> {
    let owner = owner.unwrap_or_else(current_user);
    let store = DirStore::open(store_dir)?;
    let files = store.list(&owner)?;

    if files.is_empty() {
        println!("No documents stored for {owner}.");
        return Ok(());
    }

    println!("{} document(s) for {}:", files.len(), style(&owner).cyan());
    for file in files {
        println!(
            "  {}  {:>8} B  {}  {}",
            file.id,
            file.size,
            file.uploaded_at.format("%Y-%m-%d %H:%M"),
            style(&file.name).bold()
        );
    }
    Ok(())
}

/// Execute the delete command.
fn delete_command(id: &str, store_dir: &Path) -> Result<()> {
    let mut store = DirStore::open(store_dir)?;
    store.delete(id)?;
    println!("{} {id}", style("Deleted").bold());
    Ok(())
}

/// Execute the show command.
fn show_command(id: &str, store_dir: &Path, align: bool, raw: bool) -> Result<()> {
    let store = DirStore::open(store_dir)?;
    let text = store.fetch(id)?;

    if raw {
        print!("{text}");
        return Ok(());
    }

    let doc = match synopsis_tei::parse(&text) {
        Ok(doc) => doc,
        Err(e) => {
            // Fatal parse errors fall back to the raw view by hand.
            eprintln!(
                "{} document could not be parsed; rerun with --raw to see the stored text",
                style("note:").yellow()
            );
            return Err(e.into());
        }
    };

    print!("{}", render_metadata(&doc));
    if align {
        print!("{}", render_alignment(&doc));
    } else {
        print!("{}", render_sections(&doc));
    }
    Ok(())
}

/// Execute the export command.
fn export_command(id: &str, store_dir: &Path, output: Option<&Path>) -> Result<()> {
    let store = DirStore::open(store_dir)?;
    let text = store.fetch(id)?;
    let doc = synopsis_tei::parse(&text)?;
    let json = serde_json::to_string_pretty(&doc)?;

    match output {
        Some(path) => {
            fs::write(path, json)?;
            println!("{} {}", style("Wrote").bold(), path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
