use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};

use crate::content::NoteStore;
use crate::indexer::{SiteItemSource, build_index, save_index};
use crate::search::ItemSource;
use crate::timeline::{group_by_month, sort_descending};
use crate::tui::run_interactive;
use crate::utils::{format_path_with_tilde, resolve_site_dir};

#[derive(Parser)]
#[command(name = "notesite")]
#[command(version = "0.1.0")]
#[command(about = "Browse and search a personal MDX note site from the terminal", long_about = None)]
pub struct Cli {
    /// Site root directory (defaults to $NOTESITE_DIR, then the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub site: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rebuild the search index and write it to public/search-index.json
    Index,
    /// Show statistics about the site content
    Stats,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let site_dir = resolve_site_dir(cli.site)?;

    match &cli.command {
        Some(Commands::Index) => {
            rebuild_index(&site_dir)?;
        }
        Some(Commands::Stats) => {
            show_stats(&site_dir)?;
        }
        None => {
            launch_tui(&site_dir)?;
        }
    }

    Ok(())
}

fn rebuild_index(site_dir: &Path) -> Result<()> {
    let items = build_index(site_dir)?;
    let path = save_index(site_dir, &items)?;

    println!("Wrote {} items to {}", items.len(), format_path_with_tilde(&path));

    Ok(())
}

fn show_stats(site_dir: &Path) -> Result<()> {
    let items = build_index(site_dir)?;

    let notes = items.iter().filter(|i| i.kind == "note").count();
    let playgrounds = items.iter().filter(|i| i.kind == "playground").count();

    // Drafts never reach the index, so count them from the content tree
    let mut drafts = 0;
    for dir in ["notes", "playgrounds"] {
        let store = NoteStore::new(site_dir.join("content").join(dir));
        if store.exists() {
            drafts += store.load_all()?.iter().filter(|n| n.metadata.draft).count();
        }
    }

    println!("Site Content Statistics");
    println!("================================");
    println!("Published items: {}", items.len());
    println!("  Notes: {}", notes);
    println!("  Playgrounds: {}", playgrounds);
    println!("Drafts (unpublished): {}", drafts);
    println!();
    println!("Site directory: {}", format_path_with_tilde(site_dir));

    if let Some(newest) = items.first() {
        println!("Newest item: {}", newest.metadata.date);
    }
    if let Some(oldest) = items.last() {
        println!("Oldest item: {}", oldest.metadata.date);
    }

    let months = sort_descending(group_by_month(&items));
    if !months.is_empty() {
        println!();
        println!("By month:");
        for (_, group) in &months {
            println!("  {}: {}", group.label, group.items.len());
        }
    }

    Ok(())
}

fn launch_tui(site_dir: &Path) -> Result<()> {
    let store = NoteStore::new(site_dir.join("content").join("notes"));
    if !store.exists() {
        bail!(
            "No notes directory at {}. Run from the site root or pass --site <DIR>.",
            format_path_with_tilde(store.dir())
        );
    }

    let notes = store.published()?;
    let source: Arc<dyn ItemSource> = Arc::new(SiteItemSource::new(site_dir));

    run_interactive(notes, source)
}
