//! CLI argument types
//!
//! Thin file-backed front end over the library: the JSON catalog file
//! stands in for the document store the deployed bots use.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// titleseek CLI
#[derive(Parser)]
#[command(name = "titleseek")]
#[command(about = "Staged title search over a JSON catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output (no short flag to avoid conflicts)
    #[arg(long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a query against the catalog
    Search(SearchArgs),
    /// Insert or update an entry from raw post text
    Ingest(IngestArgs),
    /// Delete an entry (administrative)
    Remove(RemoveArgs),
    /// Show catalog counts
    Stats(StatsArgs),
}

/// Search command arguments
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Path to the catalog JSON file
    #[arg(short = 'c', long, env = "TITLESEEK_CATALOG")]
    pub catalog: PathBuf,

    /// Free-text query (case-insensitive)
    #[arg(short = 'q', long)]
    pub query: String,

    /// Maximum number of results (default 10)
    #[arg(short = 'l', long)]
    pub limit: Option<usize>,

    /// Only return entries with this language attribute
    #[arg(long)]
    pub language: Option<String>,

    /// Minimum fuzzy similarity, 0-100 (default 70)
    #[arg(short = 't', long)]
    pub threshold: Option<u8>,

    /// Break score ties newest-first instead of catalog order
    #[arg(long)]
    pub recent: bool,
}

/// Ingest command arguments
#[derive(Parser, Debug)]
pub struct IngestArgs {
    /// Path to the catalog JSON file
    #[arg(short = 'c', long, env = "TITLESEEK_CATALOG")]
    pub catalog: PathBuf,

    /// Upstream post id (upsert key)
    #[arg(short = 'i', long)]
    pub id: u64,

    /// Raw post text; language and year attributes are detected from it
    #[arg(short = 'x', long)]
    pub text: String,

    /// Publication time, RFC 3339 (defaults to now)
    #[arg(short = 'd', long)]
    pub date: Option<String>,
}

/// Remove command arguments
#[derive(Parser, Debug)]
pub struct RemoveArgs {
    /// Path to the catalog JSON file
    #[arg(short = 'c', long, env = "TITLESEEK_CATALOG")]
    pub catalog: PathBuf,

    /// Entry id to delete
    #[arg(short = 'i', long)]
    pub id: u64,
}

/// Stats command arguments
#[derive(Parser, Debug)]
pub struct StatsArgs {
    /// Path to the catalog JSON file
    #[arg(short = 'c', long, env = "TITLESEEK_CATALOG")]
    pub catalog: PathBuf,
}
