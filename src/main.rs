//! titleseek CLI
//!
//! Command-line front end over the matching core, using a JSON file as
//! the catalog store:
//! - `search` - resolve a query, print ranked id/score/stage/title lines
//! - `ingest` - upsert an entry from raw post text
//! - `remove` - administrative delete
//! - `stats`  - entry count and per-language counts

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Parser;

use titleseek::catalog::{entry_from_post, Catalog, ATTR_LANGUAGE};
use titleseek::cli::{Cli, Commands, IngestArgs, RemoveArgs, SearchArgs, StatsArgs};
use titleseek::config::SearchConfig;
use titleseek::error::AppError;
use titleseek::search::{AttributeFilter, SearchEngine};
use titleseek::TieBreak;

fn main() {
    let cli = Cli::parse();

    // Initialize logging based on verbosity flags
    let log_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr) // Log to stderr to keep stdout clean
        .init();

    let result = match cli.command {
        Commands::Search(args) => execute_search(args),
        Commands::Ingest(args) => execute_ingest(args),
        Commands::Remove(args) => execute_remove(args),
        Commands::Stats(args) => execute_stats(args),
    };

    match result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(exit_code(&e));
        }
    }
}

/// 2 for caller misuse, 1 for everything else
fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<AppError>() {
        Some(app) if app.is_precondition() => 2,
        _ => 1,
    }
}

fn execute_search(args: SearchArgs) -> Result<String> {
    let mut config = SearchConfig::from_env()?;
    if let Some(limit) = args.limit {
        config.result_limit = limit;
    }
    if let Some(threshold) = args.threshold {
        config.fuzzy_threshold = threshold;
    }
    if args.recent {
        config.tie_break = TieBreak::Recency;
    }

    let engine = SearchEngine::with_config(config)?;
    let catalog = Catalog::load(&args.catalog).map_err(AppError::from)?;

    let filter = args
        .language
        .map(|lang| AttributeFilter::new(ATTR_LANGUAGE, lang));
    let results = engine.search_filtered(&args.query, catalog.entries(), filter.as_ref())?;

    if results.is_empty() {
        return Ok("No match found.".to_string());
    }

    let lines: Vec<String> = results
        .iter()
        .map(|r| {
            format!(
                "{}\t{}\t{:?}\t{}",
                r.entry.id, r.score, r.stage, r.entry.title
            )
        })
        .collect();
    Ok(lines.join("\n"))
}

fn execute_ingest(args: IngestArgs) -> Result<String> {
    let published_at: DateTime<Utc> = match args.date {
        Some(raw) => raw
            .parse()
            .map_err(|e| AppError::InvalidInput(format!("bad --date value: {e}")))?,
        None => Utc::now(),
    };

    let mut catalog = Catalog::load(&args.catalog).map_err(AppError::from)?;
    let entry = entry_from_post(args.id, &args.text, published_at);
    let updated = catalog.upsert(entry);
    catalog.save(&args.catalog).map_err(AppError::from)?;

    Ok(format!(
        "{} entry {} ({} total)",
        if updated { "Updated" } else { "Indexed" },
        args.id,
        catalog.len()
    ))
}

fn execute_remove(args: RemoveArgs) -> Result<String> {
    let mut catalog = Catalog::load(&args.catalog).map_err(AppError::from)?;
    if !catalog.remove(args.id) {
        return Ok(format!("Entry {} not found.", args.id));
    }
    catalog.save(&args.catalog).map_err(AppError::from)?;
    Ok(format!("Removed entry {} ({} total)", args.id, catalog.len()))
}

fn execute_stats(args: StatsArgs) -> Result<String> {
    let catalog = Catalog::load(&args.catalog).map_err(AppError::from)?;

    let mut out = format!("Entries: {}", catalog.len());
    let mut by_language: Vec<(String, usize)> = catalog
        .attribute_counts(ATTR_LANGUAGE)
        .into_iter()
        .collect();
    by_language.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    for (language, count) in by_language {
        out.push_str(&format!("\n  {}: {}", language, count));
    }
    Ok(out)
}
