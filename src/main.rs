//! # Enviro News
//!
//! Aggregates recently published press releases from environmental advocacy
//! organizations into one feed, ordered newest first.
//!
//! ## Features
//!
//! - Scrapes the listing pages of Greenpeace USA, Earthjustice, Sierra Club
//!   and the Environmental Working Group
//! - Normalizes each site's date format and keeps the last two weeks
//! - Marks favorites by article link
//! - Outputs a JSON feed file and an optional Markdown rendering
//!
//! ## Usage
//!
//! ```sh
//! enviro_news --all -j ./json -m ./markdown
//! ```
//!
//! ## Architecture
//!
//! 1. **Fetching**: One GET per selected source's listing page, in sequence
//! 2. **Extraction**: A per-source extractor pulls raw fields out of each block
//! 3. **Normalization**: Dates are parsed and filtered to the recency window
//! 4. **Merging**: All sources are combined and sorted by date, newest first
//! 5. **Output**: JSON feed file and Markdown report

use chrono::Local;
use clap::Parser;
use itertools::Itertools;
use std::error::Error;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod dates;
mod favorites;
mod fetcher;
mod models;
mod outputs;
mod pipeline;
mod scrapers;
mod utils;
mod window;

use cli::Cli;
use config::PipelineConfig;
use favorites::Favorites;
use fetcher::HttpFetcher;
use models::FeedSnapshot;
use outputs::{json, markdown};
use utils::ensure_writable_dir;
use window::RecencyWindow;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("enviro_news starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    if let Err(e) = ensure_writable_dir(&args.json_output_dir).await {
        error!(
            path = %args.json_output_dir,
            error = %e,
            "JSON output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    let config = PipelineConfig::load(args.config.as_deref()).await?;
    let fetcher = HttpFetcher::new(&config)?;

    // ---- Search ----
    let generated_at = Local::now();
    let window = RecencyWindow::current(config.window_days);
    let selected = args.selected_sources();
    info!(
        sources = %selected.iter().map(|s| s.label()).join(", "),
        start = %window.start,
        end = %window.end,
        "Searching"
    );

    let articles = pipeline::run_search(&selected, &fetcher, window).await;
    if articles.is_empty() && !selected.is_empty() {
        warn!("No articles found for the selected sources");
    }
    for (source, count) in articles.iter().counts_by(|a| a.source.as_str()) {
        info!(source, count, "Articles in feed");
    }

    // ---- Favorites ----
    let mut favorites = Favorites::new();
    for link in args.favorites.iter().unique() {
        match articles.iter().find(|a| &a.link == link) {
            Some(article) => {
                favorites.toggle(article);
            }
            None => warn!(%link, "Favorite link is not in the current feed; ignoring"),
        }
    }

    let snapshot = FeedSnapshot {
        generated_at: generated_at.to_rfc3339(),
        window_start: window.start,
        window_end: window.end,
        sources: selected.into_iter().collect(),
        articles,
        favorites: favorites.iter().cloned().collect(),
    };

    // ---- Output ----
    json::write_feed(&snapshot, &args.json_output_dir).await?;

    if let Some(markdown_dir) = &args.markdown_output_dir {
        ensure_writable_dir(markdown_dir).await?;
        let md = markdown::feed_to_markdown(&snapshot, &favorites);
        let path = format!("{}/{}.md", markdown_dir.trim_end_matches('/'), snapshot.window_end);
        if let Err(e) = tokio::fs::write(&path, md).await {
            error!(%path, error = %e, "Failed writing Markdown");
        } else {
            info!(%path, "Wrote feed Markdown");
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        articles = snapshot.articles.len(),
        favorites = snapshot.favorites.len(),
        "Execution complete"
    );

    Ok(())
}
