//! The search pipeline: fetch → extract → normalize → filter → merge.
//!
//! A run fetches each selected source's listing page one after another,
//! hands the markup to that source's extractor, parses and window-filters
//! the dates, and merges everything into one feed ordered newest first.
//!
//! Failures stay local. A source that can't be fetched contributes nothing,
//! and a block whose date is missing or unparseable is dropped on its own.

use crate::dates::parse_date;
use crate::fetcher::PageFetcher;
use crate::models::{Article, SourceId};
use crate::scrapers::extractor_for;
use crate::utils::truncate_for_log;
use crate::window::RecencyWindow;
use futures::stream::{self, StreamExt};
use std::collections::BTreeSet;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

/// Run a search over the selected sources.
///
/// The caller builds `window` once per run (see [`RecencyWindow::current`]),
/// so every source is judged against the same bounds. An empty selection
/// returns an empty feed without touching the fetcher.
#[instrument(level = "info", skip(fetcher), fields(start = %window.start, end = %window.end))]
pub async fn run_search<F: PageFetcher>(
    selected: &BTreeSet<SourceId>,
    fetcher: &F,
    window: RecencyWindow,
) -> Vec<Article> {
    if selected.is_empty() {
        info!("No sources selected");
        return Vec::new();
    }

    let t0 = Instant::now();
    let per_source: Vec<Vec<Article>> = stream::iter(selected.iter().copied())
        .then(|source| async move { search_source(source, fetcher, window).await })
        .collect()
        .await;

    let feed = merge_feed(per_source);
    info!(
        count = feed.len(),
        elapsed_ms = t0.elapsed().as_millis() as u64,
        "Search complete"
    );
    feed
}

/// Fetch and scrape a single source; a fetch failure yields no articles.
#[instrument(level = "info", skip(fetcher, window), fields(source = source.label()))]
async fn search_source<F: PageFetcher>(
    source: SourceId,
    fetcher: &F,
    window: RecencyWindow,
) -> Vec<Article> {
    match fetcher.fetch_page(source.listing_url()).await {
        Ok(html) => scrape_page(source, &html, window),
        Err(e) => {
            warn!(url = source.listing_url(), error = %e, "Fetch failed; source contributes no articles");
            Vec::new()
        }
    }
}

/// Turn one source's listing markup into in-window articles.
pub fn scrape_page(source: SourceId, html: &str, window: RecencyWindow) -> Vec<Article> {
    let extractor = extractor_for(source);
    let raw = extractor.extract(html);
    let extracted = raw.len();
    if extracted == 0 {
        debug!(
            source = source.label(),
            preview = %truncate_for_log(html.trim(), 200),
            "No article blocks matched"
        );
    }

    let articles: Vec<Article> = raw
        .into_iter()
        .filter_map(|raw| {
            let date = match parse_date(&raw.date, extractor.date_format()) {
                Ok(date) => date,
                Err(e) => {
                    debug!(raw_date = %raw.date, error = %e, "Unparseable date; dropping block");
                    return None;
                }
            };
            if !window.contains(date) {
                debug!(%date, "Outside recency window");
                return None;
            }
            Some(Article::from_raw(raw, source, date))
        })
        .collect();

    info!(
        source = source.label(),
        extracted,
        kept = articles.len(),
        "Scraped listing page"
    );
    articles
}

/// Concatenate per-source results and order them newest first.
///
/// The sort is stable, so same-day articles keep their source order. No
/// deduplication is performed.
pub fn merge_feed(per_source: Vec<Vec<Article>>) -> Vec<Article> {
    let mut feed: Vec<Article> = per_source.into_iter().flatten().collect();
    feed.sort_by(|a, b| b.date_value.cmp(&a.date_value));
    feed
}
