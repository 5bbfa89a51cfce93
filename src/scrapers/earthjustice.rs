//! Earthjustice news page scraper.
//!
//! <https://earthjustice.org/news> renders `div.news-card` tiles. The headline
//! is an `h3.news-card__title`, the link is a separate `a.news-card__link`
//! overlay, the date reads `05/Jan/2025` and the single category label is a
//! `span.news-card__category`.

use super::{Extractor, first_image, first_text, joined_text, resolve_link, selector};
use crate::dates::DateFormat;
use crate::models::{RawArticle, SourceId};
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::{debug, instrument};

static BLOCK: Lazy<Selector> = Lazy::new(|| selector("div.news-card"));
static TITLE: Lazy<Selector> = Lazy::new(|| selector("h3.news-card__title"));
static LINK: Lazy<Selector> = Lazy::new(|| selector("a.news-card__link[href]"));
static DATE: Lazy<Selector> = Lazy::new(|| selector("div.news-card__date"));
static CATEGORY: Lazy<Selector> = Lazy::new(|| selector("span.news-card__category"));
static IMAGE: Lazy<Selector> = Lazy::new(|| selector("img.news-card__image"));

#[derive(Debug)]
pub struct EarthjusticeExtractor;

impl Extractor for EarthjusticeExtractor {
    fn date_format(&self) -> DateFormat {
        DateFormat::DaySlashMonthYear
    }

    #[instrument(level = "debug", skip_all)]
    fn extract(&self, html: &str) -> Vec<RawArticle> {
        let base = SourceId::Earthjustice.base_url();
        let document = Html::parse_document(html);
        let mut articles = Vec::new();

        for block in document.select(&BLOCK) {
            let Some(date) = first_text(block, &DATE) else {
                debug!("Earthjustice card has no date; skipping");
                continue;
            };

            articles.push(RawArticle {
                title: first_text(block, &TITLE),
                link: block
                    .select(&LINK)
                    .next()
                    .and_then(|a| a.value().attr("href"))
                    .and_then(|href| resolve_link(base, href)),
                date,
                topic: joined_text(block, &CATEGORY),
                image: first_image(block, &IMAGE, base),
            });
        }

        debug!(count = articles.len(), "Extracted Earthjustice blocks");
        articles
    }
}
