//! Environmental Working Group news-release scraper.
//!
//! The listing at <https://www.ewg.org/news-insights/news-release> wraps each
//! release in a `div.wrapper`. The anchor pointing at `/news-release/` carries
//! both the title and the link, topic tags are anchors into `/areas-focus/`,
//! and the date sits in a `<time>` element as `January 05, 2025`.

use super::{Extractor, element_text, first_image, first_text, joined_text, resolve_link, selector};
use crate::dates::DateFormat;
use crate::models::{RawArticle, SourceId};
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::{debug, instrument};

static BLOCK: Lazy<Selector> = Lazy::new(|| selector("div.wrapper"));
static DATE: Lazy<Selector> = Lazy::new(|| selector("time"));
static LINK: Lazy<Selector> = Lazy::new(|| selector(r#"a[href*="/news-release/"]"#));
static TOPIC: Lazy<Selector> = Lazy::new(|| selector(r#"a[href*="/areas-focus/"]"#));
static IMAGE: Lazy<Selector> = Lazy::new(|| selector("img"));

#[derive(Debug)]
pub struct EwgExtractor;

impl Extractor for EwgExtractor {
    fn date_format(&self) -> DateFormat {
        DateFormat::MonthDayYear
    }

    #[instrument(level = "debug", skip_all)]
    fn extract(&self, html: &str) -> Vec<RawArticle> {
        let base = SourceId::Ewg.base_url();
        let document = Html::parse_document(html);
        let mut articles = Vec::new();

        for block in document.select(&BLOCK) {
            let Some(date) = first_text(block, &DATE) else {
                debug!("EWG block has no <time>; skipping");
                continue;
            };
            let anchor = block.select(&LINK).next();

            articles.push(RawArticle {
                title: anchor.and_then(element_text),
                link: anchor
                    .and_then(|a| a.value().attr("href"))
                    .and_then(|href| resolve_link(base, href)),
                date,
                topic: joined_text(block, &TOPIC),
                image: first_image(block, &IMAGE, base),
            });
        }

        debug!(count = articles.len(), "Extracted EWG blocks");
        articles
    }
}
