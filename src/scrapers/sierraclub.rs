//! Sierra Club press releases scraper.
//!
//! <https://www.sierraclub.org/press-releases> lists `div.press-release`
//! rows. The headline anchor is inside `h2.press-release__title`, the date is
//! written with an ordinal day (`March 3rd, 2025`) and topics are the anchors
//! under `div.press-release__topics`.

use super::{Extractor, element_text, first_image, first_text, joined_text, resolve_link, selector};
use crate::dates::DateFormat;
use crate::models::{RawArticle, SourceId};
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::{debug, instrument};

static BLOCK: Lazy<Selector> = Lazy::new(|| selector("div.press-release"));
static TITLE_LINK: Lazy<Selector> = Lazy::new(|| selector("h2.press-release__title a"));
static DATE: Lazy<Selector> = Lazy::new(|| selector("p.press-release__date"));
static TOPIC: Lazy<Selector> = Lazy::new(|| selector("div.press-release__topics a"));
static IMAGE: Lazy<Selector> = Lazy::new(|| selector("img"));

#[derive(Debug)]
pub struct SierraClubExtractor;

impl Extractor for SierraClubExtractor {
    fn date_format(&self) -> DateFormat {
        DateFormat::OrdinalMonthDayYear
    }

    #[instrument(level = "debug", skip_all)]
    fn extract(&self, html: &str) -> Vec<RawArticle> {
        let base = SourceId::SierraClub.base_url();
        let document = Html::parse_document(html);
        let mut articles = Vec::new();

        for block in document.select(&BLOCK) {
            let Some(date) = first_text(block, &DATE) else {
                debug!("Sierra Club row has no date; skipping");
                continue;
            };
            let anchor = block.select(&TITLE_LINK).next();

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

        debug!(count = articles.len(), "Extracted Sierra Club blocks");
        articles
    }
}
