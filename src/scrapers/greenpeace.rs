//! Greenpeace USA media page scraper.
//!
//! Releases on <https://www.greenpeace.org/usa/media/> are `article.media-item`
//! cards. The title anchor lives in `h4.media-item__title`, dates are printed
//! as `January 05, 2025` in `span.media-item__date`, and each card can carry
//! several `a.media-item__tag` topic links.

use super::{Extractor, element_text, first_image, first_text, joined_text, resolve_link, selector};
use crate::dates::DateFormat;
use crate::models::{RawArticle, SourceId};
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::{debug, instrument};

static BLOCK: Lazy<Selector> = Lazy::new(|| selector("article.media-item"));
static TITLE_LINK: Lazy<Selector> = Lazy::new(|| selector("h4.media-item__title a"));
static DATE: Lazy<Selector> = Lazy::new(|| selector("span.media-item__date"));
static TOPIC: Lazy<Selector> = Lazy::new(|| selector("a.media-item__tag"));
static IMAGE: Lazy<Selector> = Lazy::new(|| selector("img.media-item__image"));

#[derive(Debug)]
pub struct GreenpeaceExtractor;

impl Extractor for GreenpeaceExtractor {
    fn date_format(&self) -> DateFormat {
        DateFormat::MonthDayYear
    }

    #[instrument(level = "debug", skip_all)]
    fn extract(&self, html: &str) -> Vec<RawArticle> {
        let base = SourceId::Greenpeace.base_url();
        let document = Html::parse_document(html);
        let mut articles = Vec::new();

        for block in document.select(&BLOCK) {
            let Some(date) = first_text(block, &DATE) else {
                debug!("Greenpeace card has no date; skipping");
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

        debug!(count = articles.len(), "Extracted Greenpeace blocks");
        articles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"
        <main>
          <article class="media-item">
            <img class="media-item__image" src="/usa/wp-content/uploads/2025/01/ocean.jpg">
            <h4 class="media-item__title">
              <a href="https://www.greenpeace.org/usa/news/global-plastics-treaty-talks/">
                Global plastics treaty talks stall
              </a>
            </h4>
            <span class="media-item__date">January 14, 2025</span>
            <a class="media-item__tag" href="/usa/tag/plastics/">#Plastics</a>
            <a class="media-item__tag" href="/usa/tag/oceans/">#Oceans</a>
          </article>
          <article class="media-item">
            <span class="media-item__date">January 10, 2025</span>
          </article>
          <article class="media-item">
            <h4 class="media-item__title"><a href="/usa/news/undated/">Undated card</a></h4>
          </article>
          <article class="post">
            <span class="media-item__date">January 12, 2025</span>
          </article>
        </main>
    "#;

    #[test]
    fn test_extracts_card() {
        let articles = GreenpeaceExtractor.extract(LISTING);
        let first = &articles[0];

        assert_eq!(first.title.as_deref(), Some("Global plastics treaty talks stall"));
        assert_eq!(
            first.link.as_deref(),
            Some("https://www.greenpeace.org/usa/news/global-plastics-treaty-talks/")
        );
        assert_eq!(first.date, "January 14, 2025");
        assert_eq!(first.topic.as_deref(), Some("#Plastics, #Oceans"));
        assert_eq!(
            first.image.as_deref(),
            Some("https://www.greenpeace.org/usa/wp-content/uploads/2025/01/ocean.jpg")
        );
    }

    #[test]
    fn test_only_dated_media_items_are_emitted() {
        let articles = GreenpeaceExtractor.extract(LISTING);
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[1].title, None);
        assert_eq!(articles[1].link, None);
        assert_eq!(articles[1].topic, None);
    }
}
