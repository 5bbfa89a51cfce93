//! Data models for the source catalog and scraped press releases.
//!
//! This module defines the core data structures used throughout the application:
//! - [`SourceId`]: The fixed catalog of organizations we scrape
//! - [`RawArticle`]: The field set pulled out of one listing block
//! - [`Article`]: The normalized record every source produces
//!
//! Articles are identified by their `link`. Favorites and any consumer-side
//! deduplication match on that field only.

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Placeholder title used when a block has no title element.
pub const TITLE_NOT_FOUND: &str = "Title not found";
/// Placeholder link used when a block has no usable anchor.
pub const LINK_NOT_FOUND: &str = "Link not found";
/// Placeholder topic used when a block carries no category labels.
pub const TOPIC_NOT_FOUND: &str = "Topic not found";

/// One of the organizations whose listing page we scrape.
///
/// The catalog is closed: adding a source means adding a variant here and an
/// extractor in [`crate::scrapers`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum SourceId {
    /// Greenpeace USA media page.
    Greenpeace,
    /// Earthjustice news page.
    Earthjustice,
    /// Sierra Club press releases page.
    SierraClub,
    /// Environmental Working Group news releases page.
    Ewg,
}

impl SourceId {
    /// Every source, in catalog order.
    pub const ALL: [SourceId; 4] = [
        SourceId::Greenpeace,
        SourceId::Earthjustice,
        SourceId::SierraClub,
        SourceId::Ewg,
    ];

    /// Human-readable organization name stamped onto every article.
    pub fn label(self) -> &'static str {
        match self {
            SourceId::Greenpeace => "Greenpeace USA",
            SourceId::Earthjustice => "Earthjustice",
            SourceId::SierraClub => "Sierra Club",
            SourceId::Ewg => "Environmental Working Group",
        }
    }

    /// The single listing page fetched for this source.
    pub fn listing_url(self) -> &'static str {
        match self {
            SourceId::Greenpeace => "https://www.greenpeace.org/usa/media/",
            SourceId::Earthjustice => "https://earthjustice.org/news",
            SourceId::SierraClub => "https://www.sierraclub.org/press-releases",
            SourceId::Ewg => "https://www.ewg.org/news-insights/news-release",
        }
    }

    /// Origin used to resolve root-relative links and image paths.
    pub fn base_url(self) -> &'static str {
        match self {
            SourceId::Greenpeace => "https://www.greenpeace.org",
            SourceId::Earthjustice => "https://earthjustice.org",
            SourceId::SierraClub => "https://www.sierraclub.org",
            SourceId::Ewg => "https://www.ewg.org",
        }
    }
}

/// The fields extracted from a single listing block, before normalization.
///
/// Only `date` is mandatory: blocks without a date element never become a
/// `RawArticle`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawArticle {
    pub title: Option<String>,
    pub link: Option<String>,
    /// Date text exactly as the source printed it (whitespace-trimmed).
    pub date: String,
    /// Category labels, already comma-joined when a source lists several.
    pub topic: Option<String>,
    pub image: Option<String>,
}

/// A normalized press release, uniform across sources.
///
/// Records are never mutated after the pipeline builds them; favoriting
/// stores a clone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    /// Absolute URL; the identity key for favorites.
    pub link: String,
    /// Display form of `date_value`, e.g. `Jan 05, 2025`.
    pub date_display: String,
    pub date_value: NaiveDate,
    pub topic: String,
    /// Organization name from [`SourceId::label`].
    pub source: String,
    pub image: Option<String>,
}

impl Article {
    /// Build an article from an extracted block and its parsed date,
    /// substituting placeholders for any missing optional field.
    pub fn from_raw(raw: RawArticle, source: SourceId, date_value: NaiveDate) -> Self {
        Self {
            title: raw.title.unwrap_or_else(|| TITLE_NOT_FOUND.to_string()),
            link: raw.link.unwrap_or_else(|| LINK_NOT_FOUND.to_string()),
            date_display: crate::dates::display_date(date_value),
            date_value,
            topic: raw.topic.unwrap_or_else(|| TOPIC_NOT_FOUND.to_string()),
            source: source.label().to_string(),
            image: raw.image,
        }
    }
}

/// Everything one run produced, as written to the JSON output.
#[derive(Debug, Serialize, Deserialize)]
pub struct FeedSnapshot {
    /// Local timestamp of the run start, RFC 3339.
    pub generated_at: String,
    pub window_start: NaiveDate,
    pub window_end: NaiveDate,
    /// Sources that were selected for this run.
    pub sources: Vec<SourceId>,
    /// The merged feed, newest first.
    pub articles: Vec<Article>,
    /// Saved articles at the time of the run.
    pub favorites: Vec<Article>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw() -> RawArticle {
        RawArticle {
            title: Some("Court blocks pipeline".to_string()),
            link: Some("https://earthjustice.org/press/2025/court-blocks-pipeline".to_string()),
            date: "05/Jan/2025".to_string(),
            topic: Some("Climate, Oceans".to_string()),
            image: None,
        }
    }

    #[test]
    fn test_from_raw_keeps_extracted_fields() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        let article = Article::from_raw(raw(), SourceId::Earthjustice, date);

        assert_eq!(article.title, "Court blocks pipeline");
        assert_eq!(article.topic, "Climate, Oceans");
        assert_eq!(article.date_display, "Jan 05, 2025");
        assert_eq!(article.source, "Earthjustice");
        assert_eq!(article.image, None);
    }

    #[test]
    fn test_from_raw_substitutes_placeholders() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        let article = Article::from_raw(
            RawArticle {
                title: None,
                link: None,
                date: "March 3rd, 2025".to_string(),
                topic: None,
                image: None,
            },
            SourceId::SierraClub,
            date,
        );

        assert_eq!(article.title, TITLE_NOT_FOUND);
        assert_eq!(article.link, LINK_NOT_FOUND);
        assert_eq!(article.topic, TOPIC_NOT_FOUND);
        assert_eq!(article.source, "Sierra Club");
    }

    #[test]
    fn test_article_serialization() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        let article = Article::from_raw(raw(), SourceId::Earthjustice, date);

        let json = serde_json::to_string(&article).unwrap();
        assert!(json.contains("\"date_value\":\"2025-01-05\""));
        assert!(json.contains("\"image\":null"));

        let back: Article = serde_json::from_str(&json).unwrap();
        assert_eq!(back, article);
    }

    #[test]
    fn test_source_catalog_urls_share_base() {
        for source in SourceId::ALL {
            assert!(source.listing_url().starts_with(source.base_url()));
        }
    }

    #[test]
    fn test_source_id_kebab_case() {
        let json = serde_json::to_string(&SourceId::SierraClub).unwrap();
        assert_eq!(json, "\"sierra-club\"");
    }
}
