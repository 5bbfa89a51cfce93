//! The saved-articles collection.
//!
//! Favorites live for the lifetime of the process and are keyed by article
//! link. They are kept apart from the feed: a fresh search replaces the feed
//! but leaves favorites alone.

use crate::models::Article;
use tracing::debug;

#[derive(Debug, Default, Clone)]
pub struct Favorites {
    items: Vec<Article>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an article with this link is saved.
    pub fn contains(&self, link: &str) -> bool {
        self.items.iter().any(|a| a.link == link)
    }

    /// Save the article, or unsave it if its link is already present.
    ///
    /// Returns `true` when the article is saved after the call.
    pub fn toggle(&mut self, article: &Article) -> bool {
        if self.contains(&article.link) {
            self.items.retain(|a| a.link != article.link);
            debug!(link = %article.link, "Removed favorite");
            false
        } else {
            self.items.push(article.clone());
            debug!(link = %article.link, "Added favorite");
            true
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Saved articles in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = &Article> {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RawArticle, SourceId};
    use chrono::NaiveDate;

    fn article(link: &str, title: &str) -> Article {
        Article::from_raw(
            RawArticle {
                title: Some(title.to_string()),
                link: Some(link.to_string()),
                date: "January 10, 2025".to_string(),
                topic: None,
                image: None,
            },
            SourceId::Ewg,
            NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
        )
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut favorites = Favorites::new();
        let a = article("https://www.ewg.org/a", "A");

        assert!(favorites.toggle(&a));
        assert!(favorites.contains("https://www.ewg.org/a"));
        assert_eq!(favorites.len(), 1);

        assert!(!favorites.toggle(&a));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_identity_is_the_link() {
        let mut favorites = Favorites::new();
        favorites.toggle(&article("https://www.ewg.org/a", "Original title"));

        // Same link, different title: still the same favorite.
        let retitled = article("https://www.ewg.org/a", "Updated title");
        assert!(!favorites.toggle(&retitled));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_saved_copy_is_independent_of_feed() {
        let mut favorites = Favorites::new();
        let mut feed = vec![article("https://www.ewg.org/a", "A")];
        favorites.toggle(&feed[0]);

        feed.clear();
        assert_eq!(favorites.iter().map(|a| a.title.as_str()).collect::<Vec<_>>(), vec!["A"]);
    }
}
