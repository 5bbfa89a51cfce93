//! Markdown rendering of the feed and the saved-articles list.

use crate::favorites::Favorites;
use crate::models::{Article, FeedSnapshot, LINK_NOT_FOUND};
use crate::utils::escape_markdown;
use std::fmt::Write;

/// Render one article as a card: linked title, metadata lines, optional image.
fn write_card(md: &mut String, article: &Article, saved: bool) {
    let star = if saved { "★" } else { "☆" };
    let title = escape_markdown(&article.title);
    // Writing to a String cannot fail.
    if article.link == LINK_NOT_FOUND {
        let _ = writeln!(md, "### {} {}\n", star, title);
    } else {
        let _ = writeln!(md, "### {} [{}](<{}>)\n", star, title, article.link);
    }
    let _ = writeln!(md, "- **Topic:** {}", escape_markdown(&article.topic));
    let _ = writeln!(md, "- **Date:** {}", article.date_display);
    let _ = writeln!(md, "- **Source:** {}", article.source);
    if let Some(image) = &article.image {
        let _ = writeln!(md, "\n![](<{}>)", image);
    }
    md.push('\n');
}

/// Render a run's feed followed by the saved articles.
///
/// An empty feed renders an explicit "nothing found" note instead of an empty
/// section.
pub fn feed_to_markdown(snapshot: &FeedSnapshot, favorites: &Favorites) -> String {
    let mut md = String::new();
    let _ = writeln!(md, "# Environmental News\n");
    let _ = writeln!(
        md,
        "Showing articles from **{}** to **{}**.\n",
        crate::dates::display_date(snapshot.window_start),
        crate::dates::display_date(snapshot.window_end)
    );

    if snapshot.articles.is_empty() {
        let _ = writeln!(
            md,
            "_No articles found for the selected sources in this window._\n"
        );
    } else {
        for article in &snapshot.articles {
            write_card(&mut md, article, favorites.contains(&article.link));
        }
    }

    let _ = writeln!(md, "## Saved Articles ({})\n", favorites.len());
    if favorites.is_empty() {
        let _ = writeln!(md, "_You haven't saved any articles yet._");
    } else {
        for article in favorites.iter() {
            write_card(&mut md, article, true);
        }
    }
    md
}
