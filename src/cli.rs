//! Command-line interface definitions for Enviro News.
//!
//! This module defines the CLI arguments and options using the `clap` crate.

use crate::models::SourceId;
use clap::Parser;
use std::collections::BTreeSet;

/// Command-line arguments for the Enviro News application.
///
/// # Examples
///
/// ```sh
/// # Every source, JSON only
/// enviro_news --all -j ./json
///
/// # Two sources, Markdown too, saving one article
/// enviro_news -s ewg -s sierra-club -j ./json -m ./markdown \
///     -f https://www.ewg.org/news-insights/news-release/2025/01/pfas
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Source to search (repeatable)
    #[arg(short, long = "source", value_enum)]
    pub sources: Vec<SourceId>,

    /// Search every source
    #[arg(short, long, conflicts_with = "sources")]
    pub all: bool,

    /// Output directory for the JSON feed file
    #[arg(short, long)]
    pub json_output_dir: String,

    /// Output directory for the Markdown feed file
    #[arg(short, long)]
    pub markdown_output_dir: Option<String>,

    /// Optional path to a YAML config file
    #[arg(short, long, env = "ENVIRO_NEWS_CONFIG")]
    pub config: Option<String>,

    /// Link of a feed article to save as a favorite (repeatable)
    #[arg(short, long = "favorite")]
    pub favorites: Vec<String>,
}

impl Cli {
    /// The set of sources this run should search.
    pub fn selected_sources(&self) -> BTreeSet<SourceId> {
        if self.all {
            SourceId::ALL.into_iter().collect()
        } else {
            self.sources.iter().copied().collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from([
            "enviro_news",
            "--source",
            "ewg",
            "--source",
            "sierra-club",
            "--json-output-dir",
            "./json",
        ]);

        assert_eq!(cli.json_output_dir, "./json");
        assert_eq!(cli.markdown_output_dir, None);
        assert_eq!(
            cli.selected_sources(),
            BTreeSet::from([SourceId::SierraClub, SourceId::Ewg])
        );
    }

    #[test]
    fn test_cli_all_and_short_flags() {
        let cli = Cli::parse_from([
            "enviro_news",
            "-a",
            "-j",
            "/tmp/json",
            "-m",
            "/tmp/markdown",
            "-f",
            "https://earthjustice.org/press/2025/x",
        ]);

        assert_eq!(cli.selected_sources().len(), 4);
        assert_eq!(cli.markdown_output_dir.as_deref(), Some("/tmp/markdown"));
        assert_eq!(cli.favorites, vec!["https://earthjustice.org/press/2025/x"]);
    }

    #[test]
    fn test_cli_no_sources_is_empty_selection() {
        let cli = Cli::parse_from(["enviro_news", "-j", "./json"]);
        assert!(cli.selected_sources().is_empty());
    }

    #[test]
    fn test_cli_rejects_unknown_source() {
        assert!(Cli::try_parse_from(["enviro_news", "-s", "nrdc", "-j", "./json"]).is_err());
    }
}
