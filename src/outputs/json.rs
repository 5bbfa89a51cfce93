//! JSON output of a run's feed and favorites.
//!
//! # Output Structure
//!
//! Files are grouped by the window's end date; a later run on the same day
//! overwrites the earlier one:
//! ```text
//! json_output_dir/
//! └── 2025-01-21/
//!     └── feed.json
//! ```

use crate::models::FeedSnapshot;
use std::error::Error;
use std::path::PathBuf;
use tokio::fs;
use tracing::{error, info, instrument};

/// Write a [`FeedSnapshot`] under a date-named directory.
///
/// # Returns
///
/// The path of the written file.
///
/// # Output Path
///
/// The file is written to: `{json_output_dir}/{window_end}/feed.json`
#[instrument(level = "info", skip_all, fields(json_output_dir = %json_output_dir))]
pub async fn write_feed(
    snapshot: &FeedSnapshot,
    json_output_dir: &str,
) -> Result<PathBuf, Box<dyn Error>> {
    let json = serde_json::to_string_pretty(snapshot)?;

    let full_json_dir = PathBuf::from(json_output_dir).join(snapshot.window_end.to_string());
    info!(full_json_dir = %full_json_dir.display(), "Ensuring JSON directory exists");
    if let Err(e) = fs::create_dir_all(&full_json_dir).await {
        error!(full_json_dir = %full_json_dir.display(), error = %e, "Failed to create JSON dir");
        return Err(e.into());
    }

    let output_path = full_json_dir.join("feed.json");
    fs::write(&output_path, json).await?;
    info!(
        path = %output_path.display(),
        articles = snapshot.articles.len(),
        favorites = snapshot.favorites.len(),
        "Wrote feed JSON"
    );

    Ok(output_path)
}
