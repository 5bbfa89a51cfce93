//! Output generation for a finished search.
//!
//! # Submodules
//!
//! - [`json`]: Writes the run's [`FeedSnapshot`](crate::models::FeedSnapshot) for API consumption
//! - [`markdown`]: Renders the feed and saved articles for reading
//!
//! # Output Structure
//!
//! ```text
//! json_output_dir/
//! └── 2025-01-21/
//!     └── feed.json
//!
//! markdown_output_dir/
//! └── 2025-01-21.md
//! ```

pub mod json;
pub mod markdown;
