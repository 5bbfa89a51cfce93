//! Runtime configuration loaded from an optional YAML file.
//!
//! Every field has a default, so an absent file or a partial file is fine:
//!
//! ```yaml
//! user_agent: "Mozilla/5.0"
//! timeout_secs: 15
//! window_days: 14
//! ```

use crate::window::DEFAULT_WINDOW_DAYS;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::time::Duration;
use tracing::{info, instrument};

/// Settings for fetching and filtering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// User-Agent header sent with every listing request.
    pub user_agent: String,
    /// Per-request timeout, covering connect and body read.
    pub timeout_secs: u64,
    /// Length of the recency window in days.
    pub window_days: u32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0".to_string(),
            timeout_secs: 15,
            window_days: DEFAULT_WINDOW_DAYS,
        }
    }
}

impl PipelineConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Parse a config from YAML text.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed YAML or a zero `timeout_secs`.
    pub fn from_yaml(yaml: &str) -> Result<Self, Box<dyn Error>> {
        let config: Self = serde_yaml::from_str(yaml)?;
        if config.timeout_secs == 0 {
            return Err("timeout_secs must be at least 1".into());
        }
        Ok(config)
    }

    /// Load the config at `path`, or the defaults when no path is given.
    #[instrument(level = "info")]
    pub async fn load(path: Option<&str>) -> Result<Self, Box<dyn Error>> {
        let Some(path) = path else {
            info!("No config file given; using defaults");
            return Ok(Self::default());
        };
        let yaml = tokio::fs::read_to_string(path).await?;
        let config = Self::from_yaml(&yaml)?;
        info!(?config, "Loaded configuration");
        Ok(config)
    }
}
