//! # Demo Configuration
//!
//! Environment-driven settings with development defaults.
//!
//! ## Environment Variables
//! - `BAZAAR_SNAPSHOT_PATH`: directory for snapshot slots (default `./data`)
//! - `BAZAAR_FETCH_DELAY_MS`: simulated catalog latency (default 300)

use std::path::PathBuf;
use std::time::Duration;

use bazaar_catalog::DEFAULT_FETCH_DELAY;

/// Demo app configuration.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Directory the file backend stores snapshot slots under.
    pub snapshot_dir: PathBuf,

    /// Simulated latency for every catalog query.
    pub fetch_delay: Duration,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            snapshot_dir: PathBuf::from("./data"),
            fetch_delay: DEFAULT_FETCH_DELAY,
        }
    }
}

impl DemoConfig {
    /// Creates a config from environment variables and defaults.
    pub fn from_env() -> Self {
        let mut config = DemoConfig::default();

        if let Ok(path) = std::env::var("BAZAAR_SNAPSHOT_PATH") {
            config.snapshot_dir = PathBuf::from(path);
        }

        if let Ok(delay_str) = std::env::var("BAZAAR_FETCH_DELAY_MS") {
            if let Ok(ms) = delay_str.parse::<u64>() {
                config.fetch_delay = Duration::from_millis(ms);
            }
        }

        config
    }
}
