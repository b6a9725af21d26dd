use serde_derive::{Deserialize, Serialize};
use serde_with::{DurationMilliSeconds, serde_as};
use std::time::Duration;

/// Configuration for the catalog retrieval.
#[serde_as]
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    /// Deadline of a single backend attempt. Once it passes, the attempt is considered failed and
    /// the next, more relaxed attempt is issued. Default is 5 seconds.
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    #[serde(default = "default_attempt_timeout")]
    pub attempt_timeout: Duration,
    /// Page size used when the URL doesn't specify one. Clamped to `[1, 100]`. Default is 12.
    pub default_per_page: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            attempt_timeout: default_attempt_timeout(),
            default_per_page: 12,
        }
    }
}

/// Default deadline of a single backend attempt.
const fn default_attempt_timeout() -> Duration {
    Duration::from_secs(5)
}
