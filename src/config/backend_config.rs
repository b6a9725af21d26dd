use serde_derive::{Deserialize, Serialize};
use serde_with::{DurationMilliSeconds, serde_as};
use std::time::Duration;
use url::Url;

/// Configuration for the integration with the catalog backend that executes searches.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct BackendConfig {
    /// The URL to access the catalog backend.
    pub host: Url,
    /// HTTP client used for every backend request.
    #[serde(default)]
    pub client: BackendClientConfig,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            host: Url::parse("http://localhost:7272")
                .expect("Cannot parse catalog backend host parameter."),
            client: BackendClientConfig::default(),
        }
    }
}

/// HTTP client settings for the backend requests, durations are in milliseconds.
#[serde_as]
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BackendClientConfig {
    /// Upper bound for a single request, from connecting until the body is read.
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub timeout: Duration,
    /// How long an unused keep-alive connection stays in the pool.
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub pool_idle_timeout: Duration,
    /// Retries of transiently failed requests. Relaxation attempts already multiply the number of
    /// backend round trips, so there are none by default.
    pub max_retries: u32,
    /// Logs connection-level details.
    pub verbose: bool,
}

impl Default for BackendClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            pool_idle_timeout: Duration::from_secs(5),
            max_retries: 0,
            verbose: false,
        }
    }
}
