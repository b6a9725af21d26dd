mod backend_config;
mod catalog_config;
mod raw_config;

use crate::catalog::{MAX_PER_PAGE, MIN_PER_PAGE};

pub use self::{
    backend_config::{BackendClientConfig, BackendConfig},
    catalog_config::CatalogConfig,
    raw_config::RawConfig,
};

/// Main server config.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Version of the Catalogo binary.
    pub version: String,
    /// HTTP port to bind API server to.
    pub port: u16,
    /// Configuration for the catalog backend.
    pub backend: BackendConfig,
    /// Configuration for the catalog retrieval.
    pub catalog: CatalogConfig,
}

impl From<RawConfig> for Config {
    fn from(raw_config: RawConfig) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            port: raw_config.port,
            backend: raw_config.backend,
            catalog: CatalogConfig {
                default_per_page: raw_config
                    .catalog
                    .default_per_page
                    .clamp(MIN_PER_PAGE, MAX_PER_PAGE),
                ..raw_config.catalog
            },
        }
    }
}
