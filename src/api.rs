use crate::{catalog::CatalogBackend, config::Config};

/// Collection of the catalog APIs, backed by the specified catalog backend.
pub struct Api<B: CatalogBackend> {
    pub config: Config,
    pub backend: B,
}

impl<B: CatalogBackend> Api<B> {
    /// Instantiates APIs collection with the specified config and catalog backend.
    pub fn new(config: Config, backend: B) -> Self {
        Self { config, backend }
    }
}

