use crate::{api::Api, catalog::CatalogBackend, server::status::Status};

pub struct AppState<B: CatalogBackend> {
    pub status: Status,
    pub api: Api<B>,
}

impl<B: CatalogBackend> AppState<B> {
    pub fn new(api: Api<B>) -> Self {
        Self {
            status: Status {
                version: api.config.version.clone(),
            },
            api,
        }
    }
}
