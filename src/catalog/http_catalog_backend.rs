use crate::{
    catalog::{CatalogBackend, CatalogItem, Facets, FilterState, ResultPage},
    config::Config,
    error::Error as CatalogError,
};
use anyhow::{Context, bail};
use futures::future::BoxFuture;
use reqwest_middleware::ClientWithMiddleware;
use serde::de::DeserializeOwned;
use url::Url;

/// Catalog backend reachable over HTTP.
#[derive(Clone)]
pub struct HttpCatalogBackend {
    host: Url,
    default_per_page: u32,
    http_client: ClientWithMiddleware,
}

impl HttpCatalogBackend {
    /// Creates HTTP catalog backend.
    pub fn new(config: &Config, http_client: ClientWithMiddleware) -> Self {
        Self {
            host: config.backend.host.clone(),
            default_per_page: config.catalog.default_per_page,
            http_client,
        }
    }

    fn endpoint(&self, state: &FilterState, suffix: &str) -> anyhow::Result<Url> {
        let resource = state.domain.schema().resource;
        let mut endpoint = Url::parse(&format!("{}api/{resource}{suffix}", self.host))
            .with_context(|| format!("Cannot construct catalog endpoint ({resource}{suffix})."))?;
        endpoint
            .query_pairs_mut()
            .extend_pairs(state.backend_params(self.default_per_page));

        Ok(endpoint)
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: Url) -> anyhow::Result<T> {
        let response = self
            .http_client
            .get(endpoint.clone())
            .send()
            .await
            .with_context(|| format!("Cannot query catalog backend ({endpoint})."))?;

        let status_code = response.status();
        if status_code.is_success() {
            return response
                .json()
                .await
                .with_context(|| format!("Cannot deserialize catalog response ({endpoint})."));
        }

        let error_message = format!(
            "Catalog backend rejected request ({endpoint}, {status_code}): {}",
            response.text().await.unwrap_or_default()
        );
        if status_code.is_client_error() {
            bail!(CatalogError::client(error_message))
        } else {
            bail!(error_message)
        }
    }

    async fn get_listing(&self, state: &FilterState) -> anyhow::Result<ResultPage<CatalogItem>> {
        self.get_json(self.endpoint(state, "")?).await
    }

    async fn get_facets(&self, state: &FilterState) -> anyhow::Result<Facets> {
        let response = self.get_json(self.endpoint(state, "/facets")?).await?;
        Facets::from_response(state.domain, response)
    }
}

impl CatalogBackend for HttpCatalogBackend {
    fn fetch_listing<'a>(
        &'a self,
        state: &'a FilterState,
    ) -> BoxFuture<'a, anyhow::Result<ResultPage<CatalogItem>>> {
        Box::pin(self.get_listing(state))
    }

    fn fetch_facets<'a>(&'a self, state: &'a FilterState) -> BoxFuture<'a, anyhow::Result<Facets>> {
        Box::pin(self.get_facets(state))
    }
}
