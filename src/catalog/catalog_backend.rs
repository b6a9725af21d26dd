use crate::catalog::{CatalogItem, Facets, FilterState, ResultPage};
use futures::future::BoxFuture;

/// Trait describing a facade for the backend that executes catalog searches. Both operations may
/// reject a filter combination or fail in transport, callers are expected to relax and retry.
pub trait CatalogBackend: Sync + Send + 'static {
    /// Retrieves a page of listing items matching the filter state.
    fn fetch_listing<'a>(
        &'a self,
        state: &'a FilterState,
    ) -> BoxFuture<'a, anyhow::Result<ResultPage<CatalogItem>>>;

    /// Retrieves counted facets for the filter state.
    fn fetch_facets<'a>(&'a self, state: &'a FilterState) -> BoxFuture<'a, anyhow::Result<Facets>>;
}
