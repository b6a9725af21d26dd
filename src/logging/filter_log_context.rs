use crate::catalog::{CatalogDomain, FilterState, SortOrder};
use serde_derive::Serialize;

/// Represents a context for the catalog filter state used for the structured logging. The search
/// term itself isn't logged, only whether it's present.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FilterLogContext {
    pub domain: CatalogDomain,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxonomy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    pub has_query: bool,
    pub has_price_bounds: bool,
    pub sort: SortOrder,
    pub page: u32,
}

impl FilterLogContext {
    /// Returns context used for the structured logging.
    pub fn new(state: &FilterState) -> Self {
        Self {
            domain: state.domain,
            taxonomy: state.taxonomy.clone(),
            secondary: state.secondary.clone(),
            has_query: !state.q.is_empty(),
            has_price_bounds: state.min_price.is_some() || state.max_price.is_some(),
            sort: state.sort,
            page: state.page_number(),
        }
    }
}

impl FilterState {
    /// Returns context used for the structured logging.
    pub fn log_context(&self) -> FilterLogContext {
        FilterLogContext::new(self)
    }
}
