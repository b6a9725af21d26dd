use crate::catalog::{CatalogItem, Facets, FilterLinks, FilterState, PageMeta, build_path};
use serde_derive::Serialize;

/// Outcome of browsing a catalog listing URL.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogBrowse {
    /// The URL is a legacy one, the client should be permanently redirected to the location.
    Redirect { location: String },
    /// The URL is canonical (or close enough), here is what it lists.
    Page(Box<CatalogPage>),
}

/// Everything needed to render a catalog listing.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPage {
    /// Canonical path of the requested filter state.
    pub canonical_path: String,
    /// Filter state the user asked for.
    pub filter: FilterState,
    /// Filter state the listing was actually retrieved with, after the active filters were
    /// validated against the facets.
    pub applied_filter: FilterState,
    pub items: Vec<CatalogItem>,
    pub meta: PageMeta,
    pub facets: Facets,
    /// Filter and sort changes available from this page, all of them start from the first page.
    pub links: FilterLinks,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,
}

impl CatalogPage {
    /// Assembles the page, pagination links are built from the requested filter state.
    pub fn new(
        filter: FilterState,
        applied_filter: FilterState,
        items: Vec<CatalogItem>,
        meta: PageMeta,
        facets: Facets,
    ) -> Self {
        let page = filter.page_number();
        let previous_page = (page > 1).then(|| build_path(&filter.clone().with_page(page - 1)));
        let next_page = meta
            .pages
            .filter(|pages| u64::from(page) < *pages)
            .and(page.checked_add(1))
            .map(|next| build_path(&filter.clone().with_page(next)));
        let links = FilterLinks::new(&filter, &facets);

        Self {
            canonical_path: build_path(&filter),
            filter,
            applied_filter,
            items,
            meta,
            facets,
            links,
            previous_page,
            next_page,
        }
    }
}
