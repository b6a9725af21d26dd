mod api_ext;
mod catalog_backend;
mod catalog_domain;
mod catalog_item;
mod catalog_page;
mod catalog_schema;
mod facet;
mod facet_resolver;
mod filter_links;
mod filter_state;
mod http_catalog_backend;
mod legacy_redirect;
mod path_codec;
mod relaxation;
mod result_page;
mod retrieval;
mod sort_order;

pub use self::{
    catalog_backend::CatalogBackend,
    catalog_domain::CatalogDomain,
    catalog_item::{CatalogItem, FacetValue, FacetedItem},
    catalog_page::{CatalogBrowse, CatalogPage},
    catalog_schema::{
        CANONICAL_QUERY_PARAMS, COURSES_SCHEMA, CatalogSchema, FacetDimension, LEGACY_PAGE_PARAMS,
        LEGACY_SORT_PARAMS, MAX_PER_PAGE, MAX_PRICE_PARAM, MIN_PER_PAGE, MIN_PRICE_PARAM,
        PAGE_SEGMENT_PREFIX, PER_PAGE_PARAM, PRODUCTS_SCHEMA, QUERY_PARAM, SORT_SEGMENT_PREFIX,
    },
    facet::{Facet, Facets},
    facet_resolver::{apply_active_filters, resolve_facets},
    filter_links::FilterLinks,
    filter_state::{FilterState, QueryParams},
    http_catalog_backend::HttpCatalogBackend,
    legacy_redirect::legacy_redirect,
    path_codec::{
        build_path, build_path_reset_page, canonical_query, canonical_segments, parse_filter_state,
        parse_query_string, path_segments,
    },
    relaxation::{Attempt, FACETS_RELAXATIONS, LISTING_RELAXATIONS, plan_attempts},
    result_page::{PageMeta, ResultPage},
    sort_order::SortOrder,
};

