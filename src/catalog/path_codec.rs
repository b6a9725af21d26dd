use crate::catalog::{
    CatalogDomain, FilterState, LEGACY_PAGE_PARAMS, LEGACY_SORT_PARAMS, MAX_PRICE_PARAM,
    MIN_PRICE_PARAM, PAGE_SEGMENT_PREFIX, PER_PAGE_PARAM, QUERY_PARAM, QueryParams,
    SORT_SEGMENT_PREFIX, SortOrder,
    filter_state::{parse_page, parse_per_page, parse_price},
};
use std::borrow::Cow;
use url::form_urlencoded;

/// Parses filter state from the path segments that follow the listing base path and from the
/// query-string parameters. Segments are recognized by prefix regardless of their position and
/// unknown segments are ignored. Legacy query parameters (`categoria=`, `sort=`, `page=`, ...)
/// are understood as well, but segments take precedence over them.
pub fn parse_filter_state<S: AsRef<str>>(
    domain: CatalogDomain,
    segments: &[S],
    query: &QueryParams,
) -> FilterState {
    let schema = domain.schema();
    let mut state = FilterState::new(domain).with_price_range(
        query.get(MIN_PRICE_PARAM).and_then(|raw| parse_price(raw)),
        query.get(MAX_PRICE_PARAM).and_then(|raw| parse_price(raw)),
    );

    if let Some(q) = query.get(QUERY_PARAM) {
        state = state.with_query(q);
    }
    if let Some(per_page) = query.get(PER_PAGE_PARAM).and_then(|raw| parse_per_page(raw)) {
        state = state.with_per_page(per_page);
    }
    if let Some(taxonomy) = query
        .get(schema.taxonomy.param)
        .and_then(|raw| schema.taxonomy.normalize_value(raw))
    {
        state = state.with_taxonomy(taxonomy);
    }
    if let Some(secondary) = query
        .get(schema.secondary.param)
        .and_then(|raw| schema.secondary.normalize_value(raw))
    {
        state = state.with_secondary(secondary);
    }
    if let Some(raw) = LEGACY_SORT_PARAMS.iter().find_map(|param| query.get(*param)) {
        state = state.with_sort(SortOrder::from_param(raw));
    }
    if let Some(page) = LEGACY_PAGE_PARAMS
        .iter()
        .find_map(|param| query.get(*param))
        .and_then(|raw| parse_page(raw))
    {
        state = state.with_page(page);
    }

    for segment in segments {
        let segment = decode_segment(segment.as_ref());
        if let Some(raw) = segment.strip_prefix(schema.taxonomy.segment_prefix) {
            if let Some(taxonomy) = schema.taxonomy.normalize_value(raw) {
                state = state.with_taxonomy(taxonomy);
            }
        } else if let Some(raw) = segment.strip_prefix(schema.secondary.segment_prefix) {
            if let Some(secondary) = schema.secondary.normalize_value(raw) {
                state = state.with_secondary(secondary);
            }
        } else if let Some(raw) = segment.strip_prefix(SORT_SEGMENT_PREFIX) {
            state = state.with_sort(SortOrder::from_param(raw));
        } else if let Some(raw) = segment.strip_prefix(PAGE_SEGMENT_PREFIX) {
            if let Some(page) = parse_page(raw) {
                state = state.with_page(page);
            }
        }
    }

    state
}

/// Canonical path segments of the filter state, still percent-encoded: facet segments first,
/// then non-default sort, then page.
pub fn canonical_segments(state: &FilterState) -> Vec<String> {
    let schema = state.domain.schema();

    let mut segments = vec![];
    if let Some(ref taxonomy) = state.taxonomy {
        segments.push(format!(
            "{}{}",
            schema.taxonomy.segment_prefix,
            urlencoding::encode(taxonomy)
        ));
    }
    if let Some(ref secondary) = state.secondary {
        segments.push(format!(
            "{}{}",
            schema.secondary.segment_prefix,
            urlencoding::encode(secondary)
        ));
    }
    if !state.sort.is_default() {
        segments.push(format!("{SORT_SEGMENT_PREFIX}{}", state.sort.as_str()));
    }
    if state.page_number() > 1 {
        segments.push(format!("{PAGE_SEGMENT_PREFIX}{}", state.page_number()));
    }

    segments
}

/// Canonical query-string parameters of the filter state, in the order of
/// `CANONICAL_QUERY_PARAMS`.
pub fn canonical_query(state: &FilterState) -> Vec<(&'static str, String)> {
    let mut query = vec![];
    if !state.q.is_empty() {
        query.push((QUERY_PARAM, state.q.clone()));
    }
    if let Some(min_price) = state.min_price {
        query.push((MIN_PRICE_PARAM, min_price.to_string()));
    }
    if let Some(max_price) = state.max_price {
        query.push((MAX_PRICE_PARAM, max_price.to_string()));
    }
    if let Some(per_page) = state.per_page {
        query.push((PER_PAGE_PARAM, per_page.to_string()));
    }

    query
}

/// Builds canonical listing path for the filter state: base path and canonical segments,
/// followed by the query string with `q`, price bounds and page size.
pub fn build_path(state: &FilterState) -> String {
    let mut path = state.domain.schema().base_path.to_string();
    for segment in canonical_segments(state) {
        path.push('/');
        path.push_str(&segment);
    }

    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(canonical_query(state))
        .finish();
    if !query.is_empty() {
        path.push('?');
        path.push_str(&query);
    }

    path
}

/// Builds canonical listing path with pagination reset. Any change of a filter other than the
/// page itself must go through this variant.
pub fn build_path_reset_page(state: &FilterState) -> String {
    build_path(&FilterState {
        page: None,
        ..state.clone()
    })
}

/// Splits a raw (still percent-encoded) path into non-empty segments.
pub fn path_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|segment| !segment.is_empty()).collect()
}

/// Decodes a raw query string. When a parameter is repeated, the last value wins.
pub fn parse_query_string(query: &str) -> QueryParams {
    form_urlencoded::parse(query.as_bytes())
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect()
}

fn decode_segment(segment: &str) -> Cow<'_, str> {
    urlencoding::decode(segment).unwrap_or(Cow::Borrowed(segment))
}
