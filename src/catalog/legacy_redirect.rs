use crate::catalog::{
    CANONICAL_QUERY_PARAMS, CatalogDomain, QueryParams, build_path, canonical_query,
    canonical_segments, parse_filter_state,
};

/// Returns the canonical location a listing URL should permanently redirect to, or `None` if the
/// URL is already in canonical form. Non-canonical forms include filter state carried by legacy
/// query parameters, segments out of their canonical order, default or unknown segments and
/// query values that don't survive normalization. The location is built from the parsed state,
/// so following it never redirects again.
pub fn legacy_redirect<S: AsRef<str>>(
    domain: CatalogDomain,
    segments: &[S],
    query: &QueryParams,
) -> Option<String> {
    let state = parse_filter_state(domain, segments, query);

    let has_canonical_segments = segments
        .iter()
        .map(AsRef::as_ref)
        .eq(canonical_segments(&state).iter().map(String::as_str));
    let has_legacy_params = domain
        .schema()
        .legacy_params()
        .any(|param| query.contains_key(param));
    let has_canonical_query = CANONICAL_QUERY_PARAMS
        .iter()
        .filter_map(|param| query.get(*param).map(|value| (*param, value.as_str())))
        .eq(canonical_query(&state)
            .iter()
            .map(|(param, value)| (*param, value.as_str())));
    if has_canonical_segments && !has_legacy_params && has_canonical_query {
        return None;
    }

    Some(build_path(&state))
}
