use crate::{
    catalog::{CatalogBackend, CatalogBrowse, CatalogDomain, parse_query_string, path_segments},
    error::Error as CatalogError,
    server::app_state::AppState,
};
use actix_web::{HttpRequest, HttpResponse, http::header, web};
use serde_derive::Deserialize;
use serde_json::json;

/// Prefix of the catalog listing routes, the domain segment follows it.
const CATALOG_ROUTE_PREFIX: &str = "/api/catalog";

#[derive(Deserialize)]
pub struct PathParams {
    pub domain: String,
}

pub async fn catalog_browse<B: CatalogBackend>(
    state: web::Data<AppState<B>>,
    request: HttpRequest,
    path: web::Path<PathParams>,
) -> Result<HttpResponse, CatalogError> {
    let Some(domain) = CatalogDomain::from_slug(&path.domain) else {
        return Err(CatalogError::not_found(format!(
            "Catalog ({}) is not found.",
            path.domain
        )));
    };

    // Work with the raw path, segments are decoded exactly once by the codec.
    let raw_path = request
        .path()
        .strip_prefix(CATALOG_ROUTE_PREFIX)
        .unwrap_or_default();
    let segments = path_segments(raw_path).into_iter().skip(1).collect::<Vec<_>>();
    let query = parse_query_string(request.query_string());

    Ok(
        match state.api.catalog().browse(domain, &segments, &query).await {
            CatalogBrowse::Redirect { location } => HttpResponse::MovedPermanently()
                .insert_header((
                    header::LOCATION,
                    format!("{CATALOG_ROUTE_PREFIX}{location}"),
                ))
                .json(json!({ "canonicalPath": location })),
            CatalogBrowse::Page(page) => HttpResponse::Ok().json(page),
        },
    )
}
