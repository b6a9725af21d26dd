use crate::{catalog::CatalogBackend, server::app_state::AppState};
use actix_web::{HttpResponse, web};

pub async fn status_get<B: CatalogBackend>(state: web::Data<AppState<B>>) -> HttpResponse {
    HttpResponse::Ok().json(&state.status)
}
