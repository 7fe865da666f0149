//! Read-only catalog endpoints

use crate::core::catalog;
use actix_web::HttpResponse;

/// `GET /api/presets`
pub async fn list_presets() -> HttpResponse {
    HttpResponse::Ok().json(catalog::presets())
}

/// `GET /api/view-angles`
pub async fn list_view_angles() -> HttpResponse {
    HttpResponse::Ok().json(catalog::view_angles())
}
