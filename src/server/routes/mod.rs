//! HTTP route modules

pub mod catalog;
pub mod generate;

use actix_web::web;

/// Mount every API route
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/nano-banana/generate", web::post().to(generate::generate))
            .route("/presets", web::get().to(catalog::list_presets))
            .route("/view-angles", web::get().to(catalog::list_view_angles)),
    );
}
