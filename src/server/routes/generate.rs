//! Image generation endpoint

use crate::server::state::AppState;
use actix_web::{HttpResponse, ResponseError, web};
use tracing::{error, info, warn};

/// `POST /api/nano-banana/generate`
///
/// Takes the raw body so that malformed JSON is reported the same way as a
/// missing prompt instead of through actix's extractor error.
pub async fn generate(state: web::Data<AppState>, body: web::Bytes) -> HttpResponse {
    match state.proxy.handle_body(&body).await {
        Ok(response) => {
            info!(
                "Generation succeeded (url: {}, base64: {})",
                response.url.is_some(),
                response.base64.is_some()
            );
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            if e.is_pre_flight() {
                warn!("Generation request rejected: {}", e);
            } else {
                error!("Generation failed: {}", e);
            }
            e.error_response()
        }
    }
}
