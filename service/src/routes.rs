use crate::models::HealthResponse;
use actix_web::{Responder, get, web};

pub mod docs;
pub mod files;
pub mod screenshots;

/// Check service health
#[utoipa::path(
    tag = "health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse),
    )
)]
#[get("/health")]
pub async fn health() -> impl Responder {
    web::Json(HealthResponse {
        status: "healthy".to_string(),
    })
}
