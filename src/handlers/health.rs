/// Health check handlers
use actix_web::{web, HttpResponse};

use crate::services::PostService;

/// Overall service health including store connectivity.
pub async fn health_summary(service: web::Data<PostService>) -> HttpResponse {
    match service.health_check().await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "status": "ok",
            "service": "post-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
        Err(e) => HttpResponse::ServiceUnavailable().json(serde_json::json!({
            "status": "unhealthy",
            "error": format!("store health check failed: {}", e),
            "service": "post-service"
        })),
    }
}

/// Process liveness only, no dependency checks.
pub async fn liveness_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({"alive": true}))
}
