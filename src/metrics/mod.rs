//! Prometheus metrics for post-service.
//!
//! Exposes post API collectors and an HTTP handler for the `/metrics` endpoint.

use actix_web::HttpResponse;
use lazy_static::lazy_static;
use prometheus::{
    register_int_counter, register_int_counter_vec, Encoder, IntCounter, IntCounterVec,
    TextEncoder,
};

lazy_static! {
    /// Total post API requests segmented by operation
    /// (list, get, create, update, delete, top_ten, generate).
    pub static ref POST_REQUESTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "post_requests_total",
        "Total post API requests segmented by operation",
        &["operation"]
    )
    .expect("failed to register post_requests_total");

    /// Posts persisted through the create and generate endpoints.
    pub static ref POSTS_CREATED_TOTAL: IntCounter = register_int_counter!(
        "posts_created_total",
        "Total posts persisted through the create and generate endpoints"
    )
    .expect("failed to register posts_created_total");

    /// Single-post reads that incremented a view counter.
    pub static ref POST_VIEWS_TOTAL: IntCounter = register_int_counter!(
        "post_views_total",
        "Total single-post reads that incremented a view counter"
    )
    .expect("failed to register post_views_total");
}

/// Actix handler that renders Prometheus metrics in text format.
pub async fn serve_metrics() -> HttpResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    let mut buffer = Vec::new();
    if let Err(err) = encoder.encode(&metric_families, &mut buffer) {
        return HttpResponse::InternalServerError().body(err.to_string());
    }

    HttpResponse::Ok()
        .content_type(encoder.format_type())
        .body(buffer)
}
