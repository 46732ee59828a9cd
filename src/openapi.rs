/// OpenAPI documentation for post-service
use actix_web::{web, HttpResponse};
use utoipa::OpenApi;

use crate::handlers::posts::{CreatePostRequest, UpdatePostRequest};
use crate::models::Post;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Post Service API",
        version = "0.1.0",
        description = "CRUD service for social-network posts. Posts are created with an author and content, fetched individually (each fetch increments the post's view count), listed in pages of 50, and ranked by view count through the top-ten endpoint.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Development server"),
    ),
    tags(
        (name = "health", description = "Service health checks"),
        (name = "posts", description = "Post creation, retrieval, updates, deletion, and ranking"),
    ),
    components(schemas(Post, CreatePostRequest, UpdatePostRequest)),
)]
pub struct ApiDoc;

/// Actix handler that renders the document as JSON.
pub async fn serve_openapi(
    doc: web::Data<utoipa::openapi::OpenApi>,
) -> actix_web::Result<HttpResponse> {
    let body = serde_json::to_string(&*doc).map_err(|e| {
        tracing::error!("OpenAPI serialization failed: {}", e);
        actix_web::error::ErrorInternalServerError("OpenAPI serialization error")
    })?;

    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .body(body))
}
