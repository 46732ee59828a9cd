/// Post handlers - HTTP endpoints for post operations
use actix_web::{http::header, web, HttpResponse};
use rand::Rng;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::Result;
use crate::metrics::{POSTS_CREATED_TOTAL, POST_REQUESTS_TOTAL, POST_VIEWS_TOTAL};
use crate::services::PostService;

/// Request body for creating and updating posts
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePostRequest {
    pub author: String,
    pub content: String,
}

/// Request body for replacing a post's author and content
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePostRequest {
    pub author: String,
    pub content: String,
}

/// Register the post routes under the caller's scope.
///
/// The literal `top-ten` and `generate` segments are registered before
/// the `{id}` matcher so they are never captured as ids.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/posts")
            .service(
                web::resource("")
                    .route(web::get().to(get_all_posts))
                    .route(web::post().to(create_post)),
            )
            .route("/top-ten", web::get().to(get_top_ten_posts))
            .route("/generate", web::post().to(generate_posts))
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_post))
                    .route(web::put().to(update_post))
                    .route(web::delete().to(delete_post)),
            ),
    );
}

/// First page of posts, at most 50
/// GET /api/v1/posts
pub async fn get_all_posts(service: web::Data<PostService>) -> Result<HttpResponse> {
    POST_REQUESTS_TOTAL.with_label_values(&["list"]).inc();

    let posts = service.get_all_posts().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// Fetch a post by id; every fetch increments its view count
/// GET /api/v1/posts/{id}
pub async fn get_post(
    service: web::Data<PostService>,
    id: web::Path<i64>,
) -> Result<HttpResponse> {
    POST_REQUESTS_TOTAL.with_label_values(&["get"]).inc();

    let post = service.view_post(*id).await?;
    POST_VIEWS_TOTAL.inc();

    Ok(HttpResponse::Ok().json(post))
}

/// Create a new post
/// POST /api/v1/posts
pub async fn create_post(
    service: web::Data<PostService>,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    POST_REQUESTS_TOTAL.with_label_values(&["create"]).inc();

    let draft = service.create_post(&req.author, &req.content);
    let post = service.add_post(draft).await?;
    POSTS_CREATED_TOTAL.inc();

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/v1/posts/{}", post.id)))
        .json(post))
}

/// Replace a post's author and content; date and view count are untouched
/// PUT /api/v1/posts/{id}
pub async fn update_post(
    service: web::Data<PostService>,
    id: web::Path<i64>,
    req: web::Json<UpdatePostRequest>,
) -> Result<HttpResponse> {
    POST_REQUESTS_TOTAL.with_label_values(&["update"]).inc();

    let mut post = service.find_by_id(*id).await?;
    post.author = req.author.clone();
    post.content = req.content.clone();

    let post = service.update_post(&post).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// Delete a post
/// DELETE /api/v1/posts/{id}
pub async fn delete_post(
    service: web::Data<PostService>,
    id: web::Path<i64>,
) -> Result<HttpResponse> {
    POST_REQUESTS_TOTAL.with_label_values(&["delete"]).inc();

    service.delete_post(*id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Up to ten posts ranked by view count
/// GET /api/v1/posts/top-ten
pub async fn get_top_ten_posts(service: web::Data<PostService>) -> Result<HttpResponse> {
    POST_REQUESTS_TOTAL.with_label_values(&["top_ten"]).inc();

    let posts = service.get_top_ten_viewed_posts().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// Seed the store with 100 synthetic posts carrying random view counts
/// POST /api/v1/posts/generate
pub async fn generate_posts(service: web::Data<PostService>) -> Result<HttpResponse> {
    POST_REQUESTS_TOTAL.with_label_values(&["generate"]).inc();

    for i in 0..100 {
        let mut draft =
            service.create_post("Konrad", &format!("This is a random post number {}.", i));
        draft.view_count = rand::thread_rng().gen_range(0..1000);

        service.add_post(draft).await?;
        POSTS_CREATED_TOTAL.inc();
    }

    Ok(HttpResponse::Ok().finish())
}
