use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;

use post_service::db::{self, InMemoryPostRepository, PostRepository, PostgresPostRepository};
use post_service::handlers;
use post_service::openapi::{self, ApiDoc};
use post_service::services::PostService;
use post_service::Config;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {}", e);
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting post-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    // Select the store: PostgreSQL when configured, in-memory otherwise
    let repo: Arc<dyn PostRepository> = match config.database.url.as_deref() {
        Some(url) => {
            let pool = db::init_pool(url, config.database.max_connections)
                .await
                .context("Failed to initialize database pool")?;
            tracing::info!("Connected to PostgreSQL, migrations applied");
            Arc::new(PostgresPostRepository::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set - using in-memory post store");
            Arc::new(InMemoryPostRepository::new())
        }
    };

    let service = web::Data::new(PostService::new(repo));

    let bind_address = format!("{}:{}", config.app.host, config.app.port);
    tracing::info!("Starting HTTP server at {}", bind_address);

    HttpServer::new(move || {
        // Build CORS configuration
        let mut cors = Cors::default();
        for origin in config.cors.allowed_origins.split(',') {
            let origin = origin.trim();
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else {
                cors = cors.allowed_origin(origin);
            }
        }
        cors = cors.allow_any_method().allow_any_header().max_age(3600);

        let openapi_doc = ApiDoc::openapi();

        App::new()
            .app_data(service.clone())
            .app_data(web::Data::new(openapi_doc))
            .wrap(cors)
            .wrap(tracing_actix_web::TracingLogger::default())
            .route(
                "/metrics",
                web::get().to(post_service::metrics::serve_metrics),
            )
            // Health check endpoints
            .route("/api/v1/health", web::get().to(handlers::health_summary))
            .route(
                "/api/v1/health/live",
                web::get().to(handlers::liveness_check),
            )
            .route("/api/v1/openapi.json", web::get().to(openapi::serve_openapi))
            .service(web::scope("/api/v1").configure(handlers::posts::configure))
    })
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .workers(4)
    .run()
    .await
    .context("HTTP server failed")
}
