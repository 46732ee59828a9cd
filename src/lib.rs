/// Post Service Library
///
/// A small CRUD service for social-network posts backed by PostgreSQL.
/// Posts are created, read, updated, deleted, and ranked by view count
/// over a JSON HTTP API rooted at `/api/v1/posts`.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers
/// - `models`: Post data structures
/// - `services`: Business logic layer
/// - `db`: Database access layer and repositories
/// - `error`: Error types and handling
/// - `config`: Configuration management
/// - `metrics`: Observability and metrics collection
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod openapi;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
