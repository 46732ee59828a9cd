/// Database access layer for post-service
///
/// The [`PostRepository`] trait is the single seam between business logic
/// and storage. Two implementations exist: PostgreSQL for deployments and
/// an in-memory store for local runs and tests.
use async_trait::async_trait;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::error::Result;
use crate::models::{NewPost, Post};

pub mod memory;
pub mod postgres;

pub use memory::InMemoryPostRepository;
pub use postgres::PostgresPostRepository;

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Create the PostgreSQL pool and bring the schema up to date.
pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    MIGRATOR
        .run(&pool)
        .await
        .map_err(|e| crate::error::AppError::Database(e.to_string()))?;

    Ok(pool)
}

/// Storage operations for posts.
///
/// Id assignment lives behind `insert`: callers hand over a [`NewPost`]
/// and get back the persisted [`Post`] carrying the store-assigned id.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Persist a draft and return it with its assigned id.
    async fn insert(&self, post: NewPost) -> Result<Post>;

    /// Overwrite the row with the post's id.
    async fn update(&self, post: &Post) -> Result<Post>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>>;

    async fn exists(&self, id: i64) -> Result<bool>;

    /// Remove the row unconditionally; absence checks belong to callers.
    async fn delete(&self, id: i64) -> Result<()>;

    /// First `limit` posts in the store's natural order.
    async fn list(&self, limit: i64) -> Result<Vec<Post>>;

    /// Up to `limit` posts ordered by view count, highest first.
    async fn top_by_views(&self, limit: i64) -> Result<Vec<Post>>;

    /// Atomically add one to the post's view count and return the
    /// updated post, or `None` when the id is absent.
    async fn increment_views(&self, id: i64) -> Result<Option<Post>>;

    async fn health_check(&self) -> Result<()>;
}
