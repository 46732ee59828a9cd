/// PostgreSQL-backed post repository
use async_trait::async_trait;
use sqlx::PgPool;

use super::PostRepository;
use crate::error::{AppError, Result};
use crate::models::{NewPost, Post};

pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn insert(&self, post: NewPost) -> Result<Post> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (post_date, author, content, view_count)
            VALUES ($1, $2, $3, $4)
            RETURNING id, post_date, author, content, view_count
            "#,
        )
        .bind(post.post_date)
        .bind(&post.author)
        .bind(&post.content)
        .bind(post.view_count)
        .fetch_one(&self.pool)
        .await?;

        Ok(post)
    }

    async fn update(&self, post: &Post) -> Result<Post> {
        let updated = sqlx::query_as::<_, Post>(
            r#"
            UPDATE posts
            SET post_date = $2, author = $3, content = $4, view_count = $5
            WHERE id = $1
            RETURNING id, post_date, author, content, view_count
            "#,
        )
        .bind(post.id)
        .bind(post.post_date)
        .bind(&post.author)
        .bind(&post.content)
        .bind(post.view_count)
        .fetch_optional(&self.pool)
        .await?;

        updated.ok_or_else(|| AppError::NotFound(format!("Post with id {} not found", post.id)))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>> {
        let post = sqlx::query_as::<_, Post>(
            "SELECT id, post_date, author, content, view_count FROM posts WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    async fn exists(&self, id: i64) -> Result<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM posts WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn list(&self, limit: i64) -> Result<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(
            "SELECT id, post_date, author, content, view_count FROM posts LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    async fn top_by_views(&self, limit: i64) -> Result<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, post_date, author, content, view_count
            FROM posts
            ORDER BY view_count DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    async fn increment_views(&self, id: i64) -> Result<Option<Post>> {
        // Single statement, so concurrent reads of the same post all count.
        let post = sqlx::query_as::<_, Post>(
            r#"
            UPDATE posts
            SET view_count = view_count + 1
            WHERE id = $1
            RETURNING id, post_date, author, content, view_count
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }
}
