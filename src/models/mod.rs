/// Data models for post-service
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A persisted social-network post.
///
/// `id` is assigned by the store on insert and never reused. `post_date`
/// is fixed at creation. `view_count` starts at zero and grows by one on
/// every single-post read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub post_date: DateTime<Utc>,
    pub author: String,
    pub content: String,
    pub view_count: i64,
}

/// A post that has not been persisted yet, so it carries no id.
///
/// The store assigns the id during insert and returns the full [`Post`].
#[derive(Debug, Clone)]
pub struct NewPost {
    pub post_date: DateTime<Utc>,
    pub author: String,
    pub content: String,
    pub view_count: i64,
}
