/// In-memory post repository - used when no database is configured and in tests.
///
/// Data is lost on process restart.
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::PostRepository;
use crate::error::{AppError, Result};
use crate::models::{NewPost, Post};

pub struct InMemoryPostRepository {
    posts: RwLock<BTreeMap<i64, Post>>,
    // Mirrors the database sequence: strictly increasing, never reused,
    // not rewound by deletes.
    next_id: AtomicI64,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn insert(&self, post: NewPost) -> Result<Post> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let post = Post {
            id,
            post_date: post.post_date,
            author: post.author,
            content: post.content,
            view_count: post.view_count,
        };

        self.posts.write().await.insert(id, post.clone());
        Ok(post)
    }

    async fn update(&self, post: &Post) -> Result<Post> {
        let mut posts = self.posts.write().await;
        match posts.get_mut(&post.id) {
            Some(existing) => {
                *existing = post.clone();
                Ok(post.clone())
            }
            None => Err(AppError::NotFound(format!(
                "Post with id {} not found",
                post.id
            ))),
        }
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>> {
        Ok(self.posts.read().await.get(&id).cloned())
    }

    async fn exists(&self, id: i64) -> Result<bool> {
        Ok(self.posts.read().await.contains_key(&id))
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.posts.write().await.remove(&id);
        Ok(())
    }

    async fn list(&self, limit: i64) -> Result<Vec<Post>> {
        let posts = self.posts.read().await;
        Ok(posts.values().take(limit as usize).cloned().collect())
    }

    async fn top_by_views(&self, limit: i64) -> Result<Vec<Post>> {
        let posts = self.posts.read().await;
        let mut ranked: Vec<Post> = posts.values().cloned().collect();
        // Stable sort keeps id order among equal view counts.
        ranked.sort_by(|a, b| b.view_count.cmp(&a.view_count));
        ranked.truncate(limit as usize);
        Ok(ranked)
    }

    async fn increment_views(&self, id: i64) -> Result<Option<Post>> {
        let mut posts = self.posts.write().await;
        Ok(posts.get_mut(&id).map(|post| {
            post.view_count += 1;
            post.clone()
        }))
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}
