/// Post service - business rules for post creation, retrieval, and management
use std::sync::Arc;

use chrono::Utc;

use crate::db::PostRepository;
use crate::error::{AppError, Result};
use crate::models::{NewPost, Post};

/// Fixed size of the listing page.
pub const PAGE_SIZE: i64 = 50;

/// Size of the view-count ranking.
const TOP_POSTS_LIMIT: i64 = 10;

pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// Build a fresh draft: the post date is stamped now, the view count
    /// starts at zero. Nothing is persisted here.
    pub fn create_post(&self, author: &str, content: &str) -> NewPost {
        NewPost {
            post_date: Utc::now(),
            author: author.to_string(),
            content: content.to_string(),
            view_count: 0,
        }
    }

    /// First page of posts, at most [`PAGE_SIZE`] rows.
    pub async fn get_all_posts(&self) -> Result<Vec<Post>> {
        self.repo.list(PAGE_SIZE).await
    }

    /// Look up a post without touching its view count.
    pub async fn find_by_id(&self, id: i64) -> Result<Post> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Post with id {} not found", id)))
    }

    /// Read a post the way the GET endpoint does: the stored view count
    /// grows by one and the returned post carries the new value.
    pub async fn view_post(&self, id: i64) -> Result<Post> {
        self.repo
            .increment_views(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Post with id {} not found", id)))
    }

    /// Persist a draft and return the stored post with its assigned id.
    pub async fn add_post(&self, post: NewPost) -> Result<Post> {
        let post = self.repo.insert(post).await?;
        tracing::debug!(post_id = post.id, author = %post.author, "post created");
        Ok(post)
    }

    /// Overwrite an existing post.
    pub async fn update_post(&self, post: &Post) -> Result<Post> {
        self.repo.update(post).await
    }

    /// Delete a post after checking it exists. Deleting an unknown id is
    /// an invalid request state, reported distinctly from a failed lookup.
    pub async fn delete_post(&self, id: i64) -> Result<()> {
        if !self.repo.exists(id).await? {
            return Err(AppError::InvalidState(format!(
                "Post with id {} does not exist.",
                id
            )));
        }

        self.repo.delete(id).await?;
        tracing::debug!(post_id = id, "post deleted");
        Ok(())
    }

    /// Up to ten posts ordered by view count, highest first.
    pub async fn get_top_ten_viewed_posts(&self) -> Result<Vec<Post>> {
        self.repo.top_by_views(TOP_POSTS_LIMIT).await
    }

    /// Store connectivity probe for the health endpoint.
    pub async fn health_check(&self) -> Result<()> {
        self.repo.health_check().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use mockall::predicate::eq;
    use mockall::*;

    mock! {
        pub Repo {}

        #[async_trait::async_trait]
        impl PostRepository for Repo {
            async fn insert(&self, post: NewPost) -> Result<Post>;
            async fn update(&self, post: &Post) -> Result<Post>;
            async fn find_by_id(&self, id: i64) -> Result<Option<Post>>;
            async fn exists(&self, id: i64) -> Result<bool>;
            async fn delete(&self, id: i64) -> Result<()>;
            async fn list(&self, limit: i64) -> Result<Vec<Post>>;
            async fn top_by_views(&self, limit: i64) -> Result<Vec<Post>>;
            async fn increment_views(&self, id: i64) -> Result<Option<Post>>;
            async fn health_check(&self) -> Result<()>;
        }
    }

    fn stored_post(id: i64, view_count: i64) -> Post {
        Post {
            id,
            post_date: DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap(),
            author: format!("Author {}", id),
            content: format!("Content {}", id),
            view_count,
        }
    }

    fn service(repo: MockRepo) -> PostService {
        PostService::new(Arc::new(repo))
    }

    #[test]
    fn create_post_sets_date_and_zero_views() {
        let svc = service(MockRepo::new());

        let before = Utc::now();
        let draft = svc.create_post("Konrad", "This is a test post.");

        assert_eq!(draft.author, "Konrad");
        assert_eq!(draft.content, "This is a test post.");
        assert_eq!(draft.view_count, 0);
        assert!(draft.post_date >= before && draft.post_date <= Utc::now());
    }

    #[tokio::test]
    async fn get_all_posts_requests_a_single_page() {
        let mut repo = MockRepo::new();
        repo.expect_list()
            .with(eq(PAGE_SIZE))
            .times(1)
            .returning(|_| Ok(vec![stored_post(1, 0), stored_post(2, 0)]));

        let posts = service(repo).get_all_posts().await.unwrap();
        assert_eq!(posts.len(), 2);
    }

    #[tokio::test]
    async fn find_by_id_returns_the_post() {
        let mut repo = MockRepo::new();
        repo.expect_find_by_id()
            .with(eq(1))
            .times(1)
            .returning(|id| Ok(Some(stored_post(id, 0))));

        let post = service(repo).find_by_id(1).await.unwrap();
        assert_eq!(post.id, 1);
    }

    #[tokio::test]
    async fn find_by_id_maps_absence_to_not_found() {
        let mut repo = MockRepo::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let err = service(repo).find_by_id(42).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn view_post_returns_the_incremented_count() {
        let mut repo = MockRepo::new();
        repo.expect_increment_views()
            .with(eq(1))
            .times(1)
            .returning(|id| Ok(Some(stored_post(id, 6))));

        let post = service(repo).view_post(1).await.unwrap();
        assert_eq!(post.view_count, 6);
    }

    #[tokio::test]
    async fn view_post_maps_absence_to_not_found() {
        let mut repo = MockRepo::new();
        repo.expect_increment_views().returning(|_| Ok(None));

        let err = service(repo).view_post(42).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn add_post_saves_through_the_repository() {
        let mut repo = MockRepo::new();
        repo.expect_insert()
            .times(1)
            .returning(|draft| {
                Ok(Post {
                    id: 1,
                    post_date: draft.post_date,
                    author: draft.author,
                    content: draft.content,
                    view_count: draft.view_count,
                })
            });

        let svc = service(repo);
        let draft = svc.create_post("Author", "Content");
        let post = svc.add_post(draft).await.unwrap();

        assert_eq!(post.id, 1);
        assert_eq!(post.author, "Author");
    }

    #[tokio::test]
    async fn update_post_saves_through_the_repository() {
        let mut repo = MockRepo::new();
        repo.expect_update()
            .times(1)
            .returning(|post| Ok(post.clone()));

        let post = stored_post(1, 3);
        let updated = service(repo).update_post(&post).await.unwrap();
        assert_eq!(updated, post);
    }

    #[tokio::test]
    async fn delete_post_removes_an_existing_post() {
        let mut repo = MockRepo::new();
        repo.expect_exists()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(true));
        repo.expect_delete().with(eq(1)).times(1).returning(|_| Ok(()));

        service(repo).delete_post(1).await.unwrap();
    }

    #[tokio::test]
    async fn delete_post_rejects_a_missing_id_without_deleting() {
        let mut repo = MockRepo::new();
        repo.expect_exists()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(false));
        repo.expect_delete().never();

        let err = service(repo).delete_post(1).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidState(_)));
    }

    #[tokio::test]
    async fn top_ten_asks_for_ten_posts() {
        let mut repo = MockRepo::new();
        repo.expect_top_by_views()
            .with(eq(10))
            .times(1)
            .returning(|_| Ok((11..=20).rev().map(|i| stored_post(i, i)).collect()));

        let posts = service(repo).get_top_ten_viewed_posts().await.unwrap();
        assert_eq!(posts.len(), 10);
        assert_eq!(posts[0].view_count, 20);
    }
}
