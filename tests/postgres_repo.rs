//! Repository contract test against a real PostgreSQL instance.
//!
//! Set TEST_DATABASE_URL to run; without it the test is a no-op so the
//! suite passes on machines with no database available.

use chrono::Utc;

use post_service::db::{init_pool, PostRepository, PostgresPostRepository};
use post_service::models::NewPost;

#[tokio::test]
async fn postgres_repository_contract() {
    let url = match std::env::var("TEST_DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("TEST_DATABASE_URL not set; skipping Postgres repository test");
            return;
        }
    };

    let pool = init_pool(&url, 5).await.expect("connect and migrate");
    let repo = PostgresPostRepository::new(pool);

    let created = repo
        .insert(NewPost {
            post_date: Utc::now(),
            author: "contract".to_string(),
            content: "insert returns the assigned id".to_string(),
            view_count: 0,
        })
        .await
        .expect("insert");
    assert!(created.id >= 1);
    assert_eq!(created.view_count, 0);

    assert!(repo.exists(created.id).await.expect("exists"));

    let found = repo
        .find_by_id(created.id)
        .await
        .expect("find")
        .expect("created post is readable");
    assert_eq!(found.author, "contract");

    let bumped = repo
        .increment_views(created.id)
        .await
        .expect("increment")
        .expect("created post is countable");
    assert_eq!(bumped.view_count, found.view_count + 1);

    let mut edited = bumped.clone();
    edited.content = "updated in place".to_string();
    let updated = repo.update(&edited).await.expect("update");
    assert_eq!(updated.content, "updated in place");
    assert_eq!(updated.view_count, bumped.view_count);

    let second = repo
        .insert(NewPost {
            post_date: Utc::now(),
            author: "contract".to_string(),
            content: "ids keep increasing".to_string(),
            view_count: 0,
        })
        .await
        .expect("second insert");
    assert!(second.id > created.id);

    let ranked = repo.top_by_views(10).await.expect("top");
    assert!(ranked.windows(2).all(|w| w[0].view_count >= w[1].view_count));

    repo.delete(created.id).await.expect("delete");
    repo.delete(second.id).await.expect("delete");
    assert!(!repo.exists(created.id).await.expect("exists after delete"));
    assert!(repo
        .find_by_id(created.id)
        .await
        .expect("find after delete")
        .is_none());
}
