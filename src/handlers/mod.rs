/// HTTP handlers for post-service endpoints
pub mod health;
pub mod posts;

// Re-export handler functions at module level
pub use health::{health_summary, liveness_check};
pub use posts::{
    create_post, delete_post, generate_posts, get_all_posts, get_post, get_top_ten_posts,
    update_post,
};
