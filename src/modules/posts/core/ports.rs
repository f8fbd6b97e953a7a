// Ports define what the HTTP layer needs from a post store, without implementing it.
//
// Boundaries
// - No concrete storage here. Adapters implement this trait in the adapters layer.
//
// Testing guidance
// - The in memory adapter is both the production store and the test double.

use async_trait::async_trait;

use crate::modules::posts::core::errors::PostError;
use crate::modules::posts::core::ordering::PostOrdering;
use crate::modules::posts::core::post::{NewPost, Post, PostId, PostPatch};
use crate::modules::posts::core::search::{SearchOutcome, SearchQuery};

#[async_trait]
pub trait PostStore: Send + Sync {
    async fn list(&self, ordering: Option<PostOrdering>) -> Vec<Post>;
    async fn find(&self, id: PostId) -> Result<Post, PostError>;
    async fn create(&self, new_post: NewPost) -> Post;
    async fn update(&self, id: PostId, patch: PostPatch) -> Result<Post, PostError>;
    async fn delete(&self, id: PostId) -> Result<Post, PostError>;
    async fn search(&self, query: SearchQuery) -> SearchOutcome;
}
