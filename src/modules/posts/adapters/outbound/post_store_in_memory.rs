// In memory post store.
//
// Purpose
// - Hold the whole collection for the lifetime of the process.
//
// Responsibilities
// - Keep posts in insertion order.
// - Issue ids one above the highest id ever issued, so a deleted id is never reused.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::modules::posts::core::errors::PostError;
use crate::modules::posts::core::ordering::PostOrdering;
use crate::modules::posts::core::ports::PostStore;
use crate::modules::posts::core::post::{NewPost, Post, PostId, PostPatch, seed_posts};
use crate::modules::posts::core::search::{SearchOutcome, SearchQuery};

#[derive(Default)]
struct Collection {
    posts: Vec<Post>,
    last_id: PostId,
}

impl Collection {
    fn next_id(&mut self) -> PostId {
        let highest = self.posts.iter().map(|p| p.id).max().unwrap_or(0);
        self.last_id = self.last_id.max(highest) + 1;
        self.last_id
    }
}

#[derive(Default)]
pub struct InMemoryPostStore {
    collection: RwLock<Collection>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_posts(posts: Vec<Post>) -> Self {
        let last_id = posts.iter().map(|p| p.id).max().unwrap_or(0);
        Self {
            collection: RwLock::new(Collection { posts, last_id }),
        }
    }

    pub fn seeded() -> Self {
        Self::with_posts(seed_posts())
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn list(&self, ordering: Option<PostOrdering>) -> Vec<Post> {
        let mut posts = self.collection.read().await.posts.clone();
        if let Some(ordering) = ordering {
            ordering.sort(&mut posts);
        }
        posts
    }

    async fn find(&self, id: PostId) -> Result<Post, PostError> {
        self.collection
            .read()
            .await
            .posts
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(PostError::NotFound)
    }

    async fn create(&self, new_post: NewPost) -> Post {
        let mut guard = self.collection.write().await;
        let post = Post {
            id: guard.next_id(),
            title: new_post.title,
            content: new_post.content,
        };
        guard.posts.push(post.clone());
        post
    }

    async fn update(&self, id: PostId, patch: PostPatch) -> Result<Post, PostError> {
        let mut guard = self.collection.write().await;
        let post = guard
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(PostError::NotFound)?;
        if patch.is_empty() {
            return Err(PostError::invalid("Title or content is required for update."));
        }
        patch.apply_to(post);
        Ok(post.clone())
    }

    async fn delete(&self, id: PostId) -> Result<Post, PostError> {
        let mut guard = self.collection.write().await;
        let index = guard
            .posts
            .iter()
            .position(|p| p.id == id)
            .ok_or(PostError::NotFound)?;
        Ok(guard.posts.remove(index))
    }

    async fn search(&self, query: SearchQuery) -> SearchOutcome {
        query.run(&self.collection.read().await.posts)
    }
}
