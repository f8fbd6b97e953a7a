use std::sync::Arc;

use crate::modules::posts::adapters::outbound::post_store_in_memory::InMemoryPostStore;
use crate::modules::posts::core::ports::PostStore;

#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostStore>,
}

impl AppState {
    pub fn new(posts: Arc<dyn PostStore>) -> Self {
        Self { posts }
    }

    /// State backed by an in memory store holding the two seed posts.
    pub fn seeded() -> Self {
        Self::new(Arc::new(InMemoryPostStore::seeded()))
    }
}
