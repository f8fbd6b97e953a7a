// The post entity and the validated inputs that create or change it.
//
// Responsibilities
// - Hold the shape that is serialized on the wire: {"id", "title", "content"}.
// - Reject creations without a title or content.
// - Treat empty strings in an update as "not provided".

use serde::{Deserialize, Serialize};

use crate::modules::posts::core::errors::PostError;

pub type PostId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
}

impl NewPost {
    pub fn new(title: Option<String>, content: Option<String>) -> Result<Self, PostError> {
        match (non_empty(title), non_empty(content)) {
            (Some(title), Some(content)) => Ok(Self { title, content }),
            _ => Err(PostError::invalid("Both title and content are required.")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostPatch {
    pub fn new(title: Option<String>, content: Option<String>) -> Self {
        Self {
            title: non_empty(title),
            content: non_empty(content),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }

    /// Writes the supplied fields onto `post`, leaving the others untouched.
    pub fn apply_to(self, post: &mut Post) {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(content) = self.content {
            post.content = content;
        }
    }
}

pub fn seed_posts() -> Vec<Post> {
    vec![
        Post {
            id: 1,
            title: "First post".to_string(),
            content: "This is the first post.".to_string(),
        },
        Post {
            id: 2,
            title: "Second post".to_string(),
            content: "This is the second post.".to_string(),
        },
    ]
}

pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
