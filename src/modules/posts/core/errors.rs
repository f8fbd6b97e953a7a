use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PostError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("Post not found")]
    NotFound,
}

impl PostError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
