use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::posts::core::errors::PostError;

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl PostError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            PostError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            PostError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl From<JsonRejection> for PostError {
    fn from(rejection: JsonRejection) -> Self {
        PostError::InvalidArgument(rejection.body_text())
    }
}

impl From<QueryRejection> for PostError {
    fn from(rejection: QueryRejection) -> Self {
        PostError::InvalidArgument(rejection.body_text())
    }
}

// Ids are integer-only in the route, so anything else addresses no post.
impl From<PathRejection> for PostError {
    fn from(_: PathRejection) -> Self {
        PostError::NotFound
    }
}

impl IntoResponse for PostError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "request rejected");
        let status = self.status_code();
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
