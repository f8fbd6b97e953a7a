use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    response::IntoResponse,
};
use serde::Serialize;

use crate::modules::posts::core::errors::PostError;
use crate::modules::posts::core::post::PostId;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct DeletePostResponse {
    pub message: String,
}

pub async fn handle(
    State(state): State<AppState>,
    id: Result<Path<PostId>, PathRejection>,
) -> Result<impl IntoResponse, PostError> {
    let Path(id) = id?;
    state.posts.delete(id).await?;
    tracing::info!(post_id = id, "post deleted");

    Ok(Json(DeletePostResponse {
        message: format!("Post with id {id} has been successfully deleted"),
    }))
}
