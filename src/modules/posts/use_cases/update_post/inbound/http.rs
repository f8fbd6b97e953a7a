use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::posts::core::errors::PostError;
use crate::modules::posts::core::post::{PostId, PostPatch};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UpdatePostBody {
    pub title: Option<String>,
    pub content: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    id: Result<Path<PostId>, PathRejection>,
    body: Result<Json<UpdatePostBody>, JsonRejection>,
) -> Result<impl IntoResponse, PostError> {
    let Path(id) = id?;
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => {
            // An unknown post is reported before a malformed body.
            state.posts.find(id).await?;
            return Err(rejection.into());
        }
    };

    let post = state
        .posts
        .update(id, PostPatch::new(body.title, body.content))
        .await?;
    tracing::info!(post_id = post.id, "post updated");
    Ok(Json(post))
}
