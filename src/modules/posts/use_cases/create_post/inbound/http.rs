use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::posts::core::errors::PostError;
use crate::modules::posts::core::post::NewPost;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreatePostBody {
    pub title: Option<String>,
    pub content: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreatePostBody>, JsonRejection>,
) -> Result<impl IntoResponse, PostError> {
    let Json(body) = body?;
    let new_post = NewPost::new(body.title, body.content)?;

    let post = state.posts.create(new_post).await;
    tracing::info!(post_id = post.id, "post created");
    Ok((StatusCode::CREATED, Json(post)))
}
