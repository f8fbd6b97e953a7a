use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    response::IntoResponse,
};

use crate::modules::posts::adapters::inbound::query_params::QueryParams;
use crate::modules::posts::core::errors::PostError;
use crate::modules::posts::core::ordering::PostOrdering;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<impl IntoResponse, PostError> {
    let params = QueryParams::from(query?);
    let ordering = PostOrdering::parse(params.first("sort"), params.first("direction"))?;
    Ok(Json(state.posts.list(ordering).await))
}
