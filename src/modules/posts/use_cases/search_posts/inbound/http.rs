use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    response::IntoResponse,
};

use crate::modules::posts::adapters::inbound::query_params::QueryParams;
use crate::modules::posts::core::search::SearchQuery;
use crate::shell::state::AppState;

// Search never fails: an unreadable query string searches without filters.
pub async fn handle(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> impl IntoResponse {
    let params = query.map(QueryParams::from).unwrap_or_default();
    let search = SearchQuery::new(params.first("title"), params.first("content"));
    Json(state.posts.search(search).await)
}
