use axum::{
    extract::{Query, State},
    response::Json,
    routing::get,
    Router,
};
use std::sync::Arc;

use crate::{
    errors::search::SearchError,
    models::{Lesson, SearchRequest},
    AppState,
};

pub const MAX_QUERY_LENGTH: usize = 256;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(search_lessons))
}

#[utoipa::path(
    get,
    path = "/api/search",
    tag = "search",
    params(SearchRequest),
    responses(
        (status = 200, description = "Lessons matching the query", body = Vec<Lesson>),
        (status = 400, description = "Query too long")
    )
)]
pub async fn search_lessons(
    State(state): State<Arc<AppState>>,
    Query(request): Query<SearchRequest>,
) -> Result<Json<Vec<Lesson>>, SearchError> {
    let query = request.q.unwrap_or_default();
    if query.len() > MAX_QUERY_LENGTH {
        return Err(SearchError::query_too_long(query.len(), MAX_QUERY_LENGTH));
    }

    let lessons = state.db.search_lessons(&query).await.map_err(|e| {
        tracing::error!("Failed to search lessons: {}", e);
        SearchError::database(e)
    })?;

    Ok(Json(lessons))
}
