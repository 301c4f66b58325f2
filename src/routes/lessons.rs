use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, put},
    Router,
};
use std::sync::Arc;

use crate::{
    errors::lesson::LessonError,
    models::{Lesson, UpdateLesson},
    AppState,
};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_lessons))
        .route("/{id}", get(get_lesson))
        .route("/{id}", put(update_lesson))
}

#[utoipa::path(
    get,
    path = "/api/lessons",
    tag = "lessons",
    responses(
        (status = 200, description = "Full lesson catalogue, sorted by id", body = Vec<Lesson>)
    )
)]
pub async fn list_lessons(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Lesson>>, LessonError> {
    let lessons = state.db.list_lessons().await.map_err(|e| {
        tracing::error!("Failed to list lessons: {}", e);
        LessonError::database(e)
    })?;

    Ok(Json(lessons))
}

#[utoipa::path(
    get,
    path = "/api/lessons/{id}",
    tag = "lessons",
    params(
        ("id" = i32, Path, description = "Lesson id")
    ),
    responses(
        (status = 200, description = "The requested lesson", body = Lesson),
        (status = 404, description = "No lesson has this id")
    )
)]
pub async fn get_lesson(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<Lesson>, LessonError> {
    let lesson = state
        .db
        .get_lesson(id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch lesson {}: {}", id, e);
            LessonError::database(e)
        })?
        .ok_or(LessonError::not_found(id))?;

    Ok(Json(lesson))
}

#[utoipa::path(
    put,
    path = "/api/lessons/{id}",
    tag = "lessons",
    params(
        ("id" = i32, Path, description = "Lesson id")
    ),
    request_body = UpdateLesson,
    responses(
        (status = 200, description = "Lesson updated", body = Lesson),
        (status = 400, description = "No updatable fields in the request"),
        (status = 404, description = "No lesson has this id")
    )
)]
pub async fn update_lesson(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateLesson>,
) -> Result<Json<Lesson>, LessonError> {
    let set = payload
        .into_set_document()
        .ok_or(LessonError::NoFieldsToUpdate)?;

    let lesson = state
        .db
        .update_lesson(id, set)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update lesson {}: {}", id, e);
            LessonError::database(e)
        })?
        .ok_or(LessonError::not_found(id))?;

    Ok(Json(lesson))
}
