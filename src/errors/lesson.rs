use axum::http::StatusCode;
use thiserror::Error;

use super::{impl_into_response, AppError};

/// Errors related to lesson operations
#[derive(Error, Debug)]
pub enum LessonError {
    #[error("Lesson {id} not found")]
    NotFound { id: i32 },

    #[error("Update request contained no updatable fields")]
    NoFieldsToUpdate,

    #[error("Database operation failed: {message}")]
    Database { message: String },
}

impl AppError for LessonError {
    fn status_code(&self) -> StatusCode {
        match self {
            LessonError::NotFound { .. } => StatusCode::NOT_FOUND,
            LessonError::NoFieldsToUpdate => StatusCode::BAD_REQUEST,
            LessonError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn user_message(&self) -> String {
        match self {
            LessonError::NotFound { .. } => "Lesson not found".to_string(),
            LessonError::NoFieldsToUpdate => {
                "At least one field must be provided to update a lesson".to_string()
            }
            LessonError::Database { .. } => "An internal error occurred".to_string(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            LessonError::NotFound { .. } => "LESSON_NOT_FOUND",
            LessonError::NoFieldsToUpdate => "LESSON_NO_FIELDS_TO_UPDATE",
            LessonError::Database { .. } => "LESSON_DATABASE_ERROR",
        }
    }
}

impl_into_response!(LessonError);

/// Convenience methods for creating common lesson errors
impl LessonError {
    pub fn not_found(id: i32) -> Self {
        Self::NotFound { id }
    }

    pub fn database<E: std::fmt::Display>(err: E) -> Self {
        Self::Database {
            message: err.to_string(),
        }
    }
}
