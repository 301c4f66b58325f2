use axum::http::StatusCode;
use thiserror::Error;

use super::{impl_into_response, AppError};

/// Errors related to catalogue search
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Search query is too long: {length} characters (maximum: {max_length})")]
    QueryTooLong { length: usize, max_length: usize },

    #[error("Database operation failed: {message}")]
    Database { message: String },
}

impl AppError for SearchError {
    fn status_code(&self) -> StatusCode {
        match self {
            SearchError::QueryTooLong { .. } => StatusCode::BAD_REQUEST,
            SearchError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn user_message(&self) -> String {
        match self {
            SearchError::QueryTooLong { max_length, .. } => {
                format!("Search query must be less than {} characters", max_length)
            }
            SearchError::Database { .. } => "An internal error occurred".to_string(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            SearchError::QueryTooLong { .. } => "SEARCH_QUERY_TOO_LONG",
            SearchError::Database { .. } => "SEARCH_DATABASE_ERROR",
        }
    }
}

impl_into_response!(SearchError);

/// Convenience methods for creating common search errors
impl SearchError {
    pub fn query_too_long(length: usize, max_length: usize) -> Self {
        Self::QueryTooLong { length, max_length }
    }

    pub fn database<E: std::fmt::Display>(err: E) -> Self {
        Self::Database {
            message: err.to_string(),
        }
    }
}
