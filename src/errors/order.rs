use axum::http::StatusCode;
use thiserror::Error;

use super::{impl_into_response, AppError};

/// Errors related to order placement
#[derive(Error, Debug)]
pub enum OrderError {
    #[error("Invalid customer name '{name}'")]
    InvalidName { name: String },

    #[error("Invalid phone number '{phone}'")]
    InvalidPhone { phone: String },

    #[error("Order booked no lessons")]
    EmptyLessonList,

    #[error("Database operation failed: {message}")]
    Database { message: String },
}

impl AppError for OrderError {
    fn status_code(&self) -> StatusCode {
        match self {
            OrderError::InvalidName { .. } => StatusCode::BAD_REQUEST,
            OrderError::InvalidPhone { .. } => StatusCode::BAD_REQUEST,
            OrderError::EmptyLessonList => StatusCode::BAD_REQUEST,
            OrderError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn user_message(&self) -> String {
        match self {
            OrderError::InvalidName { .. } => {
                "Name must contain only letters and spaces".to_string()
            }
            OrderError::InvalidPhone { .. } => {
                "Phone number must contain only digits".to_string()
            }
            OrderError::EmptyLessonList => {
                "An order must book at least one lesson".to_string()
            }
            OrderError::Database { .. } => "An internal error occurred".to_string(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            OrderError::InvalidName { .. } => "ORDER_INVALID_NAME",
            OrderError::InvalidPhone { .. } => "ORDER_INVALID_PHONE",
            OrderError::EmptyLessonList => "ORDER_EMPTY_LESSON_LIST",
            OrderError::Database { .. } => "ORDER_DATABASE_ERROR",
        }
    }
}

impl_into_response!(OrderError);

/// Convenience methods for creating common order errors
impl OrderError {
    pub fn invalid_name<S: Into<String>>(name: S) -> Self {
        Self::InvalidName { name: name.into() }
    }

    pub fn invalid_phone<S: Into<String>>(phone: S) -> Self {
        Self::InvalidPhone {
            phone: phone.into(),
        }
    }

    pub fn database<E: std::fmt::Display>(err: E) -> Self {
        Self::Database {
            message: err.to_string(),
        }
    }
}
