use axum::http::StatusCode;
use thiserror::Error;

use super::{impl_into_response, AppError};

/// Errors related to static image serving
#[derive(Error, Debug)]
pub enum ImageError {
    #[error("Image file not found")]
    NotFound,
}

impl AppError for ImageError {
    fn status_code(&self) -> StatusCode {
        match self {
            ImageError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    fn user_message(&self) -> String {
        match self {
            ImageError::NotFound => "Image not found".to_string(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ImageError::NotFound => "IMAGE_NOT_FOUND",
        }
    }
}

impl_into_response!(ImageError);
