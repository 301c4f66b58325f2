use crate::errors::image::ImageError;

/// Fallback for the `/images` static file service: misses get a JSON
/// 404 body instead of `ServeDir`'s empty response.
pub async fn image_not_found() -> ImageError {
    ImageError::NotFound
}
