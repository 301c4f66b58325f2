use axum::Router;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    models::{CreateOrder, Lesson, OrderResponse, SearchRequest, UpdateLesson},
    AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Lesson endpoints
        crate::routes::lessons::list_lessons,
        crate::routes::lessons::get_lesson,
        crate::routes::lessons::update_lesson,
        // Search endpoints
        crate::routes::search::search_lessons,
        // Order endpoints
        crate::routes::orders::list_orders,
        crate::routes::orders::create_order,
    ),
    components(
        schemas(Lesson, UpdateLesson, CreateOrder, OrderResponse, SearchRequest)
    ),
    tags(
        (name = "lessons", description = "Lesson catalogue endpoints"),
        (name = "search", description = "Catalogue search endpoints"),
        (name = "orders", description = "Order placement endpoints"),
    ),
    info(
        title = "StudySphere API",
        version = "0.1.0",
        description = "Tutoring marketplace backend",
    )
)]
pub struct ApiDoc;

pub fn create_swagger_router() -> Router<Arc<AppState>> {
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into()
}
