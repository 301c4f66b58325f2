use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{
    errors::order::OrderError,
    models::{CreateOrder, Order, OrderResponse},
    AppState,
};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_orders))
        .route("/", post(create_order))
}

#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "orders",
    responses(
        (status = 200, description = "All orders, newest first", body = Vec<OrderResponse>)
    )
)]
pub async fn list_orders(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<OrderResponse>>, OrderError> {
    let orders = state.db.list_orders().await.map_err(|e| {
        tracing::error!("Failed to list orders: {}", e);
        OrderError::database(e)
    })?;

    Ok(Json(orders.into_iter().map(OrderResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/api/orders",
    tag = "orders",
    request_body = CreateOrder,
    responses(
        (status = 201, description = "Order placed", body = OrderResponse),
        (status = 400, description = "Invalid name, phone, or empty lesson list")
    )
)]
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateOrder>,
) -> Result<(StatusCode, Json<OrderResponse>), OrderError> {
    payload.validate()?;

    let mut order = Order::from_request(payload);

    // The insert and the per-lesson decrements are separate writes;
    // no transaction spans them. A failure below leaves the order
    // recorded with missing or partial decrements.
    let id = state.db.insert_order(&order).await.map_err(|e| {
        tracing::error!("Failed to insert order: {}", e);
        OrderError::database(e)
    })?;
    order.id = Some(id);

    for (lesson_id, count) in order.space_counts() {
        let modified = state
            .db
            .decrement_lesson_spaces(lesson_id, count)
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to decrement spaces for lesson {}: {}",
                    lesson_id,
                    e
                );
                OrderError::database(e)
            })?;

        if modified == 0 {
            tracing::warn!(
                "Order {} booked lesson {} which does not exist",
                id.to_hex(),
                lesson_id
            );
        }
    }

    Ok((StatusCode::CREATED, Json(OrderResponse::from(order))))
}
