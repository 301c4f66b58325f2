use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::order::Order;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderResponse {
    /// Order id as a hex string
    pub id: String,
    /// Customer name
    pub name: String,
    /// Contact phone number
    pub phone: String,
    /// Lesson ids booked, one entry per space
    pub lesson_ids: Vec<i32>,
    /// Total spaces booked
    pub spaces: i32,
    /// When the order was placed
    pub created_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        OrderResponse {
            id: order.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: order.name,
            phone: order.phone,
            lesson_ids: order.lesson_ids,
            spaces: order.spaces,
            created_at: order.created_at,
        }
    }
}
