use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::order::OrderError;

/// Order payload as submitted by the storefront
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateOrder {
    /// Customer name, letters and spaces only
    pub name: String,
    /// Contact phone number, digits only
    pub phone: String,
    /// Lesson ids being booked; each entry books one space, so a
    /// repeated id books several spaces in the same lesson
    pub lesson_ids: Vec<i32>,
}

impl CreateOrder {
    pub fn validate(&self) -> Result<(), OrderError> {
        let name = self.name.trim();
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphabetic() || c == ' ') {
            return Err(OrderError::invalid_name(&self.name));
        }

        if self.phone.is_empty() || !self.phone.chars().all(|c| c.is_ascii_digit()) {
            return Err(OrderError::invalid_phone(&self.phone));
        }

        if self.lesson_ids.is_empty() {
            return Err(OrderError::EmptyLessonList);
        }

        Ok(())
    }
}

/// Persisted form of an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub phone: String,
    pub lesson_ids: Vec<i32>,
    /// Total spaces booked across all lessons
    pub spaces: i32,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn from_request(request: CreateOrder) -> Self {
        let spaces = request.lesson_ids.len() as i32;
        Order {
            id: None,
            name: request.name.trim().to_string(),
            phone: request.phone,
            lesson_ids: request.lesson_ids,
            spaces,
            created_at: Utc::now(),
        }
    }

    /// Spaces booked per lesson id, in ascending id order.
    pub fn space_counts(&self) -> BTreeMap<i32, i32> {
        let mut counts = BTreeMap::new();
        for id in &self.lesson_ids {
            *counts.entry(*id).or_insert(0) += 1;
        }
        counts
    }
}
