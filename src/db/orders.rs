use anyhow::{Context, Result};
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;

use super::Database;
use crate::models::Order;

impl Database {
    pub async fn insert_order(&self, order: &Order) -> Result<ObjectId> {
        let result = self.orders().insert_one(order).await?;
        result
            .inserted_id
            .as_object_id()
            .context("inserted order id was not an ObjectId")
    }

    pub async fn list_orders(&self) -> Result<Vec<Order>> {
        let cursor = self
            .orders()
            .find(doc! {})
            .sort(doc! { "created_at": -1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }
}
