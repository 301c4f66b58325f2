use anyhow::Result;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, Document};

use super::Database;
use crate::models::Lesson;

impl Database {
    pub async fn list_lessons(&self) -> Result<Vec<Lesson>> {
        let cursor = self.lessons().find(doc! {}).sort(doc! { "id": 1 }).await?;
        Ok(cursor.try_collect().await?)
    }

    pub async fn get_lesson(&self, id: i32) -> Result<Option<Lesson>> {
        Ok(self.lessons().find_one(doc! { "id": id }).await?)
    }

    pub async fn count_lessons(&self) -> Result<u64> {
        Ok(self.lessons().count_documents(doc! {}).await?)
    }

    pub async fn insert_lessons(&self, lessons: &[Lesson]) -> Result<()> {
        self.lessons().insert_many(lessons).await?;
        Ok(())
    }

    pub async fn search_lessons(&self, query: &str) -> Result<Vec<Lesson>> {
        let cursor = self
            .lessons()
            .find(build_search_filter(query))
            .sort(doc! { "id": 1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    /// Apply a `$set` update to one lesson and return the updated
    /// document, or `None` when the id matched nothing.
    pub async fn update_lesson(&self, id: i32, set: Document) -> Result<Option<Lesson>> {
        let result = self
            .lessons()
            .update_one(doc! { "id": id }, doc! { "$set": set })
            .await?;

        if result.matched_count == 0 {
            return Ok(None);
        }

        Ok(self.lessons().find_one(doc! { "id": id }).await?)
    }

    /// Take `by` spaces off one lesson. Returns the number of modified
    /// documents: zero when the id matches no lesson. No floor is
    /// applied, so heavy overbooking can drive `spaces` negative.
    pub async fn decrement_lesson_spaces(&self, id: i32, by: i32) -> Result<u64> {
        let result = self
            .lessons()
            .update_one(doc! { "id": id }, doc! { "$inc": { "spaces": -by } })
            .await?;
        Ok(result.modified_count)
    }
}

/// Filter for catalogue search. A blank query matches everything;
/// anything else is a case-insensitive substring match on subject and
/// location, widened to exact spaces/price matches when the query
/// parses as a number. User input is escaped before it reaches
/// `$regex`.
pub fn build_search_filter(query: &str) -> Document {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return doc! {};
    }

    let pattern = regex::escape(trimmed);
    let mut clauses = vec![
        doc! { "subject": { "$regex": pattern.clone(), "$options": "i" } },
        doc! { "location": { "$regex": pattern, "$options": "i" } },
    ];

    if let Ok(spaces) = trimmed.parse::<i32>() {
        clauses.push(doc! { "spaces": spaces });
    }
    if let Ok(price) = trimmed.parse::<f64>() {
        clauses.push(doc! { "price": price });
    }

    doc! { "$or": clauses }
}
