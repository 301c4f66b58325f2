use anyhow::Result;
use mongodb::bson::doc;
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, IndexModel};

use crate::config::Config;
use crate::models::{Lesson, Order};

pub mod lessons;
pub mod orders;

#[derive(Clone)]
pub struct Database {
    db: mongodb::Database,
}

impl Database {
    /// Build the database handle. The driver connects lazily, so this
    /// succeeds even while the server is still coming up.
    pub async fn new(config: &Config) -> Result<Self> {
        let client = Client::with_uri_str(&config.database_url).await?;
        Ok(Self {
            db: client.database(&config.database_name),
        })
    }

    pub(crate) fn lessons(&self) -> Collection<Lesson> {
        self.db.collection("lessons")
    }

    pub(crate) fn orders(&self) -> Collection<Order> {
        self.db.collection("orders")
    }

    /// Lessons are addressed by their application-level numeric id.
    pub async fn ensure_indexes(&self) -> Result<()> {
        let options = IndexOptions::builder().unique(true).build();
        let model = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(options)
            .build();
        self.lessons().create_index(model).await?;
        Ok(())
    }
}
