use mongodb::bson::Document;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A bookable lesson in the catalogue
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Lesson {
    /// Application-level numeric id, distinct from Mongo's _id
    pub id: i32,
    /// Subject taught, e.g. "Math"
    pub subject: String,
    /// Where the lesson takes place
    pub location: String,
    /// Price per space
    pub price: f64,
    /// Remaining bookable spaces
    pub spaces: i32,
    /// Image file name, served under /images
    pub image: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateLesson {
    pub subject: Option<String>,
    pub location: Option<String>,
    pub price: Option<f64>,
    pub spaces: Option<i32>,
    pub image: Option<String>,
}

impl UpdateLesson {
    /// Build the `$set` payload from the fields that were supplied.
    /// Returns `None` when the request carried nothing to update.
    pub fn into_set_document(self) -> Option<Document> {
        let mut set = Document::new();

        if let Some(subject) = self.subject {
            set.insert("subject", subject);
        }
        if let Some(location) = self.location {
            set.insert("location", location);
        }
        if let Some(price) = self.price {
            set.insert("price", price);
        }
        if let Some(spaces) = self.spaces {
            set.insert("spaces", spaces);
        }
        if let Some(image) = self.image {
            set.insert("image", image);
        }

        if set.is_empty() {
            None
        } else {
            Some(set)
        }
    }
}
