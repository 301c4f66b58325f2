use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema, IntoParams)]
pub struct SearchRequest {
    /// Free-text query matched against subject and location; numeric
    /// queries also match price and spaces exactly. Blank or missing
    /// returns the full catalogue.
    pub q: Option<String>,
}
