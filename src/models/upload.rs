use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Metadata of a file written to the uploads directory.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Upload {
    pub id: String,
    pub filename: String,      // generated name on disk
    pub original_name: String, // name supplied by the client
    pub content_type: String,
    pub url: String,
    #[serde(with = "crate::utils::timestamp")]
    pub uploaded_at: DateTime<Utc>,
}

impl Upload {
    pub fn new(filename: String, original_name: String, content_type: String, url: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            filename,
            original_name,
            content_type,
            url,
            uploaded_at: Utc::now(),
        }
    }
}
