use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::content::ContentBlock;

#[derive(Deserialize)]
pub struct ContentUpdateRequest {
    // The path segment decides which block is written; this is informational.
    #[serde(rename = "type", default)]
    pub content_type: Option<String>,
    pub data: Value,
}

#[derive(Serialize)]
pub struct ContentUpdateResponse {
    pub success: bool,
    #[serde(rename = "type")]
    pub content_type: String,
}

#[derive(Serialize)]
pub struct ContentListResponse {
    pub content: Vec<ContentBlock>,
}
