use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Content types the site front end knows how to render.
pub const KNOWN_CONTENT_TYPES: [&str; 4] = ["developers", "projects", "navItems", "socialLinks"];

/// One editable block of site content, keyed by `type`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub content_type: String,
    pub data: Value,
}

impl ContentBlock {
    pub fn new(content_type: impl Into<String>, data: Value) -> Self {
        Self {
            content_type: content_type.into(),
            data,
        }
    }

    /// What callers get for a type that has never been written.
    pub fn empty(content_type: impl Into<String>) -> Self {
        Self::new(content_type, Value::Array(Vec::new()))
    }
}
