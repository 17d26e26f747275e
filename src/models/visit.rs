use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Visit {
    pub id: String,
    pub ip_address: String,
    pub user_agent: String,
    pub path: String,
    pub referrer: Option<String>,
    #[serde(with = "crate::utils::timestamp")]
    pub timestamp: DateTime<Utc>,
    pub session_id: String, // groups visits from one browser session
}

impl Visit {
    pub fn new(
        ip_address: String,
        user_agent: String,
        path: String,
        referrer: Option<String>,
        session_id: Option<String>,
    ) -> Self {
        let session_id = session_id
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        Self {
            id: Uuid::new_v4().to_string(),
            ip_address,
            user_agent,
            path,
            referrer,
            timestamp: Utc::now(),
            session_id,
        }
    }
}
