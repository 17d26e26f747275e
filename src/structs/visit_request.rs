use serde::{Deserialize, Serialize};

use crate::models::visit::Visit;

#[derive(Deserialize)]
pub struct VisitRequest {
    // Always replaced by the address resolved from the request.
    #[serde(default)]
    #[allow(dead_code)]
    pub ip_address: Option<String>,
    pub user_agent: String,
    pub path: String,
    pub referrer: Option<String>,
    pub session_id: Option<String>,
}

#[derive(Deserialize)]
pub struct VisitListParams {
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub skip: u32,
}

fn default_limit() -> u32 {
    100
}

#[derive(Serialize)]
pub struct VisitListResponse {
    pub visits: Vec<Visit>,
    pub total: u64,
}
