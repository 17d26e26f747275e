use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PageVisits {
    pub path: String,
    pub visits: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HourlyVisits {
    pub hour: u32,
    pub visits: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AdminStats {
    pub total_visits: u64,
    pub today_visits: u64,
    pub week_visits: u64,
    pub month_visits: u64,
    pub unique_visitors: u64,
    pub today_unique: u64,
    pub top_pages: Vec<PageVisits>,
    pub hourly_visits: Vec<HourlyVisits>,
}
