use anyhow::Result;
use chrono::{DateTime, Duration, NaiveTime, Timelike, Utc};

use crate::db::store::VisitRepository;
use crate::models::visit::Visit;
use crate::structs::stats::{AdminStats, HourlyVisits};

pub const TOP_PAGES_LIMIT: i64 = 10;

/// Upper bound on visits pulled in for the hourly chart.
const RECENT_VISITS_LIMIT: i64 = 10_000;

/// Start instants of the reporting windows for a given `now`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Windows {
    pub today: DateTime<Utc>,
    pub week: DateTime<Utc>,
    pub month: DateTime<Utc>,
    pub last_day: DateTime<Utc>,
}

impl Windows {
    pub fn at(now: DateTime<Utc>) -> Self {
        let today = now.date_naive().and_time(NaiveTime::MIN).and_utc();
        Self {
            today,
            week: today - Duration::days(7),
            month: today - Duration::days(30),
            last_day: now - Duration::hours(24),
        }
    }
}

/// Count visits per UTC hour-of-day.
///
/// Buckets are keyed by the clock hour, not by distance from now: a visit at
/// 09:10 yesterday and one at 09:50 today share bucket 9.
pub fn hourly_histogram(visits: &[Visit]) -> Vec<HourlyVisits> {
    let mut buckets = [0u64; 24];
    for visit in visits {
        buckets[visit.timestamp.hour() as usize] += 1;
    }

    buckets
        .iter()
        .enumerate()
        .map(|(hour, &visits)| HourlyVisits {
            hour: hour as u32,
            visits,
        })
        .collect()
}

pub async fn compute_stats<S>(store: &S, now: DateTime<Utc>) -> Result<AdminStats>
where
    S: VisitRepository + ?Sized,
{
    let windows = Windows::at(now);

    let total_visits = store.count_visits(None).await?;
    let today_visits = store.count_visits(Some(windows.today)).await?;
    let week_visits = store.count_visits(Some(windows.week)).await?;
    let month_visits = store.count_visits(Some(windows.month)).await?;

    let unique_visitors = store.count_sessions(None).await?;
    let today_unique = store.count_sessions(Some(windows.today)).await?;

    let recent = store.visits_since(windows.last_day, RECENT_VISITS_LIMIT).await?;
    let top_pages = store.top_paths(TOP_PAGES_LIMIT).await?;

    Ok(AdminStats {
        total_visits,
        today_visits,
        week_visits,
        month_visits,
        unique_visitors,
        today_unique,
        top_pages,
        hourly_visits: hourly_histogram(&recent),
    })
}
