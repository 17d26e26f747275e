use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::models::content::ContentBlock;
use crate::models::status_check::StatusCheck;
use crate::models::upload::Upload;
use crate::models::visit::Visit;
use crate::structs::stats::PageVisits;

#[async_trait]
pub trait UploadRepository: Send + Sync {
    async fn insert_upload(&self, upload: &Upload) -> Result<()>;

    /// Most recent first
    async fn recent_uploads(&self, limit: i64) -> Result<Vec<Upload>>;

    /// Removing a record that does not exist is not an error.
    async fn delete_upload(&self, filename: &str) -> Result<()>;
}

#[async_trait]
pub trait StatusRepository: Send + Sync {
    async fn insert_status(&self, status: &StatusCheck) -> Result<()>;

    async fn list_status(&self, limit: i64) -> Result<Vec<StatusCheck>>;
}

#[async_trait]
pub trait VisitRepository: Send + Sync {
    async fn insert_visit(&self, visit: &Visit) -> Result<()>;

    /// Count visits, optionally only those at or after `since`.
    async fn count_visits(&self, since: Option<DateTime<Utc>>) -> Result<u64>;

    /// Number of distinct session ids, optionally only at or after `since`.
    async fn count_sessions(&self, since: Option<DateTime<Utc>>) -> Result<u64>;

    /// Visits at or after `since`, in store order.
    async fn visits_since(&self, since: DateTime<Utc>, limit: i64) -> Result<Vec<Visit>>;

    /// Paths grouped by visit count, highest first.
    async fn top_paths(&self, limit: i64) -> Result<Vec<PageVisits>>;

    /// Newest first, for the admin listing.
    async fn page_visits(&self, skip: u64, limit: i64) -> Result<Vec<Visit>>;
}

#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn find_content(&self, content_type: &str) -> Result<Option<ContentBlock>>;

    /// Insert or fully replace the block keyed by `block.content_type`.
    async fn upsert_content(&self, block: &ContentBlock) -> Result<()>;

    async fn list_content(&self, limit: i64) -> Result<Vec<ContentBlock>>;
}

/// Everything the HTTP layer needs from the document database.
#[async_trait]
pub trait Store: UploadRepository + StatusRepository + VisitRepository + ContentRepository {
    /// Round-trip to the server to check connectivity.
    async fn ping(&self) -> Result<()>;
}
