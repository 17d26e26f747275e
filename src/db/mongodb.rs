use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use log::info;
use mongodb::bson::{Bson, Document, doc, to_bson};
use mongodb::{Client, Collection, Database};

use crate::db::store::{
    ContentRepository, StatusRepository, Store, UploadRepository, VisitRepository,
};
use crate::models::content::ContentBlock;
use crate::models::status_check::StatusCheck;
use crate::models::upload::Upload;
use crate::models::visit::Visit;
use crate::structs::stats::PageVisits;
use crate::utils::timestamp::to_storage;

/// MongoDB-backed store. Cloning shares the underlying connection pool.
#[derive(Clone)]
pub struct MongoStore {
    client: Client,
    db: Database,
}

impl MongoStore {
    /// Connect and verify the server answers before serving requests.
    pub async fn connect(uri: &str, db_name: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri)
            .await
            .context("Invalid MongoDB connection string")?;
        let db = client.database(db_name);

        db.run_command(doc! { "ping": 1 })
            .await
            .context("Failed to reach MongoDB")?;
        info!("Connected to MongoDB database '{}'", db_name);

        Ok(Self { client, db })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    fn uploads(&self) -> Collection<Upload> {
        self.db.collection("uploads")
    }

    fn status_checks(&self) -> Collection<StatusCheck> {
        self.db.collection("status_checks")
    }

    fn visits(&self) -> Collection<Visit> {
        self.db.collection("visits")
    }

    fn content(&self) -> Collection<ContentBlock> {
        self.db.collection("content")
    }
}

fn since_filter(since: Option<DateTime<Utc>>) -> Document {
    match since {
        Some(ts) => doc! { "timestamp": { "$gte": to_storage(&ts) } },
        None => doc! {},
    }
}

/// MongoDB treats a zero limit as "no limit"; callers asking for zero rows
/// get none.
fn positive_limit(limit: i64) -> Option<i64> {
    (limit > 0).then_some(limit)
}

fn count_field(doc: &Document) -> u64 {
    match doc.get("count") {
        Some(Bson::Int32(n)) => *n as u64,
        Some(Bson::Int64(n)) => *n as u64,
        _ => 0,
    }
}

#[async_trait]
impl UploadRepository for MongoStore {
    async fn insert_upload(&self, upload: &Upload) -> Result<()> {
        self.uploads()
            .insert_one(upload)
            .await
            .context("Failed to insert upload")?;
        Ok(())
    }

    async fn recent_uploads(&self, limit: i64) -> Result<Vec<Upload>> {
        let uploads = self
            .uploads()
            .find(doc! {})
            .sort(doc! { "uploaded_at": -1 })
            .limit(limit)
            .await
            .context("Failed to query uploads")?
            .try_collect()
            .await
            .context("Failed to read uploads")?;
        Ok(uploads)
    }

    async fn delete_upload(&self, filename: &str) -> Result<()> {
        self.uploads()
            .delete_one(doc! { "filename": filename })
            .await
            .context("Failed to delete upload")?;
        Ok(())
    }
}

#[async_trait]
impl StatusRepository for MongoStore {
    async fn insert_status(&self, status: &StatusCheck) -> Result<()> {
        self.status_checks()
            .insert_one(status)
            .await
            .context("Failed to insert status check")?;
        Ok(())
    }

    async fn list_status(&self, limit: i64) -> Result<Vec<StatusCheck>> {
        let checks = self
            .status_checks()
            .find(doc! {})
            .limit(limit)
            .await
            .context("Failed to query status checks")?
            .try_collect()
            .await
            .context("Failed to read status checks")?;
        Ok(checks)
    }
}

#[async_trait]
impl VisitRepository for MongoStore {
    async fn insert_visit(&self, visit: &Visit) -> Result<()> {
        self.visits()
            .insert_one(visit)
            .await
            .context("Failed to insert visit")?;
        Ok(())
    }

    async fn count_visits(&self, since: Option<DateTime<Utc>>) -> Result<u64> {
        self.visits()
            .count_documents(since_filter(since))
            .await
            .context("Failed to count visits")
    }

    async fn count_sessions(&self, since: Option<DateTime<Utc>>) -> Result<u64> {
        let sessions = self
            .visits()
            .distinct("session_id", since_filter(since))
            .await
            .context("Failed to list distinct sessions")?;
        Ok(sessions.len() as u64)
    }

    async fn visits_since(&self, since: DateTime<Utc>, limit: i64) -> Result<Vec<Visit>> {
        let visits = self
            .visits()
            .find(since_filter(Some(since)))
            .limit(limit)
            .await
            .context("Failed to query recent visits")?
            .try_collect()
            .await
            .context("Failed to read recent visits")?;
        Ok(visits)
    }

    async fn top_paths(&self, limit: i64) -> Result<Vec<PageVisits>> {
        let pipeline = vec![
            doc! { "$group": { "_id": "$path", "count": { "$sum": 1 } } },
            doc! { "$sort": { "count": -1 } },
            doc! { "$limit": limit },
        ];

        let groups: Vec<Document> = self
            .visits()
            .aggregate(pipeline)
            .await
            .context("Failed to aggregate visits by path")?
            .try_collect()
            .await
            .context("Failed to read path aggregation")?;

        Ok(groups
            .iter()
            .map(|group| PageVisits {
                path: group.get_str("_id").unwrap_or_default().to_string(),
                visits: count_field(group),
            })
            .collect())
    }

    async fn page_visits(&self, skip: u64, limit: i64) -> Result<Vec<Visit>> {
        let Some(limit) = positive_limit(limit) else {
            return Ok(Vec::new());
        };

        let visits = self
            .visits()
            .find(doc! {})
            .sort(doc! { "timestamp": -1 })
            .skip(skip)
            .limit(limit)
            .await
            .context("Failed to query visits")?
            .try_collect()
            .await
            .context("Failed to read visits")?;
        Ok(visits)
    }
}

#[async_trait]
impl ContentRepository for MongoStore {
    async fn find_content(&self, content_type: &str) -> Result<Option<ContentBlock>> {
        self.content()
            .find_one(doc! { "type": content_type })
            .await
            .context("Failed to query content")
    }

    async fn upsert_content(&self, block: &ContentBlock) -> Result<()> {
        let data = to_bson(&block.data).context("Content payload is not representable as BSON")?;

        self.content()
            .update_one(
                doc! { "type": &block.content_type },
                doc! { "$set": { "type": &block.content_type, "data": data } },
            )
            .upsert(true)
            .await
            .context("Failed to upsert content")?;
        Ok(())
    }

    async fn list_content(&self, limit: i64) -> Result<Vec<ContentBlock>> {
        let blocks = self
            .content()
            .find(doc! {})
            .limit(limit)
            .await
            .context("Failed to query content")?
            .try_collect()
            .await
            .context("Failed to read content")?;
        Ok(blocks)
    }
}

#[async_trait]
impl Store for MongoStore {
    async fn ping(&self) -> Result<()> {
        self.db
            .run_command(doc! { "ping": 1 })
            .await
            .context("Database ping failed")?;
        Ok(())
    }
}
