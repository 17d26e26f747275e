//! In-process store used by the test suite in place of MongoDB.

use std::collections::HashSet;
use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::db::store::{
    ContentRepository, StatusRepository, Store, UploadRepository, VisitRepository,
};
use crate::models::content::ContentBlock;
use crate::models::status_check::StatusCheck;
use crate::models::upload::Upload;
use crate::models::visit::Visit;
use crate::structs::stats::PageVisits;

#[derive(Default)]
pub struct MemoryStore {
    uploads: Mutex<Vec<Upload>>,
    status_checks: Mutex<Vec<StatusCheck>>,
    visits: Mutex<Vec<Visit>>,
    content: Mutex<Vec<ContentBlock>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upload_count(&self) -> usize {
        self.uploads.lock().unwrap().len()
    }
}

fn at_or_after(visit: &Visit, since: Option<DateTime<Utc>>) -> bool {
    since.is_none_or(|ts| visit.timestamp >= ts)
}

fn take(limit: i64) -> usize {
    usize::try_from(limit).unwrap_or(0)
}

#[async_trait]
impl UploadRepository for MemoryStore {
    async fn insert_upload(&self, upload: &Upload) -> Result<()> {
        self.uploads.lock().unwrap().push(upload.clone());
        Ok(())
    }

    async fn recent_uploads(&self, limit: i64) -> Result<Vec<Upload>> {
        let mut uploads = self.uploads.lock().unwrap().clone();
        uploads.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
        uploads.truncate(take(limit));
        Ok(uploads)
    }

    async fn delete_upload(&self, filename: &str) -> Result<()> {
        let mut uploads = self.uploads.lock().unwrap();
        if let Some(pos) = uploads.iter().position(|u| u.filename == filename) {
            uploads.remove(pos);
        }
        Ok(())
    }
}

#[async_trait]
impl StatusRepository for MemoryStore {
    async fn insert_status(&self, status: &StatusCheck) -> Result<()> {
        self.status_checks.lock().unwrap().push(status.clone());
        Ok(())
    }

    async fn list_status(&self, limit: i64) -> Result<Vec<StatusCheck>> {
        let checks = self.status_checks.lock().unwrap();
        Ok(checks.iter().take(take(limit)).cloned().collect())
    }
}

#[async_trait]
impl VisitRepository for MemoryStore {
    async fn insert_visit(&self, visit: &Visit) -> Result<()> {
        self.visits.lock().unwrap().push(visit.clone());
        Ok(())
    }

    async fn count_visits(&self, since: Option<DateTime<Utc>>) -> Result<u64> {
        let visits = self.visits.lock().unwrap();
        Ok(visits.iter().filter(|v| at_or_after(v, since)).count() as u64)
    }

    async fn count_sessions(&self, since: Option<DateTime<Utc>>) -> Result<u64> {
        let visits = self.visits.lock().unwrap();
        let sessions: HashSet<&str> = visits
            .iter()
            .filter(|v| at_or_after(v, since))
            .map(|v| v.session_id.as_str())
            .collect();
        Ok(sessions.len() as u64)
    }

    async fn visits_since(&self, since: DateTime<Utc>, limit: i64) -> Result<Vec<Visit>> {
        let visits = self.visits.lock().unwrap();
        Ok(visits
            .iter()
            .filter(|v| at_or_after(v, Some(since)))
            .take(take(limit))
            .cloned()
            .collect())
    }

    async fn top_paths(&self, limit: i64) -> Result<Vec<PageVisits>> {
        let visits = self.visits.lock().unwrap();
        let mut pages: Vec<PageVisits> = Vec::new();
        for visit in visits.iter() {
            match pages.iter_mut().find(|p| p.path == visit.path) {
                Some(page) => page.visits += 1,
                None => pages.push(PageVisits {
                    path: visit.path.clone(),
                    visits: 1,
                }),
            }
        }
        // stable: ties keep first-seen order
        pages.sort_by(|a, b| b.visits.cmp(&a.visits));
        pages.truncate(take(limit));
        Ok(pages)
    }

    async fn page_visits(&self, skip: u64, limit: i64) -> Result<Vec<Visit>> {
        let mut visits = self.visits.lock().unwrap().clone();
        visits.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(visits
            .into_iter()
            .skip(skip as usize)
            .take(take(limit))
            .collect())
    }
}

#[async_trait]
impl ContentRepository for MemoryStore {
    async fn find_content(&self, content_type: &str) -> Result<Option<ContentBlock>> {
        let content = self.content.lock().unwrap();
        Ok(content
            .iter()
            .find(|b| b.content_type == content_type)
            .cloned())
    }

    async fn upsert_content(&self, block: &ContentBlock) -> Result<()> {
        let mut content = self.content.lock().unwrap();
        match content
            .iter_mut()
            .find(|b| b.content_type == block.content_type)
        {
            Some(existing) => existing.data = block.data.clone(),
            None => content.push(block.clone()),
        }
        Ok(())
    }

    async fn list_content(&self, limit: i64) -> Result<Vec<ContentBlock>> {
        let content = self.content.lock().unwrap();
        Ok(content.iter().take(take(limit)).cloned().collect())
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
