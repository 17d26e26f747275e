use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::{info, warn};

use crate::db::store::UploadRepository;
use crate::errors::app_error::AppError;
use crate::models::upload::Upload;
use crate::structs::upload_response::UploadResponse;
use crate::utils::filename::{generate_stored_name, validate_stored_name};

/// Image types accepted by the upload endpoint.
pub const ALLOWED_CONTENT_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/gif", "image/webp"];

/// URL prefix the uploads directory is served under.
pub const PUBLIC_PREFIX: &str = "/uploads";

pub fn is_allowed_content_type(content_type: &str) -> bool {
    ALLOWED_CONTENT_TYPES
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(content_type.trim()))
}

/// Uploaded files on local disk, with their metadata in the store.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
    base_url: String,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            base_url: base_url.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub async fn ensure_dir(&self) -> anyhow::Result<()> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("Failed to create uploads directory {}", self.dir.display()))
    }

    pub fn public_url(&self, filename: &str) -> String {
        format!("{}{}/{}", self.base_url, PUBLIC_PREFIX, filename)
    }

    /// Validate, write and register one uploaded file.
    pub async fn store<S>(
        &self,
        store: &S,
        bytes: &[u8],
        content_type: &str,
        original_name: &str,
    ) -> Result<UploadResponse, AppError>
    where
        S: UploadRepository + ?Sized,
    {
        if !is_allowed_content_type(content_type) {
            warn!("Rejected upload '{}' with type {}", original_name, content_type);
            return Err(AppError::BadRequest(String::from("File type not allowed")));
        }

        let filename = generate_stored_name(original_name);
        tokio::fs::write(self.dir.join(&filename), bytes)
            .await
            .map_err(|e| AppError::FileWrite(e.to_string()))?;
        info!("Stored upload '{}' as {} ({} bytes)", original_name, filename, bytes.len());

        let url = self.public_url(&filename);
        let upload = Upload::new(
            filename.clone(),
            original_name.to_string(),
            content_type.to_string(),
            url.clone(),
        );
        store.insert_upload(&upload).await?;

        Ok(UploadResponse {
            success: true,
            url,
            filename,
        })
    }

    /// Remove a stored file and its record. Either may already be gone.
    pub async fn delete<S>(&self, store: &S, filename: &str) -> Result<(), AppError>
    where
        S: UploadRepository + ?Sized,
    {
        let filename = validate_stored_name(filename)
            .ok_or_else(|| AppError::BadRequest(String::from("Invalid filename")))?;

        match tokio::fs::remove_file(self.dir.join(filename)).await {
            Ok(()) => info!("Deleted upload {}", filename),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(AppError::FileDelete(e.to_string())),
        }

        store.delete_upload(filename).await?;
        Ok(())
    }
}
