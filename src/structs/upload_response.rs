use serde::Serialize;

use crate::models::upload::Upload;

#[derive(Serialize, Debug)]
pub struct UploadResponse {
    pub success: bool,
    pub url: String,
    pub filename: String,
}

#[derive(Serialize)]
pub struct UploadListResponse {
    pub uploads: Vec<Upload>,
}

#[derive(Serialize)]
pub struct DeleteUploadResponse {
    pub success: bool,
    pub message: String,
}
