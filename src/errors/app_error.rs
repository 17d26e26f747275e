use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use log::error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Failed to save file: {0}")]
    FileWrite(String),

    #[error("Failed to delete file: {0}")]
    FileDelete(String),

    #[error("Database error: {0}")]
    Store(#[from] anyhow::Error),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::FileWrite(_) | AppError::FileDelete(_) | AppError::Store(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let detail = match self {
            AppError::Store(e) => {
                error!("Database error: {:#}", e);
                String::from("Database error")
            }
            AppError::FileWrite(_) | AppError::FileDelete(_) => {
                error!("{}", self);
                self.to_string()
            }
            AppError::BadRequest(_) => self.to_string(),
        };

        HttpResponse::build(self.status_code()).json(serde_json::json!({ "detail": detail }))
    }
}
