use actix_web::{HttpResponse, web};

use crate::errors::app_error::AppError;
use crate::models::status_check::StatusCheck;
use crate::state::app_state::AppState;
use crate::structs::status_request::StatusCheckRequest;

const STATUS_LIST_LIMIT: i64 = 1000;

pub async fn create_status_check(
    app_state: web::Data<AppState>,
    web::Json(req): web::Json<StatusCheckRequest>,
) -> Result<HttpResponse, AppError> {
    let status = StatusCheck::new(req.client_name);
    app_state.store.insert_status(&status).await?;
    Ok(HttpResponse::Ok().json(status))
}

pub async fn get_status_checks(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let checks = app_state.store.list_status(STATUS_LIST_LIMIT).await?;
    Ok(HttpResponse::Ok().json(checks))
}
