use actix_web::{HttpResponse, web};
use chrono::Utc;

use crate::errors::app_error::AppError;
use crate::services::stats::compute_stats;
use crate::state::app_state::AppState;
use crate::structs::visit_request::{VisitListParams, VisitListResponse};

/// Aggregate visit statistics for the admin dashboard
pub async fn get_admin_stats(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let stats = compute_stats(app_state.store.as_ref(), Utc::now()).await?;
    Ok(HttpResponse::Ok().json(stats))
}

/// Paginated raw visits, newest first
pub async fn get_all_visits(
    app_state: web::Data<AppState>,
    query: web::Query<VisitListParams>,
) -> Result<HttpResponse, AppError> {
    let store = &app_state.store;
    let visits = store
        .page_visits(u64::from(query.skip), i64::from(query.limit))
        .await?;
    let total = store.count_visits(None).await?;

    Ok(HttpResponse::Ok().json(VisitListResponse { visits, total }))
}
