use actix_web::{HttpRequest, HttpResponse, web};

use crate::errors::app_error::AppError;
use crate::services::visit_recorder::record_visit;
use crate::state::app_state::AppState;
use crate::structs::visit_request::VisitRequest;
use crate::utils::client_ip::resolve_client_ip;

/// Record a page view reported by the site front end
pub async fn create_visit(
    app_state: web::Data<AppState>,
    req: HttpRequest,
    web::Json(visit): web::Json<VisitRequest>,
) -> Result<HttpResponse, AppError> {
    let client_ip = resolve_client_ip(req.headers(), req.peer_addr());
    let visit = record_visit(app_state.store.as_ref(), visit, client_ip).await?;
    Ok(HttpResponse::Ok().json(visit))
}
