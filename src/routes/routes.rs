use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::{Error, HttpRequest, web};

use crate::errors::app_error::AppError;

use crate::handlers::admin_handlers::{get_admin_stats, get_all_visits};
use crate::handlers::content_handlers::{
    get_all_content, get_content_block, update_content_block,
};
use crate::handlers::health_handlers::{health_check, root};
use crate::handlers::status_handlers::{create_status_check, get_status_checks};
use crate::handlers::upload_handlers::{delete_upload, list_uploads, upload_file};
use crate::handlers::visit_handlers::create_visit;

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    AppError::BadRequest(format!("Invalid JSON body: {}", err)).into()
}

fn query_error(err: QueryPayloadError, _req: &HttpRequest) -> Error {
    AppError::BadRequest(format!("Invalid query string: {}", err)).into()
}

/// Configure the routes
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .app_data(web::QueryConfig::default().error_handler(query_error));

    cfg.service(
        web::scope("/api")
            .route("/", web::get().to(root))
            .route("/health/check", web::get().to(health_check))
            // Uploads
            .route("/upload", web::post().to(upload_file))
            .route("/uploads", web::get().to(list_uploads))
            .route("/uploads/{filename}", web::delete().to(delete_upload))
            // Status checks
            .route("/status", web::post().to(create_status_check))
            .route("/status", web::get().to(get_status_checks))
            // Visit tracking
            .route("/visits", web::post().to(create_visit))
            // Admin dashboard
            .service(
                web::scope("/admin")
                    .route("/stats", web::get().to(get_admin_stats))
                    .route("/visits", web::get().to(get_all_visits))
                    .route("/content", web::get().to(get_all_content))
                    .route("/content/{content_type}", web::get().to(get_content_block))
                    .route("/content/{content_type}", web::put().to(update_content_block)),
            ),
    );
}
