pub mod admin_handlers;
pub mod content_handlers;
pub mod health_handlers;
pub mod status_handlers;
pub mod upload_handlers;
pub mod visit_handlers;
