pub mod content_request;
pub mod stats;
pub mod status_request;
pub mod upload_response;
pub mod visit_request;
