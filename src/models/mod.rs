pub mod content;
pub mod status_check;
pub mod upload;
pub mod visit;
