pub mod content;
pub mod file_storage;
pub mod stats;
pub mod visit_recorder;
