pub mod client_ip;
pub mod filename;
pub mod timestamp;
