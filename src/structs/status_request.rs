use serde::Deserialize;

#[derive(Deserialize)]
pub struct StatusCheckRequest {
    pub client_name: String,
}
