use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Runtime settings, read from the environment (and `.env` when present).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mongo_url: String,
    pub db_name: String,
    pub cors_origins: Vec<String>,
    pub base_url: String,
    pub bind_address: String,
    pub port: u16,
    pub uploads_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mongo_url = lookup("MONGO_URL").context("MONGO_URL not set")?;
        let db_name = lookup("DB_NAME").context("DB_NAME not set")?;

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT is not a valid port number: {}", raw))?,
            None => 8000,
        };

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| String::from("*"))
            .split(',')
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .collect();

        let base_url = lookup("BASE_URL")
            .unwrap_or_else(|| String::from(DEFAULT_BASE_URL))
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            mongo_url,
            db_name,
            cors_origins,
            base_url,
            bind_address: lookup("BIND_ADDRESS").unwrap_or_else(|| String::from("127.0.0.1")),
            port,
            uploads_dir: PathBuf::from(lookup("UPLOADS_DIR").unwrap_or_else(|| String::from("uploads"))),
        })
    }

    /// `*` anywhere in the list opens CORS to every origin.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty() || self.cors_origins.iter().any(|o| o == "*")
    }
}
