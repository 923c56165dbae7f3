use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use axum::http::HeaderValue;

const DEFAULT_STORAGE_PATH: &str = "storage/resumes.json";
const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:8080,http://localhost:3000";

/// Application configuration loaded from environment variables.
/// Every setting has a default, so the service starts with an empty environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub storage_path: PathBuf,
    pub allowed_origins: Vec<HeaderValue>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Config {
            host: var("HOST", "0.0.0.0"),
            port: var("PORT", "8000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            storage_path: PathBuf::from(var("RESUME_STORAGE_PATH", DEFAULT_STORAGE_PATH)),
            allowed_origins: parse_origins(&var("CORS_ALLOWED_ORIGINS", DEFAULT_ALLOWED_ORIGINS))?,
            rust_log: var("RUST_LOG", "info"),
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("HOST '{}' is not a valid IP address", self.host))
    }
}

fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin)
                .with_context(|| format!("CORS origin '{origin}' is not a valid header value"))
        })
        .collect()
}
