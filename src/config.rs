use std::path::PathBuf;

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    /// Whether the `/api` mount also exposes the bookings routes.
    pub api_bookings: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "6700".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            db_path: std::env::var("DB_PATH")
                .unwrap_or_else(|_| "db.json".to_string())
                .into(),
            api_bookings: std::env::var("API_BOOKINGS")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        })
    }
}
