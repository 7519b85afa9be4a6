use anyhow::{Context, Result};

/// Runtime configuration for the judging API, read from the environment.
/// A local `.env` file is honored in development via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// Comma-separated bearer tokens for the gateway; empty disables the check
    pub api_keys: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("HOST is not set")?,
            port: std::env::var("PORT")
                .context("PORT is not set")?
                .parse()
                .context("PORT must be a valid port number")?,
            database_url: std::env::var("DATABASE_URL").context("DATABASE_URL is not set")?,
            api_keys: std::env::var("API_KEYS").unwrap_or_default(),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
