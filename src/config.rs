//! Environment-driven configuration.
//!
//! `DATABASE_URL` is the only required setting; `.env` files are honored
//! when the binary loads dotenvy before calling `from_env`.

use crate::error::{AppError, Result};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| AppError::Config("DATABASE_URL is not set".to_string()))?;

        Ok(Self { database_url })
    }
}
