use anyhow::{bail, Context, Result};
use regex::Regex;

#[derive(Debug, Clone)]
pub struct Config {
    // Access control
    pub admin_token: String,
    pub nonce_lifetime_secs: u64,

    // Storage
    pub database_url: String,
    pub table_prefix: String,

    // Host catalog
    pub catalog_path: String,

    // Admin UI language
    pub ui_locale: String,

    // Server
    pub bind_address: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let table_prefix = std::env::var("TABLE_PREFIX").unwrap_or_else(|_| "wp_".to_string());
        validate_table_prefix(&table_prefix)?;

        Ok(Self {
            // Access control - bearer token granting manage_options
            admin_token: std::env::var("ADMIN_TOKEN")
                .context("ADMIN_TOKEN not set")?,
            nonce_lifetime_secs: std::env::var("NONCE_LIFETIME_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|secs| *secs >= 2)
                .unwrap_or(86_400),

            // Storage
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://i18nly.db".to_string()),
            table_prefix,

            // Host catalog
            catalog_path: std::env::var("CATALOG_PATH")
                .unwrap_or_else(|_| "catalog.json".to_string()),

            // Admin UI language
            ui_locale: std::env::var("UI_LOCALE")
                .unwrap_or_else(|_| "en_US".to_string()),

            // Server
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
        })
    }
}

/// Table names are interpolated into SQL, so the prefix is restricted to identifier characters.
fn validate_table_prefix(prefix: &str) -> Result<()> {
    let pattern = Regex::new(r"^[A-Za-z0-9_]*$")?;
    if !pattern.is_match(prefix) {
        bail!("Invalid TABLE_PREFIX: {:?}. Only letters, digits and underscores are allowed", prefix);
    }
    Ok(())
}
