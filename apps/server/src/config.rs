//! Server configuration from environment variables.

use std::path::PathBuf;

use anyhow::Context;

/// Runtime configuration.
///
/// Env vars (all optional):
/// - HOST, PORT: listen address (default 0.0.0.0:3000)
/// - WORDS_DATA_DIR: generated dictionary content (default ./data)
/// - WORDS_STORE_DIR: learner progress store (default local data dir)
/// - WORDS_BACKUP_DIR: export target (default <store dir>/backups)
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
    pub store_dir: PathBuf,
    pub backup_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match lookup("PORT") {
            Some(port) => port
                .parse()
                .with_context(|| format!("invalid PORT: {}", port))?,
            None => 3000,
        };

        let data_dir = lookup("WORDS_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("data"));
        let store_dir = lookup("WORDS_STORE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_store_dir);
        let backup_dir = lookup("WORDS_BACKUP_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| store_dir.join("backups"));

        Ok(Self {
            host,
            port,
            data_dir,
            store_dir,
            backup_dir,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_store_dir() -> PathBuf {
    // Use the platform data directory, fallback to current dir
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("words-daily")
}
