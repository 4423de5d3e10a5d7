//! Server configuration loader.
//!
//! Reads `config.toml` from the data directory (`~/.postbox/` by default)
//! and deserializes it into [`ServerConfig`]. Falls back to defaults when
//! the file is missing or malformed; CLI flags and environment variables
//! override whatever is loaded here.

use std::path::{Path, PathBuf};

use postbox_types::config::ServerConfig;

/// Resolve the data directory: `POSTBOX_DATA_DIR` if set, else `~/.postbox`.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("POSTBOX_DATA_DIR") {
        return PathBuf::from(dir);
    }
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".postbox")
}

/// Database URL derived from the data directory.
pub fn default_database_url(data_dir: &Path) -> String {
    format!("sqlite://{}?mode=rwc", data_dir.join("postbox.db").display())
}

/// Load server configuration from `{data_dir}/config.toml`.
///
/// - Missing file: returns [`ServerConfig::default()`].
/// - Unreadable or unparsable file: logs a warning and returns the default.
pub async fn load_server_config(data_dir: &Path) -> ServerConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(
                "No config.toml found at {}, using defaults",
                config_path.display()
            );
            return ServerConfig::default();
        }
        Err(err) => {
            tracing::warn!(
                "Failed to read {}: {err}, using defaults",
                config_path.display()
            );
            return ServerConfig::default();
        }
    };

    match toml::from_str::<ServerConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            ServerConfig::default()
        }
    }
}
