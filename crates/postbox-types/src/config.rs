//! Server configuration shape.

use serde::Deserialize;

/// Server configuration, loadable from `{data_dir}/config.toml`.
///
/// Every field has a default so a partial (or absent) file still yields a
/// usable configuration. CLI flags and environment variables override these
/// values at startup.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// SQLite database URL. When absent the server derives one from the
    /// data directory.
    pub database_url: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            database_url: None,
        }
    }
}
