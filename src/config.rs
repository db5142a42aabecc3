//! Configuration Module
//!
//! This module defines all configuration structures for the registry service.
//! Configuration is loaded from TOML files and parsed using serde, then the
//! DATABASE_URI environment variable is applied on top.

use serde::Deserialize;
use std::{env, fs};

/// Main configuration structure
///
/// Contains all configuration sections for the registry service and the
/// populate tool. Loaded from a TOML file (e.g., config/default.toml).
///
/// # Example TOML
/// ```toml
/// [api]
/// host = "0.0.0.0"
/// port = 8080
///
/// [database]
/// uri = ""
///
/// [manifest]
/// path = "testnet.json"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub manifest: ManifestConfig,
}

/// API server configuration
///
/// # Fields
/// - `host`: IP address to bind to (e.g., "127.0.0.1" or "0.0.0.0")
/// - `port`: TCP port to listen on (e.g., 8080)
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
}

/// Database configuration
///
/// The URI selects the storage backend: empty for a transient in-memory
/// database, a filesystem path for an embedded database file, anything else
/// for a PostgreSQL connection string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub uri: String,
}

/// Subnet manifest configuration
///
/// Path to the JSON manifest consumed by the populate tool.
#[derive(Debug, Clone, Deserialize)]
pub struct ManifestConfig {
    #[serde(default = "default_manifest_path")]
    pub path: String,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            path: default_manifest_path(),
        }
    }
}

fn default_manifest_path() -> String {
    "testnet.json".to_string()
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// When the DATABASE_URI environment variable is set it replaces the
    /// configured database URI, so the service and the populate tool always
    /// select the same backend in deployment.
    ///
    /// # Returns
    /// * `Ok(Config)` if the file was successfully loaded and parsed
    /// * `Err` if the file couldn't be read or the TOML is invalid
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;

        let mut config: Config = toml::from_str(&content)?;

        if let Ok(uri) = env::var("DATABASE_URI") {
            config.database.uri = uri;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_parses_all_sections() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"
[api]
host = "127.0.0.1"
port = 9090

[database]
uri = "./registry.db"

[manifest]
path = "subnets.json"
"#,
        )
        .unwrap();

        let config = Config::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.api.host, "127.0.0.1");
        assert_eq!(config.api.port, 9090);
        assert_eq!(config.manifest.path, "subnets.json");
    }

    #[test]
    fn test_load_defaults_optional_sections() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"
[api]
host = "0.0.0.0"
port = 8080
"#,
        )
        .unwrap();

        let config = Config::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.manifest.path, "testnet.json");
    }
}
