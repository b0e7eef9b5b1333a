//! Server configuration.
//!
//! Everything is read once at startup from `MCP_*` environment variables
//! (a `.env` file is honoured) on top of the defaults below.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{info, warn};

/// Default endpoint used to render QR code images.
pub const DEFAULT_QR_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Settings for one server process, grouped per concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,

    /// Catalog dataset and query behaviour.
    pub catalog: CatalogConfig,

    /// Tool widget settings.
    pub widgets: WidgetsConfig,

    pub logging: LoggingConfig,

    /// Which transport to serve on.
    pub transport: TransportConfig,

    /// Where conversion tools may read files from.
    pub security: SecurityConfig,
}

/// Name and version reported to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub name: String,
    pub version: String,
}

/// Catalog dataset selection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Directory holding `categories.json` and `tools.json`.
    /// If None, the dataset compiled into the binary is used.
    pub data_dir: Option<PathBuf>,

    /// Delay catalog queries and simulated file processing the way a remote
    /// backend would.
    pub simulate_latency: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetsConfig {
    /// Base URL of the external QR image service.
    pub qr_endpoint: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level: trace, debug, info, warn or error.
    pub level: String,

    pub with_timestamps: bool,
}

/// Sandbox for files handed to the conversion tools.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Files must resolve inside this directory. Unrestricted when None.
    pub root_path: Option<PathBuf>,

    /// Follow symlinks. Their targets must still resolve inside the root.
    pub allow_symlinks: bool,
}

impl Default for WidgetsConfig {
    fn default() -> Self {
        Self {
            qr_endpoint: DEFAULT_QR_ENDPOINT.to_string(),
        }
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            root_path: None,
            allow_symlinks: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "toolbox-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            catalog: CatalogConfig::default(),
            widgets: WidgetsConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            security: SecurityConfig::default(),
        }
    }
}

impl Config {
    /// Build the configuration from `MCP_*` variables, keeping defaults for
    /// anything unset.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }
        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Ok(timestamps) = std::env::var("MCP_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = parse_flag(&timestamps);
        }

        config.transport = TransportConfig::from_env();

        if let Ok(dir) = std::env::var("MCP_CATALOG_DIR") {
            config.catalog.data_dir = Some(PathBuf::from(dir));
            info!("Catalog directory set to {:?}", config.catalog.data_dir);
        }

        if let Ok(simulate) = std::env::var("MCP_SIMULATE_LATENCY") {
            config.catalog.simulate_latency = parse_flag(&simulate);
            info!("Simulated latency: {}", config.catalog.simulate_latency);
        }

        if let Ok(endpoint) = std::env::var("MCP_QR_ENDPOINT") {
            config.widgets.qr_endpoint = endpoint;
        }

        match std::env::var("MCP_ROOT_PATH") {
            Ok(root) => {
                info!("Conversion tools sandboxed to {}", root);
                config.security.root_path = Some(PathBuf::from(root));
            }
            Err(_) => warn!("MCP_ROOT_PATH unset: conversion tools accept any readable file"),
        }

        if let Ok(allow) = std::env::var("MCP_ALLOW_SYMLINKS") {
            config.security.allow_symlinks = parse_flag(&allow);
            info!("Symlinks allowed: {}", config.security.allow_symlinks);
        }

        config
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_catalog_dir_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_CATALOG_DIR", "/tmp/catalog");
        }
        let config = Config::from_env();
        assert_eq!(
            config.catalog.data_dir.as_deref(),
            Some(std::path::Path::new("/tmp/catalog"))
        );
        unsafe {
            std::env::remove_var("MCP_CATALOG_DIR");
        }
    }

    #[test]
    fn test_simulated_latency_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_SIMULATE_LATENCY", "true");
        }
        assert!(Config::from_env().catalog.simulate_latency);
        unsafe {
            std::env::set_var("MCP_SIMULATE_LATENCY", "off");
        }
        assert!(!Config::from_env().catalog.simulate_latency);
        unsafe {
            std::env::remove_var("MCP_SIMULATE_LATENCY");
        }
    }

    #[test]
    fn test_qr_endpoint_default_fallback() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("MCP_QR_ENDPOINT");
        }
        let config = Config::from_env();
        assert_eq!(config.widgets.qr_endpoint, DEFAULT_QR_ENDPOINT);
    }

    #[test]
    fn test_config_default_uses_builtin_catalog() {
        let config = Config::default();
        assert!(config.catalog.data_dir.is_none());
        assert!(!config.catalog.simulate_latency);
    }
}
