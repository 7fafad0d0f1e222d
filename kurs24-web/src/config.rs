//! Portal configuration
//!
//! TOML file with environment overrides. Every field has a default so the
//! portal comes up with no config file at all (container-first deployment).

use std::path::Path;

use serde::Deserialize;

use kurs24_backend::{BACKEND_API_URL_VAR, DEFAULT_BACKEND_API_URL};

/// Environment variable naming the config file path.
pub const CONFIG_PATH_VAR: &str = "KURS24_WEB_CONFIG";
/// Default config file path.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub backend: BackendConfig,
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address.
    pub bind: String,
    /// Worker count; `0` means one per CPU.
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:3000".to_string(),
            workers: 0,
        }
    }
}

/// Upstream backend settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL of the Backend Provisioning Service.
    pub api_url: String,
    /// Serve a synthetic success when tenant creation cannot reach the
    /// backend. Deliberate soft-degrade; keep off unless the deployment
    /// wants the dashboard usable during backend outages.
    pub offline_fallback: bool,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_BACKEND_API_URL.to_string(),
            offline_fallback: false,
        }
    }
}

impl AppConfig {
    /// Load configuration: TOML file (if present), then env overrides.
    pub fn load() -> anyhow::Result<Self> {
        let path =
            std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let mut config = if Path::new(&path).exists() {
            let raw = std::fs::read_to_string(&path)?;
            toml::from_str(&raw)?
        } else {
            Self::default()
        };

        if let Ok(url) = std::env::var(BACKEND_API_URL_VAR) {
            config.backend.api_url = url;
        }

        Ok(config)
    }

    /// Effective worker count.
    #[must_use]
    pub fn workers(&self) -> usize {
        if self.server.workers == 0 {
            num_cpus::get()
        } else {
            self.server.workers
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_file() {
        let config = AppConfig::default();
        assert_eq!(config.server.bind, "0.0.0.0:3000");
        assert_eq!(config.backend.api_url, "http://kurs24-api:8000");
        assert!(!config.backend.offline_fallback);
    }

    #[test]
    fn parses_partial_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [backend]
            api_url = "http://localhost:8000"
            offline_fallback = true
            "#,
        )
        .unwrap();
        assert_eq!(config.backend.api_url, "http://localhost:8000");
        assert!(config.backend.offline_fallback);
        // untouched sections keep their defaults
        assert_eq!(config.server.bind, "0.0.0.0:3000");
    }

    #[test]
    fn zero_workers_means_auto() {
        let config = AppConfig::default();
        assert!(config.workers() >= 1);
    }
}
