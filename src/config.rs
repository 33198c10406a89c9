//! Server configuration.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Registrar configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Maximum request body size (in bytes)
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    /// Allowed CORS origins; empty allows any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_max_body_bytes() -> usize {
    64 * 1024 // 64 KiB
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_body_bytes: default_max_body_bytes(),
            cors_origins: Vec::new(),
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.max_body_bytes, 64 * 1024);
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: Config = toml::from_str(r#"cors_origins = ["http://localhost:3000"]"#).unwrap();
        assert_eq!(config.cors_origins, ["http://localhost:3000"]);
        assert_eq!(config.max_body_bytes, 64 * 1024);
    }
}
