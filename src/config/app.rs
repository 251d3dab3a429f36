// src/config/app.rs
use super::defaults::*;
use serde::Deserialize;
use std::path::Path;
use std::sync::OnceLock;
use tracing::warn;

use crate::consts::{CONFIG_ENV_VAR, DEFAULT_CONFIG_PATH};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub attack: AttackSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AttackSettings {
    pub iterations: usize,
    pub restarts: usize,
    pub known_weight: f64,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            attack: default_attack(),
            logging: default_logging(),
        }
    }
}

impl Default for AttackSettings {
    fn default() -> Self {
        default_attack()
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        default_logging()
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Read and parse one config file
pub fn load_from(path: impl AsRef<Path>) -> Result<Config> {
    let content = std::fs::read_to_string(path)?;
    Config::from_toml_str(&content)
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Global config, loaded on first use. A missing or unreadable file falls back to defaults.
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path =
            std::env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        if !Path::new(&config_path).exists() {
            warn!("{config_path} not found — using built-in defaults");
            return Config::default();
        }

        match load_from(&config_path) {
            Ok(conf) => conf,
            Err(err) => {
                warn!("failed to load {config_path}: {err} — using built-in defaults");
                Config::default()
            }
        }
    })
}
