// src/config/defaults.rs
use crate::config::app::{AttackSettings, LoggingSettings};
use crate::consts::{DEFAULT_ITERATIONS, DEFAULT_KNOWN_WEIGHT, DEFAULT_RESTARTS};

pub const DEFAULT_LOG_FILTER: &str = "info";

pub fn default_attack() -> AttackSettings {
    AttackSettings {
        iterations: DEFAULT_ITERATIONS,
        restarts: DEFAULT_RESTARTS,
        known_weight: DEFAULT_KNOWN_WEIGHT,
        seed: None,
    }
}

pub fn default_logging() -> LoggingSettings {
    LoggingSettings {
        filter: DEFAULT_LOG_FILTER.into(),
    }
}
