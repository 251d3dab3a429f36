// src/config/mod.rs
//! Configuration system for dual-cipher
//!
//! Central, lazy-loaded global config with TOML + env override of the path.

pub use app::{load, load_from, AttackSettings, Config, LoggingSettings};

mod app;
mod defaults;
