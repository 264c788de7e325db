// src/config/mod.rs

//! Configuration loading and validation for dcclaunch.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate semantic invariants like host references and reserved
//!   environment variables (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path};
pub use model::{
    ConfigFile, ConfigSection, ContextSection, HostConfig, RawConfigFile, ToolConfig,
};
