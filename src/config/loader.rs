// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::Result;

/// Load a configuration file from a given path and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation (host references, reserved variables, etc.). Use
/// [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and run semantic validation.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks for:
///   - presence of at least one `[tool.<name>]` and `[host.<name>]`,
///   - unknown host references (`default_host`, `default_tool`, `tool.hosts`),
///   - empty interpreter / script fields,
///   - invalid or reserved environment variable names.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw_config = load_from_path(&path)?;
    let config = ConfigFile::try_from(raw_config)?;
    Ok(config)
}

/// Helper to resolve a default config path.
///
/// Currently this just returns `Dcclaunch.toml` in the current working
/// directory, but this function exists so you can later:
///
/// - Respect an env var (e.g. `DCCLAUNCH_CONFIG`).
/// - Look for multiple default locations.
/// - Support project-local config discovery.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Dcclaunch.toml")
}
