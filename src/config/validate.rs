// src/config/validate.rs

use std::collections::BTreeMap;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::env;
use crate::errors::{DcclaunchError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::DcclaunchError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(
            raw.config,
            raw.context,
            raw.host,
            raw.tool,
        ))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    ensure_has_tools(cfg)?;
    ensure_has_hosts(cfg)?;
    validate_global_config(cfg)?;
    validate_context(cfg)?;
    validate_hosts(cfg)?;
    validate_tools(cfg)?;
    Ok(())
}

fn ensure_has_tools(cfg: &RawConfigFile) -> Result<()> {
    if cfg.tool.is_empty() {
        return Err(DcclaunchError::ConfigError(
            "config must contain at least one [tool.<name>] section".to_string(),
        ));
    }
    Ok(())
}

fn ensure_has_hosts(cfg: &RawConfigFile) -> Result<()> {
    if cfg.host.is_empty() {
        return Err(DcclaunchError::ConfigError(
            "config must contain at least one [host.<name>] section".to_string(),
        ));
    }
    Ok(())
}

fn validate_global_config(cfg: &RawConfigFile) -> Result<()> {
    // `pause` is strongly typed and validated during deserialization, so
    // only the host/tool references need checking here.

    if !cfg.host.contains_key(&cfg.config.default_host) {
        return Err(DcclaunchError::ConfigError(format!(
            "[config].default_host '{}' has no [host.{}] section",
            cfg.config.default_host, cfg.config.default_host
        )));
    }

    if let Some(ref tool) = cfg.config.default_tool {
        if !cfg.tool.contains_key(tool) {
            return Err(DcclaunchError::ConfigError(format!(
                "[config].default_tool '{}' has no [tool.{}] section",
                tool, tool
            )));
        }
    }

    Ok(())
}

fn validate_context(cfg: &RawConfigFile) -> Result<()> {
    let fields = [
        ("project", &cfg.context.project),
        ("user", &cfg.context.user),
        ("task", &cfg.context.task),
    ];

    for (field, value) in fields {
        if let Some(v) = value {
            if v.trim().is_empty() {
                return Err(DcclaunchError::ConfigError(format!(
                    "[context].{} must be a non-empty string when set",
                    field
                )));
            }
        }
    }

    Ok(())
}

fn validate_hosts(cfg: &RawConfigFile) -> Result<()> {
    for (name, host) in cfg.host.iter() {
        if host.interpreter.trim().is_empty() {
            return Err(DcclaunchError::ConfigError(format!(
                "host '{}' has an empty `interpreter`",
                name
            )));
        }

        validate_env_table(&host.env, &format!("host '{}'", name))?;
    }
    Ok(())
}

fn validate_tools(cfg: &RawConfigFile) -> Result<()> {
    for (name, tool) in cfg.tool.iter() {
        if tool.script_dir.is_empty() {
            return Err(DcclaunchError::ConfigError(format!(
                "tool '{}' has an empty `script_dir`",
                name
            )));
        }
        if tool.script.is_empty() {
            return Err(DcclaunchError::ConfigError(format!(
                "tool '{}' has an empty `script`",
                name
            )));
        }

        for host in tool.hosts.iter() {
            if !cfg.host.contains_key(host) {
                return Err(DcclaunchError::ConfigError(format!(
                    "tool '{}' lists unknown host '{}' in `hosts`",
                    name, host
                )));
            }
        }

        let scope = format!("tool '{}'", name);
        validate_env_table(&tool.env, &scope)?;
        validate_prepend_table(&tool.prepend, &scope)?;
    }
    Ok(())
}

/// Check variable names in an `env` table: they must be portable names,
/// must not be launcher-reserved, and must not set the search path
/// directly (prepending is the supported way to extend it).
fn validate_env_table(table: &BTreeMap<String, String>, scope: &str) -> Result<()> {
    for name in table.keys() {
        check_var_name(name, scope)?;

        if name == env::SEARCH_PATH_VAR {
            return Err(DcclaunchError::ConfigError(format!(
                "{} assigns `{}` in its env table; use `prepend.{}` or `extend_search_path` instead",
                scope,
                env::SEARCH_PATH_VAR,
                env::SEARCH_PATH_VAR
            )));
        }
    }
    Ok(())
}

fn validate_prepend_table(table: &BTreeMap<String, Vec<String>>, scope: &str) -> Result<()> {
    for (name, entries) in table.iter() {
        check_var_name(name, scope)?;

        if entries.iter().any(|e| e.is_empty()) {
            return Err(DcclaunchError::ConfigError(format!(
                "{} has an empty entry in `prepend.{}`",
                scope, name
            )));
        }
    }
    Ok(())
}

fn check_var_name(name: &str, scope: &str) -> Result<()> {
    if !env::is_valid_var_name(name) {
        return Err(DcclaunchError::ConfigError(format!(
            "{} uses invalid environment variable name '{}'",
            scope, name
        )));
    }

    if env::is_reserved_var(name) {
        return Err(DcclaunchError::ConfigError(format!(
            "{} assigns reserved variable '{}'; set it via [context] or the CLI instead",
            scope, name
        )));
    }

    Ok(())
}
