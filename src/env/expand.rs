// src/env/expand.rs

//! Template expansion for config values.
//!
//! Two forms are supported, mirroring the rez-style package commands the
//! original pipeline used:
//!
//! - `{root}`: the tool's `script_dir`, so a tool can reference its own
//!   install location (`prepend.SHOTGUN_LIBRARY_PATH = ["{root}"]`).
//! - `${NAME}`: a variable from the launcher's own environment. Expanding
//!   an unset variable is an error; a silently-empty path entry is much
//!   harder to debug than a failed launch.

use std::collections::BTreeMap;

use regex::Regex;

use crate::errors::{DcclaunchError, Result};

const VAR_PATTERN: &str = r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}";

/// Expand `{root}` and `${NAME}` references in a config value.
pub fn expand(value: &str, root: &str, parent: &BTreeMap<String, String>) -> Result<String> {
    let with_root = value.replace("{root}", root);

    if !with_root.contains("${") {
        return Ok(with_root);
    }

    let re = Regex::new(VAR_PATTERN).map_err(|e| {
        DcclaunchError::EnvError(format!("variable reference pattern failed to compile: {e}"))
    })?;

    let mut out = String::with_capacity(with_root.len());
    let mut last = 0;

    for caps in re.captures_iter(&with_root) {
        let Some(whole) = caps.get(0) else { continue };
        let name = &caps[1];

        let resolved = parent.get(name).ok_or_else(|| {
            DcclaunchError::EnvError(format!(
                "undefined variable '${{{name}}}' referenced by '{value}'"
            ))
        })?;

        out.push_str(&with_root[last..whole.start()]);
        out.push_str(resolved);
        last = whole.end();
    }

    out.push_str(&with_root[last..]);
    Ok(out)
}
