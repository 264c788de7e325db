// src/env/mod.rs

//! Environment composition for launched tools.
//!
//! The launcher owns a small set of identity variables (the `HAL_*` family)
//! that the downstream scripts read, plus the module-search-path extension
//! that lets a tool's entry script import its sibling modules. Everything
//! here is pure: the parent environment is passed in as a snapshot, and the
//! result is an ordered list of assignments applied on top of the inherited
//! environment at spawn time.
//!
//! - [`expand`] handles `{root}` / `${VAR}` template expansion.
//! - [`path`] handles path-list prepending with the platform separator.
//! - [`compose_tool_env`] merges host env, tool env, identity values and
//!   prepends into the final assignment list.

use std::collections::BTreeMap;

use crate::config::model::{HostConfig, ToolConfig};
use crate::errors::Result;

pub mod expand;
pub mod path;

pub use expand::expand;
pub use path::{path_list_separator, prepend_entries};

/// Project identifier exported to the tool.
pub const PROJECT_VAR: &str = "HAL_PROJECT";
/// User login exported to the tool.
pub const USER_LOGIN_VAR: &str = "HAL_USER_LOGIN";
/// Task identifier exported to the tool.
pub const TASK_VAR: &str = "HAL_TASK";
/// Host-mode label exported to the tool (e.g. "standalone", "maya").
pub const HOST_MODE_VAR: &str = "HAL_HOST_MODE";
/// Interpreter executable actually launched.
pub const INTERPRETER_VAR: &str = "HAL_INTERPRETER";
/// Directory part of the launched script path.
pub const SCRIPT_DIR_VAR: &str = "HAL_SCRIPT_DIR";
/// Filename part of the launched script path.
pub const SCRIPT_NAME_VAR: &str = "HAL_SCRIPT_NAME";

/// Module search path extended with the tool's `script_dir`.
pub const SEARCH_PATH_VAR: &str = "PYTHONPATH";

/// Variables owned by the launcher. Config `env` / `prepend` tables may not
/// assign these; the `[context]` section and CLI overrides are the single
/// source of truth for them.
pub const RESERVED_VARS: &[&str] = &[
    PROJECT_VAR,
    USER_LOGIN_VAR,
    TASK_VAR,
    HOST_MODE_VAR,
    INTERPRETER_VAR,
    SCRIPT_DIR_VAR,
    SCRIPT_NAME_VAR,
];

/// Fallback user login when neither config, CLI, `USERNAME` nor `USER`
/// provide one. Matches the downstream scripts' own fallback.
pub const UNKNOWN_USER: &str = "unknown";

/// Check a variable name against the portable `[A-Za-z_][A-Za-z0-9_]*`
/// form accepted by both Windows and POSIX environments.
pub fn is_valid_var_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Whether the launcher reserves this variable for itself.
pub fn is_reserved_var(name: &str) -> bool {
    RESERVED_VARS.contains(&name)
}

/// Compose the ordered environment assignments for one launch.
///
/// Layering, first to last (later layers win on the same name):
///
/// 1. host `env` (sorted by name), then tool `env` (sorted by name), values
///    expanded;
/// 2. the resolved identity assignments passed in by the plan builder;
/// 3. path prepends: `PYTHONPATH` gets `script_dir` first (when
///    `extend_search_path`), then any explicit `prepend.PYTHONPATH`
///    entries, then the pre-existing value; other `prepend` variables get
///    their entries followed by the pre-existing value. "Pre-existing"
///    means the `env`-table assignment from layers 1-2 when there is one,
///    otherwise the parent-environment value.
///
/// The output preserves first-assignment order with later writes updating
/// in place, so the list is deterministic for a given config + parent
/// snapshot.
pub fn compose_tool_env(
    tool: &ToolConfig,
    host: &HostConfig,
    identity: &[(String, String)],
    parent: &BTreeMap<String, String>,
) -> Result<Vec<(String, String)>> {
    let root = tool.script_dir.as_str();

    let mut assignments: Vec<(String, String)> = Vec::new();
    // Overlay of everything assigned so far; prepends consult this before
    // falling back to the parent environment.
    let mut overlay: BTreeMap<String, String> = BTreeMap::new();

    for (name, value) in host.env.iter().chain(tool.env.iter()) {
        let expanded = expand(value, root, parent)?;
        upsert(&mut assignments, name, expanded.clone());
        overlay.insert(name.clone(), expanded);
    }

    for (name, value) in identity {
        upsert(&mut assignments, name, value.clone());
        overlay.insert(name.clone(), value.clone());
    }

    for (var, raw_entries) in collect_prepends(tool) {
        let mut entries = Vec::with_capacity(raw_entries.len());
        for raw in &raw_entries {
            entries.push(expand(raw, root, parent)?);
        }

        let existing = overlay
            .get(&var)
            .cloned()
            .or_else(|| parent.get(&var).cloned());
        let value = prepend_entries(existing.as_deref(), &entries);

        upsert(&mut assignments, &var, value.clone());
        overlay.insert(var, value);
    }

    Ok(assignments)
}

/// Gather the effective prepend lists for a tool: the implicit search-path
/// extension first, then the explicit `[tool.<name>.prepend]` table, with
/// entries for the same variable merged in order.
fn collect_prepends(tool: &ToolConfig) -> Vec<(String, Vec<String>)> {
    let mut prepends: Vec<(String, Vec<String>)> = Vec::new();

    if tool.extend_search_path {
        prepends.push((SEARCH_PATH_VAR.to_string(), vec![tool.script_dir.clone()]));
    }

    for (var, entries) in tool.prepend.iter() {
        if let Some((_, existing)) = prepends.iter_mut().find(|(v, _)| v == var) {
            existing.extend(entries.iter().cloned());
        } else {
            prepends.push((var.clone(), entries.clone()));
        }
    }

    prepends
}

fn upsert(list: &mut Vec<(String, String)>, name: &str, value: String) {
    if let Some(slot) = list.iter_mut().find(|(n, _)| n == name) {
        slot.1 = value;
    } else {
        list.push((name.to_string(), value));
    }
}
