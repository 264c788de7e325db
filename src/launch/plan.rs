// src/launch/plan.rs

//! Resolve config, CLI overrides and the parent environment into a
//! [`LaunchPlan`].
//!
//! Everything in this module is pure: the parent environment comes in as a
//! snapshot, and the plan describes exactly what the backend will spawn.
//! This keeps tool/host selection, identity resolution and template
//! expansion unit-testable without touching the real process environment.

use std::collections::BTreeMap;

use crate::config::{ConfigFile, HostConfig, ToolConfig};
use crate::env;
use crate::errors::{DcclaunchError, Result};

/// Fully resolved description of one launch.
///
/// The backend runs `interpreter interpreter_args... script_path` with
/// `env` applied on top of the inherited environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    /// Tool name, as configured under `[tool.<name>]`.
    pub tool: String,

    /// Host profile name, as configured under `[host.<name>]`.
    pub host: String,

    /// Interpreter executable, after `${VAR}` / `{root}` expansion.
    pub interpreter: String,

    /// Extra interpreter arguments inserted before the script path.
    pub interpreter_args: Vec<String>,

    /// Verbatim `script_dir + script` concatenation.
    pub script_path: String,

    /// Ordered environment assignments applied on top of the inherited
    /// environment.
    pub env: Vec<(String, String)>,
}

/// CLI-level overrides fed into [`build_launch_plan`].
///
/// `None` means "not given on the command line"; the config (and for
/// `user`, the parent environment) supplies the value instead.
#[derive(Debug, Clone, Default)]
pub struct LaunchOverrides {
    pub tool: Option<String>,
    pub host: Option<String>,
    pub project: Option<String>,
    pub user: Option<String>,
    pub task: Option<String>,
}

/// Build the launch plan for one invocation.
///
/// Selection and resolution rules:
///
/// - tool: `--tool` if given, else `config.default_tool`, else the sole
///   configured tool; anything else is an error listing the known tools.
/// - host: `--host` if given, else `config.default_host`; the tool's
///   `hosts` allowlist is enforced after selection.
/// - `project` / `task`: CLI over `[context]`, required.
/// - `user`: CLI over `[context]`, then the `USERNAME` / `USER` parent
///   variables, finally `"unknown"`.
pub fn build_launch_plan(
    cfg: &ConfigFile,
    overrides: &LaunchOverrides,
    parent: &BTreeMap<String, String>,
) -> Result<LaunchPlan> {
    let (tool_name, tool) = select_tool(cfg, overrides.tool.as_deref())?;
    let (host_name, host) = select_host(cfg, tool_name, tool, overrides.host.as_deref())?;

    let project = resolve_required(
        "project",
        overrides.project.as_deref(),
        cfg.context.project.as_deref(),
    )?;
    let task = resolve_required(
        "task",
        overrides.task.as_deref(),
        cfg.context.task.as_deref(),
    )?;
    let user = resolve_user(overrides.user.as_deref(), cfg.context.user.as_deref(), parent);

    let interpreter = env::expand(&host.interpreter, &tool.script_dir, parent)?;
    let script_path = tool.script_path();

    // Assignment order is part of the contract: identity values land in the
    // child environment in this sequence, before any prepends touch them.
    let identity = vec![
        (env::PROJECT_VAR.to_string(), project),
        (env::USER_LOGIN_VAR.to_string(), user),
        (env::TASK_VAR.to_string(), task),
        (env::HOST_MODE_VAR.to_string(), host_name.clone()),
        (env::INTERPRETER_VAR.to_string(), interpreter.clone()),
        (env::SCRIPT_DIR_VAR.to_string(), tool.script_dir.clone()),
        (env::SCRIPT_NAME_VAR.to_string(), tool.script.clone()),
    ];

    let env = env::compose_tool_env(tool, host, &identity, parent)?;

    Ok(LaunchPlan {
        tool: tool_name.to_string(),
        host: host_name,
        interpreter,
        interpreter_args: host.args.clone(),
        script_path,
        env,
    })
}

/// Render a plan the way `--dry-run` prints it: the command line followed
/// by the environment assignments, in application order.
pub fn render_dry_run(plan: &LaunchPlan) -> String {
    let mut out = String::new();

    out.push_str("launch plan\n");
    out.push_str(&format!("  tool: {}\n", plan.tool));
    out.push_str(&format!("  host: {}\n", plan.host));

    let mut command = plan.interpreter.clone();
    for arg in &plan.interpreter_args {
        command.push(' ');
        command.push_str(arg);
    }
    command.push(' ');
    command.push_str(&plan.script_path);
    out.push_str(&format!("  command: {}\n", command));

    out.push_str("  env:\n");
    for (name, value) in &plan.env {
        out.push_str(&format!("    {}={}\n", name, value));
    }

    out
}

fn select_tool<'a>(
    cfg: &'a ConfigFile,
    requested: Option<&str>,
) -> Result<(&'a str, &'a ToolConfig)> {
    if let Some(name) = requested {
        return lookup_tool(cfg, name);
    }

    if let Some(name) = cfg.config.default_tool.as_deref() {
        return lookup_tool(cfg, name);
    }

    if cfg.tool.len() == 1 {
        if let Some((name, tool)) = cfg.tool.iter().next() {
            return Ok((name.as_str(), tool));
        }
    }

    Err(DcclaunchError::ConfigError(format!(
        "no tool selected; pass --tool or set config.default_tool (known tools: {})",
        known_names(cfg.tool.keys())
    )))
}

fn lookup_tool<'a>(cfg: &'a ConfigFile, name: &str) -> Result<(&'a str, &'a ToolConfig)> {
    cfg.tool
        .get_key_value(name)
        .map(|(n, t)| (n.as_str(), t))
        .ok_or_else(|| {
            DcclaunchError::ToolNotFound(format!(
                "'{}' (known tools: {})",
                name,
                known_names(cfg.tool.keys())
            ))
        })
}

fn select_host<'a>(
    cfg: &'a ConfigFile,
    tool_name: &str,
    tool: &ToolConfig,
    requested: Option<&str>,
) -> Result<(String, &'a HostConfig)> {
    let name = requested.unwrap_or(cfg.config.default_host.as_str());

    let host = cfg.host.get(name).ok_or_else(|| {
        DcclaunchError::HostNotFound(format!(
            "'{}' (known hosts: {})",
            name,
            known_names(cfg.host.keys())
        ))
    })?;

    if !tool.allows_host(name) {
        return Err(DcclaunchError::ConfigError(format!(
            "tool '{}' does not run under host '{}' (allowed: {})",
            tool_name,
            name,
            known_names(tool.hosts.iter())
        )));
    }

    Ok((name.to_string(), host))
}

/// CLI over config; missing or blank values are an error naming the fix.
fn resolve_required(field: &str, cli: Option<&str>, config: Option<&str>) -> Result<String> {
    match cli.or(config) {
        Some(value) if !value.trim().is_empty() => Ok(value.to_string()),
        _ => Err(DcclaunchError::ConfigError(format!(
            "no {field} set; add [context].{field} to the config or pass --{field}"
        ))),
    }
}

/// CLI over config, then `USERNAME` / `USER` from the parent environment,
/// finally the shared `"unknown"` fallback.
fn resolve_user(
    cli: Option<&str>,
    config: Option<&str>,
    parent: &BTreeMap<String, String>,
) -> String {
    if let Some(value) = cli.or(config) {
        if !value.trim().is_empty() {
            return value.to_string();
        }
    }

    for var in ["USERNAME", "USER"] {
        if let Some(value) = parent.get(var) {
            if !value.is_empty() {
                return value.clone();
            }
        }
    }

    env::UNKNOWN_USER.to_string()
}

fn known_names<'a, I>(names: I) -> String
where
    I: Iterator<Item = &'a String>,
{
    let list: Vec<&str> = names.map(|n| n.as_str()).collect();
    if list.is_empty() {
        "none".to_string()
    } else {
        list.join(", ")
    }
}
