// src/lib.rs

pub mod cli;
pub mod config;
pub mod console;
pub mod env;
pub mod errors;
pub mod exec;
pub mod launch;
pub mod logging;
pub mod types;

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;
use tracing::debug;

use crate::cli::CliArgs;
use crate::config::load_and_validate;
use crate::console::RealConsole;
use crate::exec::RealLaunchBackend;
use crate::launch::{build_launch_plan, render_dry_run, LaunchOverrides, Session};
use crate::types::PauseBehaviour;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - launch plan resolution (tool/host selection, identity, environment)
/// - the launch session (spawn, wait, post-launch policy)
///
/// Returns the exit code the launcher should report to its own parent.
pub async fn run(args: CliArgs) -> Result<i32> {
    let config_path = PathBuf::from(&args.config);
    let cfg = load_and_validate(&config_path)?;

    let overrides = LaunchOverrides {
        tool: args.tool.clone(),
        host: args.host.clone(),
        project: args.project.clone(),
        user: args.user.clone(),
        task: args.task.clone(),
    };

    let parent = parent_env();
    let plan = build_launch_plan(&cfg, &overrides, &parent)?;

    if args.dry_run {
        print!("{}", render_dry_run(&plan));
        debug!("dry-run complete (no process spawned)");
        return Ok(0);
    }

    // --no-pause wins over the configured behaviour.
    let pause = if args.no_pause {
        PauseBehaviour::Never
    } else {
        cfg.config.pause
    };

    let session = Session::new(RealLaunchBackend::new(), RealConsole::new(), pause);
    Ok(session.run(plan).await?)
}

/// Snapshot of the launcher's own environment.
///
/// Variables with non-UTF-8 names or values are skipped here; the child
/// still inherits them at spawn time, they just aren't available to
/// `${VAR}` expansion or path prepending.
fn parent_env() -> BTreeMap<String, String> {
    std::env::vars_os()
        .filter_map(|(name, value)| Some((name.into_string().ok()?, value.into_string().ok()?)))
        .collect()
}
