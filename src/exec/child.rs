// src/exec/child.rs

//! Single tool process spawn-and-wait.

use std::process::Stdio;

use anyhow::Context;
use tokio::process::Command;
use tracing::{debug, info};

use crate::errors::Result;
use crate::launch::{LaunchOutcome, LaunchPlan};

/// Spawn the planned tool process and wait for it to exit.
///
/// The child inherits the launcher's stdin/stdout/stderr, so the tool owns
/// the terminal while it runs, and inherits the launcher's environment with
/// the plan's assignments applied on top. A signal death without an exit
/// code is reported as `Failed(-1)`.
pub async fn run_tool(plan: LaunchPlan) -> Result<LaunchOutcome> {
    info!(
        tool = %plan.tool,
        interpreter = %plan.interpreter,
        script = %plan.script_path,
        "starting tool process"
    );
    debug!(env = ?plan.env, "environment assignments");

    let mut cmd = Command::new(&plan.interpreter);
    cmd.args(&plan.interpreter_args)
        .arg(&plan.script_path)
        .envs(plan.env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .kill_on_drop(true);

    let mut child = cmd.spawn().with_context(|| {
        format!(
            "spawning interpreter '{}' for tool '{}'",
            plan.interpreter, plan.tool
        )
    })?;

    let status = child
        .wait()
        .await
        .with_context(|| format!("waiting for tool '{}'", plan.tool))?;

    let code = status.code().unwrap_or(-1);
    info!(
        tool = %plan.tool,
        exit_code = code,
        success = status.success(),
        "tool process exited"
    );

    if status.success() {
        Ok(LaunchOutcome::Success)
    } else {
        Ok(LaunchOutcome::Failed(code))
    }
}
