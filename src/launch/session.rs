// src/launch/session.rs

use std::fmt;

use tracing::{debug, info};

use crate::console::{Console, CrashReport};
use crate::errors::Result;
use crate::exec::LaunchBackend;
use crate::types::PauseBehaviour;

use super::plan::LaunchPlan;
use super::policy::post_launch;

/// Drives one launch end to end: spawn the tool process via a
/// [`LaunchBackend`], wait for it, and apply the post-launch policy via a
/// [`Console`].
///
/// This is a thin IO shell around [`post_launch`]; both the backend and
/// the console are injected so tests can run a whole session without real
/// processes or a real terminal.
pub struct Session<B: LaunchBackend, C: Console> {
    backend: B,
    console: C,
    pause: PauseBehaviour,
}

impl<B: LaunchBackend, C: Console> fmt::Debug for Session<B, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("pause", &self.pause)
            .finish_non_exhaustive()
    }
}

impl<B: LaunchBackend, C: Console> Session<B, C> {
    pub fn new(backend: B, console: C, pause: PauseBehaviour) -> Self {
        Self {
            backend,
            console,
            pause,
        }
    }

    /// Run the plan and return the exit code the launcher should report.
    ///
    /// - Exit 0 from the tool is silent and maps to exit 0 here.
    /// - A non-zero exit prints the crash banner and, unless the pause
    ///   behaviour says otherwise, blocks on operator acknowledgment before
    ///   the terminal is allowed to close.
    pub async fn run(mut self, plan: LaunchPlan) -> Result<i32> {
        info!(
            tool = %plan.tool,
            host = %plan.host,
            interpreter = %plan.interpreter,
            script = %plan.script_path,
            "launching tool"
        );

        let outcome = self.backend.launch(plan.clone()).await?;

        let actions = post_launch(outcome, self.pause);
        debug!(?outcome, ?actions, "post-launch decisions");

        if actions.show_banner {
            self.console
                .show_crash_banner(&CrashReport::new(&plan, actions.exit_code));
        }

        if actions.pause {
            self.console.wait_for_ack().await?;
        }

        Ok(actions.exit_code)
    }
}
