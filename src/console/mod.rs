// src/console/mod.rs

//! Operator-facing console interaction.
//!
//! The session reports failures and blocks for acknowledgment through a
//! `Console` seam instead of talking to the terminal directly, so tests
//! can assert on what an operator would have seen. Everything here writes
//! to stderr; stdout stays reserved for the launched tool.

use std::fmt::Debug;
use std::future::Future;
use std::pin::Pin;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::launch::LaunchPlan;

pub mod mock;

/// Details shown when a tool process exits non-zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrashReport {
    pub tool: String,
    pub host: String,
    pub script_path: String,
    pub exit_code: i32,
}

impl CrashReport {
    pub fn new(plan: &LaunchPlan, exit_code: i32) -> Self {
        Self {
            tool: plan.tool.clone(),
            host: plan.host.clone(),
            script_path: plan.script_path.clone(),
            exit_code,
        }
    }
}

/// Abstract operator console.
pub trait Console: Send + Sync + Debug {
    /// Show the failure banner for a crashed tool.
    fn show_crash_banner(&self, report: &CrashReport);

    /// Block until the operator acknowledges with Enter on stdin.
    ///
    /// EOF counts as acknowledgment so non-interactive runs don't hang.
    fn wait_for_ack(&self) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>>;
}

/// Implementation that talks to the real terminal: banner on stderr,
/// acknowledgment from stdin.
#[derive(Debug, Clone, Default)]
pub struct RealConsole;

impl RealConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for RealConsole {
    fn show_crash_banner(&self, report: &CrashReport) {
        let line = "=".repeat(72);
        eprintln!("{line}");
        eprintln!(
            " dcclaunch: tool '{}' exited with code {}",
            report.tool, report.exit_code
        );
        eprintln!("   host:   {}", report.host);
        eprintln!("   script: {}", report.script_path);
        eprintln!(" Review the output above for the error.");
        eprintln!("{line}");
    }

    fn wait_for_ack(&self) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        Box::pin(async {
            eprint!("Press Enter to close... ");
            let mut line = String::new();
            let mut reader = BufReader::new(tokio::io::stdin());
            reader
                .read_line(&mut line)
                .await
                .context("reading acknowledgment from stdin")?;
            Ok(())
        })
    }
}
