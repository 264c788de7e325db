// src/launch/mod.rs

//! Launch orchestration, split into a pure core and a small IO shell.
//!
//! - [`plan`] resolves config + CLI overrides + parent environment into a
//!   [`LaunchPlan`]: the exact command line and environment for the tool
//!   process. Pure, no IO.
//! - [`policy`] decides what happens after the tool exits (banner, pause,
//!   launcher exit code). Pure, no IO.
//! - [`session`] drives one launch end to end against a [`LaunchBackend`]
//!   and a [`Console`]. This is the only part that does IO, and both seams
//!   are swappable in tests.
//!
//! [`LaunchBackend`]: crate::exec::LaunchBackend
//! [`Console`]: crate::console::Console

pub mod plan;
pub mod policy;
pub mod session;

pub use plan::{build_launch_plan, render_dry_run, LaunchOverrides, LaunchPlan};
pub use policy::{post_launch, PostLaunch};
pub use session::Session;

/// How the tool process ended, as seen by the exit policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// The process exited with code 0.
    Success,
    /// The process exited with the given non-zero code (or was killed by a
    /// signal, reported as -1).
    Failed(i32),
}
