// src/launch/policy.rs

//! Pure post-launch decisions.
//!
//! Given how the tool process ended and the configured pause behaviour,
//! decide whether to show the crash banner, whether to hold the terminal
//! open, and which exit code the launcher itself reports. The session
//! applies these decisions; nothing here does IO.

use crate::launch::LaunchOutcome;
use crate::types::PauseBehaviour;

/// What the session does after the tool process exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostLaunch {
    /// Print the crash banner before anything else.
    pub show_banner: bool,

    /// Block on operator acknowledgment before returning.
    pub pause: bool,

    /// Exit code the launcher reports to its own parent.
    pub exit_code: i32,
}

/// Map an outcome to the actions the session takes.
///
/// - Success is silent: no banner, exit 0, and the terminal is held open
///   only under [`PauseBehaviour::Always`].
/// - Failure always gets the banner, propagates the child's exit code
///   unchanged, and pauses unless [`PauseBehaviour::Never`] disables it.
pub fn post_launch(outcome: LaunchOutcome, pause: PauseBehaviour) -> PostLaunch {
    match outcome {
        LaunchOutcome::Success => PostLaunch {
            show_banner: false,
            pause: matches!(pause, PauseBehaviour::Always),
            exit_code: 0,
        },
        LaunchOutcome::Failed(code) => PostLaunch {
            show_banner: true,
            pause: !matches!(pause, PauseBehaviour::Never),
            exit_code: code,
        },
    }
}
