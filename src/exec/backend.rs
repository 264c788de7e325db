// src/exec/backend.rs

//! Pluggable launch backend abstraction.
//!
//! The session talks to a `LaunchBackend` instead of spawning processes
//! directly. This makes it easy to swap in a fake backend in tests while
//! keeping the production spawn in [`child`].
//!
//! - `RealLaunchBackend` is the default implementation used by `dcclaunch`.
//!   It hands the plan to [`child::run_tool`].
//! - Tests can provide their own `LaunchBackend` that, for example, records
//!   the plans it was given and returns a scripted outcome.
//!
//! [`child`]: super::child
//! [`child::run_tool`]: super::child::run_tool

use std::future::Future;
use std::pin::Pin;

use crate::errors::Result;
use crate::launch::{LaunchOutcome, LaunchPlan};

use super::child::run_tool;

/// Trait abstracting how a launch plan becomes a running process.
///
/// Production code uses [`RealLaunchBackend`]; tests can provide their own
/// implementation that doesn't spawn real processes.
pub trait LaunchBackend: Send {
    /// Run the planned tool process to completion.
    ///
    /// The implementation is free to:
    /// - spawn an OS process and wait for it (production)
    /// - record the plan and return a scripted [`LaunchOutcome`] (tests)
    fn launch(
        &mut self,
        plan: LaunchPlan,
    ) -> Pin<Box<dyn Future<Output = Result<LaunchOutcome>> + Send + '_>>;
}

/// Real launch backend used in production.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealLaunchBackend;

impl RealLaunchBackend {
    pub fn new() -> Self {
        Self
    }
}

impl LaunchBackend for RealLaunchBackend {
    fn launch(
        &mut self,
        plan: LaunchPlan,
    ) -> Pin<Box<dyn Future<Output = Result<LaunchOutcome>> + Send + '_>> {
        Box::pin(async move { run_tool(plan).await })
    }
}
