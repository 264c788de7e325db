// src/exec/mod.rs

//! Process execution layer.
//!
//! This module is responsible for actually spawning the tool process with
//! `tokio::process::Command`, waiting for it, and reporting how it ended.
//!
//! - [`backend`] provides the `LaunchBackend` trait and the concrete
//!   `RealLaunchBackend` the session uses in production, and which tests
//!   can replace with a fake implementation.
//! - [`child`] owns the actual spawn-and-wait for one tool process.

pub mod backend;
pub mod child;

pub use backend::{LaunchBackend, RealLaunchBackend};
pub use child::run_tool;
