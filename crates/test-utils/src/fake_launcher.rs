use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use dcclaunch::errors::Result;
use dcclaunch::exec::LaunchBackend;
use dcclaunch::launch::{LaunchOutcome, LaunchPlan};

/// A fake launch backend that:
/// - records the plans it was asked to run
/// - returns a scripted outcome instead of spawning a process
/// - can instead fail outright, as spawning a missing interpreter would.
pub struct FakeLauncher {
    outcome: LaunchOutcome,
    spawn_error: Option<String>,
    launched: Arc<Mutex<Vec<LaunchPlan>>>,
}

impl FakeLauncher {
    pub fn new(outcome: LaunchOutcome, launched: Arc<Mutex<Vec<LaunchPlan>>>) -> Self {
        Self {
            outcome,
            spawn_error: None,
            launched,
        }
    }

    /// A backend that errors before anything runs. Nothing is recorded as
    /// launched.
    pub fn failing(message: &str) -> Self {
        Self {
            outcome: LaunchOutcome::Success,
            spawn_error: Some(message.to_string()),
            launched: Arc::default(),
        }
    }
}

impl LaunchBackend for FakeLauncher {
    fn launch(
        &mut self,
        plan: LaunchPlan,
    ) -> Pin<Box<dyn Future<Output = Result<LaunchOutcome>> + Send + '_>> {
        let outcome = self.outcome;
        let spawn_error = self.spawn_error.clone();
        let launched = Arc::clone(&self.launched);

        Box::pin(async move {
            if let Some(message) = spawn_error {
                return Err(anyhow::Error::msg(message).into());
            }
            launched.lock().unwrap().push(plan);
            Ok(outcome)
        })
    }
}
