// src/console/mock.rs

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use anyhow::Result;

use super::{Console, CrashReport};

/// Console that records banners and acknowledgments instead of touching
/// the terminal.
#[derive(Debug, Clone, Default)]
pub struct MockConsole {
    banners: Arc<Mutex<Vec<CrashReport>>>,
    acks: Arc<Mutex<usize>>,
}

impl MockConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Banners shown so far, in order.
    pub fn banners(&self) -> Vec<CrashReport> {
        self.banners.lock().unwrap().clone()
    }

    /// How many times the session blocked on acknowledgment.
    pub fn ack_count(&self) -> usize {
        *self.acks.lock().unwrap()
    }
}

impl Console for MockConsole {
    fn show_crash_banner(&self, report: &CrashReport) {
        self.banners.lock().unwrap().push(report.clone());
    }

    fn wait_for_ack(&self) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        let acks = Arc::clone(&self.acks);
        Box::pin(async move {
            *acks.lock().unwrap() += 1;
            Ok(())
        })
    }
}
