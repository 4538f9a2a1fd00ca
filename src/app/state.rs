use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

/// Why the render loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Quit,
    Interrupted,
}

#[derive(Debug)]
struct Inner {
    running: AtomicBool,
    interrupted: AtomicBool,
    wake: Notify,
}

/// Shared run/stop flag for the render loop.
///
/// Cloning hands out another handle to the same flag. Stopping wakes the loop
/// if it is sleeping between frames.
#[derive(Debug, Clone)]
pub struct LoopControl {
    inner: Arc<Inner>,
}

impl Default for LoopControl {
    fn default() -> Self {
        Self::new()
    }
}

impl LoopControl {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                running: AtomicBool::new(true),
                interrupted: AtomicBool::new(false),
                wake: Notify::new(),
            }),
        }
    }

    pub fn is_running(&self) -> bool {
        self.inner.running.load(Ordering::Acquire)
    }

    pub fn request_quit(&self) {
        self.inner.running.store(false, Ordering::Release);
        // notify_one keeps a permit when nobody is waiting yet
        self.inner.wake.notify_one();
    }

    pub fn interrupt(&self) {
        self.inner.interrupted.store(true, Ordering::Release);
        self.request_quit();
    }

    pub fn stop_reason(&self) -> Option<StopReason> {
        if self.is_running() {
            None
        } else if self.inner.interrupted.load(Ordering::Acquire) {
            Some(StopReason::Interrupted)
        } else {
            Some(StopReason::Quit)
        }
    }

    /// Resolves once a stop has been requested.
    pub async fn stopped(&self) {
        while self.is_running() {
            self.inner.wake.notified().await;
        }
    }
}
