//! Interval Polling
//!
//! Fixed-interval refresh built on `TimeoutFuture`. The handle's flag
//! is atomic so cleanup closures can carry it across the reactive
//! system's thread-safety bounds.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;

#[derive(Clone)]
pub struct PollHandle {
    cancelled: Arc<AtomicBool>,
}

impl PollHandle {
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Run `tick` every `interval_ms` until the handle is cancelled. The
/// first tick fires after one full interval; callers do their own
/// initial load.
pub fn start(interval_ms: u32, tick: impl Fn() + 'static) -> PollHandle {
    let handle = PollHandle {
        cancelled: Arc::new(AtomicBool::new(false)),
    };
    let flag = handle.clone();
    spawn_local(async move {
        loop {
            TimeoutFuture::new(interval_ms).await;
            if flag.is_cancelled() {
                break;
            }
            tick();
        }
    });
    handle
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_is_visible_through_clones() {
        let handle = PollHandle {
            cancelled: Arc::new(AtomicBool::new(false)),
        };
        let other = handle.clone();
        assert!(!other.is_cancelled());
        handle.cancel();
        assert!(other.is_cancelled());
    }
}
