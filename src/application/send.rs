//! Send notification use case

use std::time::{Duration, Instant};

use super::ports::{NotificationError, Notifier};

/// Output from the send use case
#[derive(Debug, Clone, Copy)]
pub struct SendOutput {
    /// Time spent inside `notify()`, pauses included
    pub elapsed: Duration,
}

/// Callbacks for status updates
#[derive(Default)]
#[allow(clippy::type_complexity)]
pub struct SendCallbacks {
    /// Called right before the notifier runs
    pub on_start: Option<Box<dyn Fn() + Send + Sync>>,
    /// Called after a successful delivery
    pub on_sent: Option<Box<dyn Fn(Duration) + Send + Sync>>,
    /// Called with the error when delivery failed
    pub on_failed: Option<Box<dyn Fn(&NotificationError) + Send + Sync>>,
}

/// One-shot notification use case.
///
/// Runs the notifier exactly once; failures are reported, never retried.
pub struct SendNotificationUseCase<N: Notifier> {
    notifier: N,
}

impl<N: Notifier> SendNotificationUseCase<N> {
    pub fn new(notifier: N) -> Self {
        Self { notifier }
    }

    pub async fn execute(&self, callbacks: SendCallbacks) -> Result<SendOutput, NotificationError> {
        if let Some(ref cb) = callbacks.on_start {
            cb();
        }

        let started = Instant::now();
        match self.notifier.notify().await {
            Ok(()) => {
                let elapsed = started.elapsed();
                log::debug!("notification delivered in {:?}", elapsed);
                if let Some(ref cb) = callbacks.on_sent {
                    cb(elapsed);
                }
                Ok(SendOutput { elapsed })
            }
            Err(e) => {
                log::debug!("notification failed: {}", e);
                if let Some(ref cb) = callbacks.on_failed {
                    cb(&e);
                }
                Err(e)
            }
        }
    }
}
