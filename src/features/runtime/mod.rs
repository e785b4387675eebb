//! # Runtime Limit Feature
//!
//! One-shot self-termination armed by the `12` command. Once armed the timer
//! cannot be cancelled; after the limit elapses the bot signals the gateway
//! shutdown listener in `main` and the process winds down.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.3.0
//! - **Toggleable**: false

use std::time::Duration;

use log::{error, info};
use tokio::sync::mpsc;

/// Arms a single delayed shutdown signal.
///
/// The one-shot gate lives in `ReviveState` (`is_running_for_12_hours`); the
/// dispatcher claims it before calling [`RuntimeLimiter::arm`], so arming
/// itself is an unconditional spawn.
pub struct RuntimeLimiter {
    limit: Duration,
    shutdown: mpsc::Sender<()>,
}

impl RuntimeLimiter {
    pub fn new(limit: Duration, shutdown: mpsc::Sender<()>) -> Self {
        RuntimeLimiter { limit, shutdown }
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }

    /// Spawn the uncancellable termination timer.
    pub fn arm(&self) {
        let limit = self.limit;
        let shutdown = self.shutdown.clone();
        tokio::spawn(async move {
            tokio::time::sleep(limit).await;
            info!(
                "Runtime limit of {}h reached, requesting shutdown",
                limit.as_secs() / 3600
            );
            if shutdown.send(()).await.is_err() {
                error!("Shutdown listener is gone; runtime limit signal dropped");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::timeout;

    #[tokio::test]
    async fn test_arm_signals_shutdown_after_limit() {
        let (tx, mut rx) = mpsc::channel(1);
        let limiter = RuntimeLimiter::new(Duration::from_millis(10), tx);
        limiter.arm();

        timeout(Duration::from_secs(1), rx.recv())
            .await
            .expect("shutdown signal not sent within limit")
            .expect("sender dropped without signalling");
    }

    #[tokio::test]
    async fn test_limit_accessor() {
        let (tx, _rx) = mpsc::channel(1);
        let limiter = RuntimeLimiter::new(Duration::from_secs(12 * 60 * 60), tx);
        assert_eq!(limiter.limit(), Duration::from_secs(43_200));
    }
}
