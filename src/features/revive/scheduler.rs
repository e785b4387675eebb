//! Recurring revive ping scheduler
//!
//! A single repeating task per process. Activation is guarded so repeated
//! `activate-auto-revive` invocations cannot spawn a second concurrent loop.
//! Delivery is fire-and-forget: a failed send is logged and the next cycle
//! proceeds unaffected.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::Utc;
use log::{error, info};
use serenity::http::Http;

use crate::core::{revive_embed, role_mention};
use crate::features::revive::ReviveState;

/// Repeating revive task with an activation guard.
pub struct ReviveScheduler {
    state: Arc<ReviveState>,
    active: AtomicBool,
}

impl ReviveScheduler {
    pub fn new(state: Arc<ReviveState>) -> Self {
        ReviveScheduler {
            state,
            active: AtomicBool::new(false),
        }
    }

    /// Whether the repeating task has been spawned.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Claim the activation guard and spawn the repeating task.
    ///
    /// Returns false without spawning anything if the scheduler is already
    /// active. There is no deactivation path while the process runs.
    pub fn try_activate(self: &Arc<Self>, http: Arc<Http>) -> bool {
        if self
            .active
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return false;
        }

        let scheduler = Arc::clone(self);
        tokio::spawn(async move {
            scheduler.run(http).await;
        });
        true
    }

    async fn run(&self, http: Arc<Http>) {
        info!("Auto-revive scheduler started");
        loop {
            // Interval is re-read each cycle, so /set-revive-interval takes
            // effect on the next rescheduling rather than resetting an
            // in-flight sleep.
            let interval = self.state.interval().await;
            tokio::time::sleep(interval).await;
            self.fire(&http).await;
        }
    }

    /// One firing: send the ping if role and channel are set, then advance
    /// the last-revive timestamp whether or not anything was sent.
    async fn fire(&self, http: &Http) {
        let config = self.state.snapshot().await;

        if let (Some(role), Some(channel)) = (config.revive_role, config.revive_channel) {
            let interval_minutes = config.revive_interval.as_secs() / 60;
            let result = channel
                .send_message(http, |message| {
                    message
                        .content(role_mention(role))
                        .set_embed(revive_embed(role, interval_minutes))
                })
                .await;

            match result {
                Ok(_) => info!("Revive ping sent to channel {channel}"),
                Err(e) => error!("Error sending auto-revive message: {e}"),
            }
        }

        self.state.mark_fired(Utc::now()).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_activation_guard_is_claimed_once() {
        let state = Arc::new(ReviveState::new());
        let scheduler = Arc::new(ReviveScheduler::new(state));
        assert!(!scheduler.is_active());

        let http = Arc::new(Http::new(""));
        assert!(scheduler.try_activate(http.clone()));
        assert!(scheduler.is_active());

        // Second activation must not spawn a duplicate loop
        assert!(!scheduler.try_activate(http));
        assert!(scheduler.is_active());
    }
}
