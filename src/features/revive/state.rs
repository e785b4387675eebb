//! Mutable revive configuration, shared across tasks
//!
//! One `ReviveState` exists per process. It is handed by `Arc` to the command
//! handlers, the scheduler and the runtime limiter; there is no persistence,
//! so everything here is lost on restart.

use chrono::{DateTime, Utc};
use serenity::model::id::{ChannelId, RoleId};
use std::time::Duration;
use tokio::sync::RwLock;

use crate::core::ReviveError;

/// Default revive interval when none has been configured (1 hour).
pub const DEFAULT_REVIVE_INTERVAL: Duration = Duration::from_millis(3_600_000);

/// Smallest interval accepted by `set-revive-interval`.
pub const MIN_REVIVE_INTERVAL_MINUTES: i64 = 1;

/// How long the bot stays up after `12` is invoked.
pub const RUNNING_TIME_LIMIT: Duration = Duration::from_secs(12 * 60 * 60);

/// Snapshot of the revive configuration at a point in time.
#[derive(Debug, Clone)]
pub struct ReviveConfig {
    pub revive_role: Option<RoleId>,
    pub revive_channel: Option<ChannelId>,
    pub revive_interval: Duration,
    /// Advanced only by the scheduler, monotonic non-decreasing.
    pub last_revive_time: DateTime<Utc>,
    /// One-shot; set at most once per process, no reset path.
    pub is_running_for_12_hours: bool,
}

/// Process-wide revive configuration behind a `tokio::sync::RwLock`.
///
/// Callers never hold the lock across a network `.await`: handlers take a
/// snapshot or mutate a single field and drop the guard before talking to
/// Discord.
pub struct ReviveState {
    inner: RwLock<ReviveConfig>,
}

impl ReviveState {
    /// Create the state with defaults; the last-revive baseline is "now"
    /// (process start), which is what `check` reports against before any
    /// activation.
    pub fn new() -> Self {
        Self::with_baseline(Utc::now())
    }

    /// Create the state with an explicit last-revive baseline.
    pub fn with_baseline(baseline: DateTime<Utc>) -> Self {
        ReviveState {
            inner: RwLock::new(ReviveConfig {
                revive_role: None,
                revive_channel: None,
                revive_interval: DEFAULT_REVIVE_INTERVAL,
                last_revive_time: baseline,
                is_running_for_12_hours: false,
            }),
        }
    }

    /// Store the revive role. No validation that the role is pingable.
    pub async fn set_role(&self, role: RoleId) {
        self.inner.write().await.revive_role = Some(role);
    }

    /// Store the revive channel. No validation of channel kind.
    pub async fn set_channel(&self, channel: ChannelId) {
        self.inner.write().await.revive_channel = Some(channel);
    }

    /// Validate and store a new interval given in whole minutes.
    ///
    /// Rejects anything below [`MIN_REVIVE_INTERVAL_MINUTES`], leaving the
    /// prior value untouched. A stored change takes effect on the scheduler's
    /// next natural rescheduling, not retroactively.
    pub async fn set_interval_minutes(&self, minutes: i64) -> Result<Duration, ReviveError> {
        if minutes < MIN_REVIVE_INTERVAL_MINUTES {
            return Err(ReviveError::InvalidArgument(
                "Interval must be at least 1 minute.".to_string(),
            ));
        }
        // Discord integer options go up to 2^53; an unchecked conversion to
        // milliseconds could wrap and break the minimum-interval invariant.
        let millis = u64::try_from(minutes)
            .ok()
            .and_then(|m| m.checked_mul(60_000))
            .ok_or_else(|| {
                ReviveError::InvalidArgument("Interval is too large.".to_string())
            })?;
        let interval = Duration::from_millis(millis);
        self.inner.write().await.revive_interval = interval;
        Ok(interval)
    }

    /// Current interval between revive pings.
    pub async fn interval(&self) -> Duration {
        self.inner.read().await.revive_interval
    }

    /// Whether both role and channel have been configured.
    pub async fn is_configured(&self) -> bool {
        let config = self.inner.read().await;
        config.revive_role.is_some() && config.revive_channel.is_some()
    }

    /// Copy of the full configuration.
    pub async fn snapshot(&self) -> ReviveConfig {
        self.inner.read().await.clone()
    }

    /// Whole minutes until the next revive ping, floored at zero.
    pub async fn remaining_minutes(&self, now: DateTime<Utc>) -> i64 {
        let config = self.inner.read().await;
        let elapsed_ms = now
            .signed_duration_since(config.last_revive_time)
            .num_milliseconds();
        let interval_ms = config.revive_interval.as_millis() as i64;
        (interval_ms - elapsed_ms).max(0) / 60_000
    }

    /// Advance the last-revive timestamp. Monotonic: a stale firing time
    /// never moves it backwards.
    pub async fn mark_fired(&self, at: DateTime<Utc>) {
        let mut config = self.inner.write().await;
        if at > config.last_revive_time {
            config.last_revive_time = at;
        }
    }

    /// Claim the one-shot 12-hour flag. Returns false if already claimed.
    pub async fn try_enter_12_hour_mode(&self) -> bool {
        let mut config = self.inner.write().await;
        if config.is_running_for_12_hours {
            false
        } else {
            config.is_running_for_12_hours = true;
            true
        }
    }
}

impl Default for ReviveState {
    fn default() -> Self {
        Self::new()
    }
}
