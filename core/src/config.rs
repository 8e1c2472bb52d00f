//! Upload timing configuration.
//!
//! The defaults reproduce the page's original feel: a progress tick every
//! 300 ms, a short pause at 100 % before the bar resets, and toasts that
//! linger for three seconds.

use std::time::Duration;

/// Period of the cosmetic progress timer.
pub const PROGRESS_TICK_MS: u64 = 300;

/// Largest random step added on each tick, in percent.
pub const PROGRESS_MAX_STEP: f64 = 30.0;

/// Highest value the simulated progress may reach before the response lands.
pub const PROGRESS_CAP: f64 = 95.0;

/// How long the completed bar stays visible before resetting.
pub const RESULT_DISPLAY_MS: u64 = 1000;

/// Lifetime of a notification toast.
pub const NOTIFICATION_TTL_MS: u64 = 3000;

/// Timing knobs for [`crate::UploadController`].
#[derive(Clone, Debug, PartialEq)]
pub struct UploadSettings {
    pub tick: Duration,
    pub max_step: f64,
    pub cap: f64,
    pub result_delay: Duration,
    pub notification_ttl: Duration,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(PROGRESS_TICK_MS),
            max_step: PROGRESS_MAX_STEP,
            cap: PROGRESS_CAP,
            result_delay: Duration::from_millis(RESULT_DISPLAY_MS),
            notification_ttl: Duration::from_millis(NOTIFICATION_TTL_MS),
        }
    }
}

impl UploadSettings {
    /// Settings without the post-response pause, for terminals.
    pub fn immediate() -> Self {
        Self {
            result_delay: Duration::ZERO,
            ..Self::default()
        }
    }
}
