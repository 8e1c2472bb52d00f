//! Cosmetic progress meter.
//!
//! The value is not tied to bytes transferred. It creeps towards a cap
//! below 100 % while the request is outstanding, and only [`ProgressMeter::complete`]
//! takes it to 100 %.

use rand::Rng;

pub const PROGRESS_MIN: f64 = 0.0;
pub const PROGRESS_MAX: f64 = 100.0;

#[derive(Clone, Debug, PartialEq)]
pub struct ProgressMeter {
    value: f64,
    cap: f64,
}

impl ProgressMeter {
    /// A meter at 0 % that will not pass `cap` until completed.
    pub fn new(cap: f64) -> Self {
        Self {
            value: PROGRESS_MIN,
            cap: cap.clamp(PROGRESS_MIN, PROGRESS_MAX),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Add `step` percent, saturating at the cap. Returns the new value.
    pub fn advance(&mut self, step: f64) -> f64 {
        if step.is_finite() && step > 0.0 {
            self.value = (self.value + step).min(self.cap);
        }
        self.value
    }

    /// Add a random step in `[0, max_step)`.
    pub fn advance_random(&mut self, max_step: f64) -> f64 {
        let step = if max_step > 0.0 {
            rand::thread_rng().gen_range(0.0..max_step)
        } else {
            0.0
        };
        self.advance(step)
    }

    pub fn complete(&mut self) -> f64 {
        self.value = PROGRESS_MAX;
        self.value
    }

    pub fn reset(&mut self) -> f64 {
        self.value = PROGRESS_MIN;
        self.value
    }

    pub fn is_complete(&self) -> bool {
        self.value >= PROGRESS_MAX
    }
}

/// CSS width for a progress value, e.g. `"42.5%"`.
pub fn css_width(percent: f64) -> String {
    format!("{}%", percent.clamp(PROGRESS_MIN, PROGRESS_MAX))
}
