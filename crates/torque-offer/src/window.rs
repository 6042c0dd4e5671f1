//! Offer lifetime window: countdown and progress.
//!
//! The rendering layer shows a live countdown toward the offer's close and
//! a progress bar of the remaining share of the window. Both are pure
//! functions of a supplied `now`, so the caller owns the ticking.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The open/close timestamps of an offer.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OfferWindow {
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

/// Remaining time broken into display units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeLeft {
    /// True once the countdown has run out.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

impl OfferWindow {
    pub fn new(starts_at: DateTime<Utc>, ends_at: DateTime<Utc>) -> Self {
        Self { starts_at, ends_at }
    }

    /// Whether `now` falls inside the window.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        now >= self.starts_at && now < self.ends_at
    }

    /// Time remaining until the window closes. A closed window reports all
    /// zeros rather than negative units.
    pub fn time_left(&self, now: DateTime<Utc>) -> TimeLeft {
        let remaining = (self.ends_at - now).num_seconds();
        if remaining <= 0 {
            return TimeLeft::default();
        }
        TimeLeft {
            days: remaining / 86_400,
            hours: remaining % 86_400 / 3_600,
            minutes: remaining % 3_600 / 60,
            seconds: remaining % 60,
        }
    }

    /// Share of the window still remaining, as a percentage in `[0, 100]`.
    ///
    /// Display-only, so plain floating point is fine here. Degenerate
    /// windows (end not after start) report 0.
    pub fn progress(&self, now: DateTime<Utc>) -> f64 {
        let total = (self.ends_at - self.starts_at).num_milliseconds();
        if total <= 0 {
            return 0.0;
        }
        let elapsed = (now - self.starts_at).num_milliseconds();
        ((1.0 - elapsed as f64 / total as f64) * 100.0).clamp(0.0, 100.0)
    }
}
