//! Trip countdown state.
//!
//! # Responsibility
//! - Hold the optional trip target date and compute whole days remaining.
//!
//! # Invariants
//! - The countdown is display-only session state; it is not persisted and
//!   owns no timers. Refreshing the remaining-days figure is the caller's
//!   concern.
//! - Any partial day remaining counts as a full day left.

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Optional trip target date in epoch milliseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TripCountdown {
    target_epoch_ms: Option<i64>,
}

impl TripCountdown {
    /// Creates a countdown with no target date set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the trip target date.
    pub fn set_target(&mut self, target_epoch_ms: i64) {
        self.target_epoch_ms = Some(target_epoch_ms);
    }

    /// Clears the trip target date.
    pub fn clear_target(&mut self) {
        self.target_epoch_ms = None;
    }

    /// Currently set target date, if any.
    pub fn target(&self) -> Option<i64> {
        self.target_epoch_ms
    }

    /// Whole days from `now_epoch_ms` until the target, rounded up.
    ///
    /// Returns `None` when no target is set. Past targets yield zero or
    /// negative values; rendering those as "trip started" is up to the UI.
    pub fn days_left(&self, now_epoch_ms: i64) -> Option<i64> {
        self.target_epoch_ms
            .map(|target| div_ceil_ms(target - now_epoch_ms))
    }
}

/// Ceiling division of a millisecond delta by one day, rounding toward
/// positive infinity for both signs (matching float `ceil` on the ratio).
fn div_ceil_ms(delta_ms: i64) -> i64 {
    let quotient = delta_ms / MS_PER_DAY;
    if delta_ms % MS_PER_DAY > 0 {
        quotient + 1
    } else {
        quotient
    }
}

#[cfg(test)]
mod tests {
    use super::{TripCountdown, MS_PER_DAY};

    #[test]
    fn no_target_means_no_countdown() {
        let countdown = TripCountdown::new();
        assert_eq!(countdown.days_left(0), None);
    }

    #[test]
    fn partial_day_counts_as_full_day() {
        let mut countdown = TripCountdown::new();
        countdown.set_target(MS_PER_DAY + 1);
        assert_eq!(countdown.days_left(0), Some(2));

        countdown.set_target(MS_PER_DAY);
        assert_eq!(countdown.days_left(0), Some(1));
    }

    #[test]
    fn same_instant_is_zero_days() {
        let mut countdown = TripCountdown::new();
        countdown.set_target(5 * MS_PER_DAY);
        assert_eq!(countdown.days_left(5 * MS_PER_DAY), Some(0));
    }

    #[test]
    fn past_target_goes_negative() {
        let mut countdown = TripCountdown::new();
        countdown.set_target(0);
        assert_eq!(countdown.days_left(3 * MS_PER_DAY), Some(-3));
        // Half a day into the past still rounds up, toward zero.
        assert_eq!(countdown.days_left(MS_PER_DAY / 2), Some(0));
    }

    #[test]
    fn clear_target_resets_countdown() {
        let mut countdown = TripCountdown::new();
        countdown.set_target(MS_PER_DAY);
        countdown.clear_target();
        assert_eq!(countdown.target(), None);
        assert_eq!(countdown.days_left(0), None);
    }
}
