use bevy::prelude::*;
use serde::Deserialize;
use thiserror::Error;

use crate::resources::config::ClockConfig;

/// Fixed calendar shape: 30-day months, 12-month years. No leap years,
/// no weekdays.
pub const HOURS_PER_DAY: f64 = 24.0;
pub const DAYS_PER_MONTH: u32 = 30;
pub const MONTHS_PER_YEAR: u32 = 12;

/// Width of a display-refresh bucket, in minutes of the hour.
const REFRESH_BUCKET_MINUTES: f64 = 10.0;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClockConfigError {
    #[error("ticks_per_game_minute must be positive, got {0}")]
    InvalidSpeed(f64),
}

/// Clock fields as a host save system hands them back: every field
/// optional, numbers taken at face value. Absent or non-finite fields
/// are replaced by configured start values on restore.
///
/// Inserted as a resource before entering play to request a restore;
/// consumed when the clock is constructed.
#[derive(Resource, Deserialize, Debug, Default, Clone, Copy)]
pub struct StoredClock {
    pub time_of_day: Option<f64>,
    pub day: Option<f64>,
    pub month: Option<f64>,
    pub year: Option<f64>,
}

/// Resource tracking in-game time progression.
///
/// Advances once per FixedUpdate tick while in play:
/// - `time_of_day` grows by one in-game minute every
///   `ticks_per_game_minute` ticks
/// - at 24 hours it resets and `day` increments
/// - past day 30 the month rolls, past month 12 the year rolls
///
/// Rollover order is strict (time, day, month, year), each unit checked
/// once per tick against the already-rolled value of the unit below it.
/// State is mutated only through `advance`, `pause`, and `resume`.
#[derive(Resource, Debug, Clone)]
pub struct GameClock {
    /// Fractional hours since midnight, always in `[0, 24)`.
    time_of_day: f64,
    /// Current day of the month (1-30).
    day: u32,
    /// Current month of the year (1-12).
    month: u32,
    /// Current year (1-indexed, unbounded).
    year: u32,
    /// While set, `advance` is a no-op.
    paused: bool,
    /// Hours added per tick, derived once from the configured speed.
    increment: f64,
}

impl GameClock {
    /// Creates a clock at the configured start day/month/year, midnight.
    pub fn new(config: &ClockConfig) -> Result<Self, ClockConfigError> {
        Self::restore(config, &StoredClock::default())
    }

    /// Creates a clock from a prior session's stored fields. Any field
    /// that is missing or not a finite number falls back to its
    /// configured default; this is a silent recovery, not an error.
    /// The clock always comes back running, never paused.
    pub fn restore(config: &ClockConfig, stored: &StoredClock) -> Result<Self, ClockConfigError> {
        config.validate()?;
        let valid = |field: Option<f64>| field.filter(|v| v.is_finite());
        Ok(Self {
            time_of_day: valid(stored.time_of_day).unwrap_or(0.0),
            day: valid(stored.day).map(|v| v as u32).unwrap_or(config.start_day),
            month: valid(stored.month).map(|v| v as u32).unwrap_or(config.start_month),
            year: valid(stored.year).map(|v| v as u32).unwrap_or(config.start_year),
            paused: false,
            increment: config.increment(),
        })
    }

    /// Advances the clock by one tick. No-op while paused.
    ///
    /// Each rollover check runs at most once per call; there is no
    /// catch-up loop. A 24-hour crossing resets `time_of_day` to zero
    /// rather than carrying the overshoot, so at sane speeds the clock
    /// drifts by less than one tick per day.
    pub fn advance(&mut self) {
        if self.paused {
            return;
        }
        self.time_of_day += self.increment;
        if self.time_of_day >= HOURS_PER_DAY {
            self.time_of_day = 0.0;
            self.day += 1;
        }
        if self.day > DAYS_PER_MONTH {
            self.day = 1;
            self.month += 1;
        }
        if self.month > MONTHS_PER_YEAR {
            self.month = 1;
            self.year += 1;
            info!("New year: Year {}", self.year);
        }
    }

    /// Stops the clock. Idempotent; takes effect on the next tick.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Lets the clock run again. Idempotent.
    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Hour of the day, 0-23.
    pub fn hour(&self) -> u32 {
        (self.time_of_day.floor() as u32) % 24
    }

    /// Minute of the hour, 0-59.
    pub fn minute(&self) -> u32 {
        ((self.time_of_day * 60.0).floor() as u32) % 60
    }

    pub fn time_of_day(&self) -> f64 {
        self.time_of_day
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    /// Zero-padded `"HH:MM"`, always 5 characters.
    pub fn time_string(&self) -> String {
        format!("{:02}:{:02}", self.hour(), self.minute())
    }

    /// The full line the HUD displays.
    pub fn display_line(&self) -> String {
        format!(
            "{} | Day {} | Month {} | Year {}",
            self.time_string(),
            self.day,
            self.month,
            self.year
        )
    }

    /// Whether the displayed time crossed a 10-minute bucket boundary
    /// on the tick that just ran.
    ///
    /// Evaluated after `advance` has already mutated the state: the
    /// previous tick's minutes are reconstructed from the current value
    /// rather than stored. Buckets partition only the minute component;
    /// hour, day, month, and year changes are ignored. A clock that just
    /// reset past midnight reconstructs a negative previous minute,
    /// which lands in bucket -1 and still compares unequal to bucket 0.
    pub fn should_refresh_display(&self) -> bool {
        let prev_total_minutes = (self.time_of_day - self.increment) * 60.0;
        let current_total_minutes = self.time_of_day * 60.0;
        refresh_bucket(prev_total_minutes) != refresh_bucket(current_total_minutes)
    }

    #[cfg(test)]
    fn with_time(time_of_day: f64, increment: f64) -> Self {
        Self {
            time_of_day,
            day: 1,
            month: 1,
            year: 1,
            paused: false,
            increment,
        }
    }
}

/// 10-minute bucket index of a total-minutes value. Uses the truncating
/// `%` remainder, so negative inputs produce negative buckets.
fn refresh_bucket(total_minutes: f64) -> i64 {
    ((total_minutes.floor() % 60.0) / REFRESH_BUCKET_MINUTES).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_speed(ticks_per_game_minute: f64) -> ClockConfig {
        ClockConfig {
            ticks_per_game_minute,
            ..Default::default()
        }
    }

    #[test]
    fn test_new_clock_starts_at_configured_values() {
        let config = ClockConfig {
            start_day: 12,
            start_month: 7,
            start_year: 1720,
            ..Default::default()
        };
        let clock = GameClock::new(&config).unwrap();
        assert_eq!(clock.time_of_day(), 0.0);
        assert_eq!(clock.day(), 12);
        assert_eq!(clock.month(), 7);
        assert_eq!(clock.year(), 1720);
        assert!(!clock.is_paused());
    }

    #[test]
    fn test_rejects_non_positive_speed() {
        for bad in [0.0, -5.0, f64::NAN] {
            let result = GameClock::new(&config_with_speed(bad));
            assert!(matches!(result, Err(ClockConfigError::InvalidSpeed(_))));
        }
    }

    #[test]
    fn test_advance_adds_exactly_one_increment() {
        let config = config_with_speed(60.0);
        let mut clock = GameClock::new(&config).unwrap();
        clock.advance();
        assert_eq!(clock.time_of_day(), config.increment());
        assert_eq!(clock.day(), 1);
    }

    #[test]
    fn test_invariants_hold_over_many_ticks() {
        // Fast clock so several days and a month boundary pass.
        let mut clock = GameClock::new(&config_with_speed(0.01)).unwrap();
        for _ in 0..50_000 {
            clock.advance();
            assert!(clock.time_of_day() >= 0.0 && clock.time_of_day() < 24.0);
            assert!((1..=30).contains(&clock.day()));
            assert!((1..=12).contains(&clock.month()));
            assert!(clock.year() >= 1);
        }
    }

    #[test]
    fn test_advance_while_paused_changes_nothing() {
        let mut clock = GameClock::new(&config_with_speed(60.0)).unwrap();
        clock.pause();
        for _ in 0..100 {
            clock.advance();
        }
        assert_eq!(clock.time_of_day(), 0.0);
        assert_eq!(clock.day(), 1);
        assert_eq!(clock.month(), 1);
        assert_eq!(clock.year(), 1);
    }

    #[test]
    fn test_pause_resume_single_increment() {
        // pause, 100 dead ticks, resume, 1 live tick == 1 fresh tick.
        let config = config_with_speed(60.0);
        let mut paused_then_resumed = GameClock::new(&config).unwrap();
        paused_then_resumed.pause();
        paused_then_resumed.pause(); // idempotent
        for _ in 0..100 {
            paused_then_resumed.advance();
        }
        paused_then_resumed.resume();
        paused_then_resumed.resume(); // idempotent
        paused_then_resumed.advance();

        let mut fresh = GameClock::new(&config).unwrap();
        fresh.advance();
        assert_eq!(paused_then_resumed.time_of_day(), fresh.time_of_day());
    }

    #[test]
    fn test_day_rollover_resets_time_to_zero() {
        let config = config_with_speed(60.0);
        let stored = StoredClock {
            time_of_day: Some(23.9999),
            day: Some(5.0),
            ..Default::default()
        };
        let mut clock = GameClock::restore(&config, &stored).unwrap();
        // A single tick crosses 24:00; the overshoot is discarded.
        clock.advance();
        assert_eq!(clock.time_of_day(), 0.0);
        assert_eq!(clock.day(), 6);
    }

    #[test]
    fn test_triple_rollover_in_one_call() {
        // An artificially large increment crosses all three boundaries
        // in a single tick: day, month, and year each roll exactly once.
        let config = config_with_speed(0.0001);
        let stored = StoredClock {
            time_of_day: Some(23.9),
            day: Some(30.0),
            month: Some(12.0),
            year: Some(3.0),
        };
        let mut clock = GameClock::restore(&config, &stored).unwrap();
        clock.advance();
        assert_eq!(clock.time_of_day(), 0.0);
        assert_eq!(clock.day(), 1);
        assert_eq!(clock.month(), 1);
        assert_eq!(clock.year(), 4);
    }

    #[test]
    fn test_3600_ticks_is_one_hour() {
        // 60 ticks per minute, 60 minutes: exactly one hour on the dial.
        let mut clock = GameClock::new(&config_with_speed(60.0)).unwrap();
        for _ in 0..3600 {
            clock.advance();
        }
        assert_eq!(clock.hour(), 1);
        assert_eq!(clock.minute(), 0);
    }

    #[test]
    fn test_time_string_is_zero_padded() {
        // 3.125 hours = 03:07.5 on the dial.
        let stored = StoredClock {
            time_of_day: Some(3.125),
            ..Default::default()
        };
        let clock = GameClock::restore(&config_with_speed(60.0), &stored).unwrap();
        assert_eq!(clock.time_string(), "03:07");
        assert_eq!(clock.time_string().len(), 5);

        let midnight = GameClock::new(&config_with_speed(60.0)).unwrap();
        assert_eq!(midnight.time_string(), "00:00");
    }

    #[test]
    fn test_display_line_format() {
        let stored = StoredClock {
            time_of_day: Some(9.5),
            day: Some(14.0),
            month: Some(3.0),
            year: Some(2.0),
        };
        let clock = GameClock::restore(&config_with_speed(60.0), &stored).unwrap();
        assert_eq!(clock.display_line(), "09:30 | Day 14 | Month 3 | Year 2");
    }

    #[test]
    fn test_restore_replaces_invalid_fields_only() {
        let stored = StoredClock {
            time_of_day: Some(f64::NAN),
            day: None,
            month: Some(5.0),
            year: Some(2.0),
        };
        let clock = GameClock::restore(&ClockConfig::default(), &stored).unwrap();
        assert_eq!(clock.time_of_day(), 0.0);
        assert_eq!(clock.day(), 1);
        assert_eq!(clock.month(), 5);
        assert_eq!(clock.year(), 2);
    }

    #[test]
    fn test_restore_is_never_paused() {
        let clock = GameClock::restore(&ClockConfig::default(), &StoredClock::default()).unwrap();
        assert!(!clock.is_paused());
    }

    #[test]
    fn test_stored_clock_deserializes_from_save_blob() {
        // Nulls and missing keys both count as absent fields.
        let blob = r#"{ "time_of_day": null, "month": 5.0, "year": 2 }"#;
        let stored: StoredClock = serde_json::from_str(blob).unwrap();
        let clock = GameClock::restore(&ClockConfig::default(), &stored).unwrap();
        assert_eq!(clock.time_of_day(), 0.0);
        assert_eq!(clock.day(), 1);
        assert_eq!(clock.month(), 5);
        assert_eq!(clock.year(), 2);
    }

    // Refresh-heuristic tests use an exactly representable increment
    // (1/64 hour = 0.9375 minutes) so bucket arithmetic has no rounding.
    const INC: f64 = 0.015625;

    #[test]
    fn test_refresh_true_at_bucket_boundary() {
        // 29.0625 -> 30.0 minutes crosses the :30 boundary.
        let clock = GameClock::with_time(0.5, INC);
        assert!(clock.should_refresh_display());
    }

    #[test]
    fn test_refresh_false_inside_bucket() {
        // 14.0625 -> 15.0 minutes stays inside the 10-19 bucket.
        let clock = GameClock::with_time(0.25, INC);
        assert!(!clock.should_refresh_display());

        // 15.0 -> 15.9375 likewise.
        let clock = GameClock::with_time(0.25 + INC, INC);
        assert!(!clock.should_refresh_display());
    }

    #[test]
    fn test_refresh_true_at_top_of_hour() {
        // 59.0625 -> 60.0 minutes: minute component wraps to bucket 0.
        let clock = GameClock::with_time(1.0, INC);
        assert!(clock.should_refresh_display());
    }

    #[test]
    fn test_refresh_true_after_midnight_reset() {
        // time_of_day was just reset to 0; the reconstructed previous
        // minute is negative and lands in bucket -1.
        let clock = GameClock::with_time(0.0, INC);
        assert!(clock.should_refresh_display());
    }

    #[test]
    fn test_refresh_ignores_hour_and_day() {
        // Same minute component as the inside-bucket case, different hour.
        let clock = GameClock::with_time(17.25, INC);
        assert!(!clock.should_refresh_display());
    }
}
