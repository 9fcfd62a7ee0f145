//! Leap-unaware duration arithmetic.
//!
//! A duration year is always 365 days here. Calendar-exact decomposition
//! lives in [`crate::epoch`]; the two are not interchangeable.

use crate::consts::{
    DAYS_IN_COMMON_YEAR, SECONDS_PER_COMMON_YEAR, SECONDS_PER_DAY, SECONDS_PER_HOUR,
    SECONDS_PER_MINUTE,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An elapsed second count split into years, days, hours, minutes and seconds.
///
/// Displays as an English phrase such as `"1.hour, 1.min, 1.sec"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DurationParts {
    pub years: u64,
    pub days: u16,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl DurationParts {
    /// Decomposes a 32-bit second count; years come from whole days / 365.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_secs(seconds: u32) -> Self {
        let whole_days = seconds / SECONDS_PER_DAY;
        Self {
            years: (whole_days / DAYS_IN_COMMON_YEAR as u32) as u64,
            days: (whole_days % DAYS_IN_COMMON_YEAR as u32) as u16,
            hours: ((seconds / SECONDS_PER_HOUR) % 24) as u8,
            minutes: ((seconds / SECONDS_PER_MINUTE) % 60) as u8,
            seconds: (seconds % SECONDS_PER_MINUTE) as u8,
        }
    }

    /// Decomposes a 64-bit second count; years come from whole 31536000 s blocks.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_secs_u64(seconds: u64) -> Self {
        Self {
            years: seconds / SECONDS_PER_COMMON_YEAR as u64,
            days: ((seconds / SECONDS_PER_DAY as u64) % DAYS_IN_COMMON_YEAR as u64) as u16,
            hours: ((seconds / SECONDS_PER_HOUR as u64) % 24) as u8,
            minutes: ((seconds / SECONDS_PER_MINUTE as u64) % 60) as u8,
            seconds: (seconds % SECONDS_PER_MINUTE as u64) as u8,
        }
    }

    /// Recombines the parts with 365-day years, saturating at `u64::MAX`.
    pub const fn as_secs(&self) -> u64 {
        self.years
            .saturating_mul(SECONDS_PER_COMMON_YEAR as u64)
            .saturating_add(self.days as u64 * SECONDS_PER_DAY as u64)
            .saturating_add(self.hours as u64 * SECONDS_PER_HOUR as u64)
            .saturating_add(self.minutes as u64 * SECONDS_PER_MINUTE as u64)
            .saturating_add(self.seconds as u64)
    }
}

impl fmt::Display for DurationParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            years,
            days,
            hours,
            minutes,
            seconds,
        } = *self;

        // Once a year has elapsed every field is shown, always plural.
        if years > 0 {
            let unit = if years == 1 { "year" } else { "years" };
            return write!(
                f,
                "{years}.{unit}, {days}.days, {hours}.hours, {minutes}.min, {seconds}.sec"
            );
        }

        match (days, hours, minutes) {
            (0, 0, 0) if seconds == 1 => write!(f, "{seconds}.second"),
            (0, 0, 0) => write!(f, "{seconds}.seconds"),
            (0, 0, 1) => write!(f, "{minutes}.minute, {seconds}.sec"),
            (0, 0, _) => write!(f, "{minutes}.minutes, {seconds}.sec"),
            (0, 1, _) => write!(f, "{hours}.hour, {minutes}.min, {seconds}.sec"),
            (0, _, _) => write!(f, "{hours}.hours, {minutes}.min, {seconds}.sec"),
            _ => {
                let day_unit = if days == 1 { "day" } else { "days" };
                let hour_unit = if hours <= 1 { "hour" } else { "hours" };
                write!(
                    f,
                    "{days}.{day_unit}, {hours}.{hour_unit}, {minutes}.min, {seconds}.sec"
                )
            }
        }
    }
}

/// English phrase for a 32-bit second count, e.g. `"2.minutes, 5.sec"`.
pub fn duration_words(seconds: u32) -> String {
    DurationParts::from_secs(seconds).to_string()
}

/// English phrase for a 64-bit second count; the year figure is unbounded.
pub fn duration_words_64(seconds: u64) -> String {
    DurationParts::from_secs_u64(seconds).to_string()
}

/// Inverse of the 365-day decomposition: `years*31536000 + days*86400 + ...`.
pub const fn duration_to_seconds(
    years: u16,
    days: u32,
    hours: u32,
    minutes: u32,
    seconds: u8,
) -> u64 {
    years as u64 * SECONDS_PER_COMMON_YEAR as u64
        + days as u64 * SECONDS_PER_DAY as u64
        + hours as u64 * SECONDS_PER_HOUR as u64
        + minutes as u64 * SECONDS_PER_MINUTE as u64
        + seconds as u64
}
