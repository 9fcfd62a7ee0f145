//! Error type shared by every fallible calendar operation.

use crate::consts::MAX_ROMAN;

/// Errors raised by validated constructors, name lookups, Roman encoding
/// and the epoch conversions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    #[error("Invalid month: {0} (must be 1-12)")]
    InvalidMonth(u8),

    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },

    #[error("Invalid weekday index: {0} (must be 0-6)")]
    InvalidWeekday(u8),

    #[error("Invalid meridiem indicator: {0:?} (expected A or P)")]
    InvalidMeridiem(char),

    /// Roman encoding only covers `0..=MAX_ROMAN`.
    #[error("Roman numeral input {0} exceeds {max}", max = MAX_ROMAN)]
    RomanTooLarge(u16),

    /// The forward Unix conversion counts from its anchor year.
    #[error("Year {year} is before the supported anchor year {anchor}")]
    YearBeforeAnchor { year: u16, anchor: u16 },

    #[error("Value {0} is outside the representable range")]
    OutOfRange(u64),
}
