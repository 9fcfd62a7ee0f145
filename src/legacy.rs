//! String-sentinel variants of the fallible lookups.
//!
//! These never fail: out-of-range input yields `"Err"`, `"Error"` or
//! `"Error, To Big."` in place of the value. Prefer the `Result` returning
//! functions at the crate root unless a display expects the sentinels.

use crate::calendar;
use crate::consts::{LONG_NAME_ERROR, ROMAN_TOO_BIG, SHORT_NAME_ERROR};
use crate::roman::to_roman;

/// `"Jan"`..`"Dec"`, or `"Err"`.
pub fn month_name_short(month: u8) -> &'static str {
    calendar::month_name_short(month).unwrap_or(SHORT_NAME_ERROR)
}

/// `"January"`..`"December"`, or `"Error"`.
pub fn month_name_long(month: u8) -> &'static str {
    calendar::month_name_long(month).unwrap_or(LONG_NAME_ERROR)
}

/// `"Sun"`..`"Sat"` for 0..=6, or `"Err"`.
pub fn weekday_name_short(index: u8) -> &'static str {
    calendar::weekday_name_short(index).unwrap_or(SHORT_NAME_ERROR)
}

/// `"Sunday"`..`"Saturday"` for 0..=6, or `"Error"`.
pub fn weekday_name_long(index: u8) -> &'static str {
    calendar::weekday_name_long(index).unwrap_or(LONG_NAME_ERROR)
}

/// Roman numerals, or `"Error, To Big."` above 10000.
pub fn roman(value: u16) -> String {
    to_roman(value).unwrap_or_else(|_| ROMAN_TOO_BIG.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_names() {
        assert_eq!(month_name_short(1), "Jan");
        assert_eq!(month_name_long(12), "December");
        assert_eq!(month_name_short(0), "Err");
        assert_eq!(month_name_short(13), "Err");
        assert_eq!(month_name_long(13), "Error");
    }

    #[test]
    fn test_weekday_names() {
        assert_eq!(weekday_name_short(0), "Sun");
        assert_eq!(weekday_name_long(6), "Saturday");
        assert_eq!(weekday_name_short(7), "Err");
        assert_eq!(weekday_name_long(7), "Error");
    }

    #[test]
    fn test_roman() {
        assert_eq!(roman(2024), "MMXXIV");
        assert_eq!(roman(0), "N");
        assert_eq!(roman(10_000), "M".repeat(10));
        assert_eq!(roman(10_001), "Error, To Big.");
    }
}
