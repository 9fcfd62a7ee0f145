//! Gregorian calendar arithmetic: leap years, day/week ordinals, day counts and
//! the 12/24-hour clock helpers.

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_COMMON_YEAR, DAYS_IN_LEAP_YEAR, DAYS_IN_MONTH, DAYS_IN_MONTH_LEAP,
    DAYS_PER_WEEK, DECEMBER, FEBRUARY, GREGORIAN_CYCLE, JANUARY, LEAP_YEAR_CYCLE,
    SECONDS_PER_HOUR, SECONDS_PER_MINUTE, WEEKDAY_MONTH_OFFSET,
};
use crate::error::CalendarError;
use crate::types::{CalendarDate, Meridiem, Month, Weekday};
use tracing::trace;

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Month-length table for `year`, January first.
pub(crate) const fn month_lengths(year: u16) -> &'static [u8; 12] {
    if is_leap_year(year) {
        &DAYS_IN_MONTH_LEAP
    } else {
        &DAYS_IN_MONTH
    }
}

/// Days in `month` of `year`; 0 for a month outside 1..=12.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    usize::from(month)
        .checked_sub(1)
        .and_then(|index| month_lengths(year).get(index))
        .copied()
        .unwrap_or(0)
}

pub const fn days_in_year(year: u16) -> u16 {
    if is_leap_year(year) {
        DAYS_IN_LEAP_YEAR
    } else {
        DAYS_IN_COMMON_YEAR
    }
}

/// Sum of the lengths of the months before `month` in `table`.
pub(crate) fn days_before_month(table: &[u8; 12], month: u8) -> u16 {
    let preceding = usize::from(month.saturating_sub(1)).min(table.len());
    table[..preceding].iter().map(|&d| u16::from(d)).sum()
}

/// 1-based ordinal of the date within its year (1..=366).
pub fn day_of_year(year: u16, month: u8, day: u8) -> u16 {
    days_before_month(month_lengths(year), month) + u16::from(day)
}

pub fn days_left_in_year(year: u16, month: u8, day: u8) -> u16 {
    days_in_year(year).saturating_sub(day_of_year(year, month, day))
}

/// Weekday index, Sunday = 0 through Saturday = 6 (Sakamoto's method).
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn day_of_week(year: u16, month: u8, day: u8) -> u8 {
    let y = if month < 3 {
        i64::from(year) - 1
    } else {
        i64::from(year)
    };
    let offset = WEEKDAY_MONTH_OFFSET[usize::from(month.clamp(JANUARY, DECEMBER) - 1)];
    let raw = y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        + i64::from(offset)
        + i64::from(day);
    // always in 0..7
    raw.rem_euclid(i64::from(DAYS_PER_WEEK)) as u8
}

/// ISO 8601 week number (1..=53).
///
/// Days before the first ISO Monday belong to the last week of the previous
/// year; days after the last full week may belong to week 1 of the next year.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn week_of_year(year: u16, month: u8, day: u8) -> u8 {
    let doy = i32::from(day_of_year(year, month, day));
    let iso_weekday = match day_of_week(year, month, day) {
        0 => 7,
        d => i32::from(d),
    };

    match (10 + doy - iso_weekday) / 7 {
        0 => last_week_of_previous_year(year),
        53 => match Weekday::from_sunday(day_of_week(year, DECEMBER, 31)) {
            Weekday::Monday | Weekday::Tuesday | Weekday::Wednesday => 1,
            Weekday::Thursday => 53,
            Weekday::Friday if is_leap_year(year) => 53,
            Weekday::Friday | Weekday::Saturday | Weekday::Sunday => 52,
        },
        week => week as u8,
    }
}

fn last_week_of_previous_year(year: u16) -> u8 {
    match Weekday::from_sunday(day_of_week(year, JANUARY, 1)) {
        Weekday::Friday => 53,
        Weekday::Saturday if year.checked_sub(1).is_some_and(is_leap_year) => 53,
        Weekday::Saturday | Weekday::Sunday => 52,
        _ => 1,
    }
}

/// 53 when January 1st is a Thursday, or a Wednesday in a leap year.
pub fn weeks_in_year(year: u16) -> u8 {
    match Weekday::from_sunday(day_of_week(year, JANUARY, 1)) {
        Weekday::Thursday => 53,
        Weekday::Wednesday if is_leap_year(year) => 53,
        _ => 52,
    }
}

/// Day count of a date since a fixed epoch, used only for differences.
fn absolute_days(date: CalendarDate) -> i64 {
    let mut years = i64::from(date.year);
    if date.month <= FEBRUARY {
        years -= 1;
    }
    let leap_days = years.div_euclid(4) - years.div_euclid(100) + years.div_euclid(400);
    i64::from(DAYS_IN_COMMON_YEAR) * i64::from(date.year)
        + i64::from(date.day)
        + i64::from(days_before_month(&DAYS_IN_MONTH, date.month))
        + leap_days
}

/// Whole days from `first` to `second`.
///
/// Returns 0 when `first` does not precede `second`. The ordering check is
/// field-wise rather than lexicographic and some reversed same-year pairs slip
/// through it; those also come back as 0.
pub fn days_between(first: CalendarDate, second: CalendarDate) -> u32 {
    let rejected = first.year > second.year
        || (first.year >= second.year && first.month >= second.month && first.day > second.day)
        || (first.year == second.year && first.month >= second.month && first.day >= second.day);
    if rejected {
        trace!(%first, %second, "days_between rejected date ordering");
        return 0;
    }

    u32::try_from(absolute_days(second) - absolute_days(first)).unwrap_or(0)
}

pub const fn seconds_from_midnight(hour: u8, minute: u8, second: u8) -> u32 {
    hour as u32 * SECONDS_PER_HOUR + minute as u32 * SECONDS_PER_MINUTE + second as u32
}

pub const fn minutes_from_midnight(hour: u8, minute: u8) -> u16 {
    hour as u16 * 60 + minute as u16
}

pub const fn is_pm(hour: u8) -> bool {
    hour >= 12
}

/// `"AM"` before noon, `"PM"` from noon on.
pub const fn am_pm(hour: u8) -> &'static str {
    Meridiem::of_hour(hour).as_str()
}

/// 24-hour to 12-hour: 0 becomes 12, 13..=23 lose 12, the rest pass through.
pub const fn to_12_hour(hour: u8) -> u8 {
    if hour > 12 {
        hour - 12
    } else if hour == 0 {
        12
    } else {
        hour
    }
}

/// 12-hour to 24-hour: 12 AM is midnight, PM hours other than 12 gain 12.
pub const fn to_24_hour(hour: u8, meridiem: Meridiem) -> u8 {
    match meridiem {
        Meridiem::Pm if hour != 12 => hour.wrapping_add(12),
        Meridiem::Am if hour == 12 => 0,
        _ => hour,
    }
}

/// # Errors
/// Returns `CalendarError::InvalidMonth` outside 1..=12.
pub fn month_name_short(month: u8) -> Result<&'static str, CalendarError> {
    Month::new(month).map(Month::short_name)
}

/// # Errors
/// Returns `CalendarError::InvalidMonth` outside 1..=12.
pub fn month_name_long(month: u8) -> Result<&'static str, CalendarError> {
    Month::new(month).map(Month::long_name)
}

/// # Errors
/// Returns `CalendarError::InvalidWeekday` for an index of 7 or more.
pub fn weekday_name_short(index: u8) -> Result<&'static str, CalendarError> {
    Weekday::from_index(index).map(Weekday::short_name)
}

/// # Errors
/// Returns `CalendarError::InvalidWeekday` for an index of 7 or more.
pub fn weekday_name_long(index: u8) -> Result<&'static str, CalendarError> {
    Weekday::from_index(index).map(Weekday::long_name)
}
