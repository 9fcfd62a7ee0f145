//! Day-of-year decomposition and the Gregorian to Julian shift.

use crate::calendar::{days_before_month, month_lengths};
use crate::consts::{DAYS_IN_MONTH, DECEMBER, JANUARY, MAX_MONTH};
use crate::types::CalendarDate;

/// Splits a day-of-year into its date within `year`.
///
/// Day 0 yields month 0 / day 0. Ordinals past the end of the year stay in
/// December with an overlong day.
pub fn day_of_year_to_date(doy: u16, year: u16) -> CalendarDate {
    split_day_of_year(doy, year, month_lengths(year))
}

/// Walks `table` until the cumulative month lengths reach `doy`.
pub(crate) fn split_day_of_year(doy: u16, year: u16, table: &[u8; 12]) -> CalendarDate {
    let mut month: u8 = 0;
    let mut cumulative: u16 = 0;
    while cumulative < doy && month < MAX_MONTH {
        cumulative += u16::from(table[usize::from(month)]);
        month += 1;
    }
    let day = doy - days_before_month(table, month);
    CalendarDate {
        year,
        month,
        day: u8::try_from(day).unwrap_or(u8::MAX),
    }
}

pub fn day_of_year_to_day(doy: u16, year: u16) -> u8 {
    day_of_year_to_date(doy, year).day
}

pub fn day_of_year_to_month(doy: u16, year: u16) -> u8 {
    day_of_year_to_date(doy, year).month
}

/// Days the Julian calendar lags the Gregorian one in `year`.
///
/// Uses the century approximation, which is exact except for the stretch
/// between a Gregorian-only century leap day and the end of February.
pub fn julian_offset(year: u16) -> i32 {
    let centuries = i32::from(year / 100);
    centuries - centuries / 4 - 2
}

/// Common-year length of `month`, 0 outside 1..=12.
fn common_month_length(month: u8) -> i32 {
    usize::from(month)
        .checked_sub(1)
        .and_then(|index| DAYS_IN_MONTH.get(index))
        .map_or(0, |&days| i32::from(days))
}

/// Converts a Gregorian date to the Julian calendar.
///
/// The shift always walks common-year month lengths, even in leap years.
pub fn gregorian_to_julian(date: CalendarDate) -> CalendarDate {
    let CalendarDate {
        mut year,
        mut month,
        ..
    } = date;
    let mut day = i32::from(date.day) - julian_offset(date.year);

    // Offsets are positive from year 200 on, so the year never underflows here.
    while day < 1 {
        if month <= JANUARY {
            month = DECEMBER;
            year = year.saturating_sub(1);
        } else {
            month -= 1;
        }
        day += common_month_length(month);
    }

    // Before year 200 the Julian calendar runs ahead instead.
    loop {
        let length = common_month_length(month);
        if length == 0 || day <= length {
            break;
        }
        day -= length;
        if month >= DECEMBER {
            month = JANUARY;
            year = year.saturating_add(1);
        } else {
            month += 1;
        }
    }

    CalendarDate {
        year,
        month,
        day: u8::try_from(day).unwrap_or(u8::MAX),
    }
}
