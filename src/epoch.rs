//! Conversions between calendar date-times and second counts.
//!
//! Two epochs are in play: the Unix epoch (1970-01-01T00:00:00Z) and a
//! calendar-exact count of days from the start of year 0. The anchored form
//! [`seconds_to_date_time_from`] approximates leap days and pairs with
//! [`date_to_seconds`].

use crate::calendar::{day_of_year, days_in_year, is_leap_year, month_lengths};
use crate::consts::{
    DAYS_IN_COMMON_YEAR, DAYS_IN_MONTH, SECONDS_PER_COMMON_YEAR, SECONDS_PER_DAY,
    SECONDS_PER_HOUR, SECONDS_PER_MINUTE, UNIX_ANCHOR_YEAR, UNIX_EPOCH_YEAR, UNIX_SECONDS_AT_2000,
};
use crate::convert::split_day_of_year;
use crate::error::CalendarError;
use crate::types::{CalendarDate, ClockTime, DateTime};
use tracing::debug;

/// Seconds since the Unix epoch for a date-time in or after 2000.
///
/// Leap days are counted one per four years from 2000, so from 2100 on the
/// result runs a day ahead.
///
/// # Errors
/// `CalendarError::YearBeforeAnchor` before 2000, `CalendarError::OutOfRange`
/// past the 32-bit range (early 2106).
pub fn to_unix_seconds(date: CalendarDate, time: ClockTime) -> Result<u32, CalendarError> {
    if date.year < UNIX_ANCHOR_YEAR {
        debug!(year = date.year, "unix conversion before anchor year");
        return Err(CalendarError::YearBeforeAnchor {
            year: date.year,
            anchor: UNIX_ANCHOR_YEAR,
        });
    }

    let day = i64::from(SECONDS_PER_DAY);
    let years = i64::from(date.year - UNIX_ANCHOR_YEAR);
    let own_leap_day = i64::from(is_leap_year(date.year));
    let total = i64::from(UNIX_SECONDS_AT_2000)
        + years * i64::from(SECONDS_PER_COMMON_YEAR)
        + i64::from(day_of_year(date.year, date.month, date.day)) * day
        + i64::from(time.seconds_from_midnight())
        + (years / 4 - own_leap_day) * day;

    u32::try_from(total).map_err(|_| {
        debug!(total, "unix conversion outside 32-bit range");
        CalendarError::OutOfRange(total.unsigned_abs())
    })
}

/// Calendar date-time for a Unix timestamp, walking whole years from 1970.
///
/// # Errors
/// `CalendarError::OutOfRange` when the year would pass 65535.
pub fn from_unix_seconds(seconds: u64) -> Result<DateTime, CalendarError> {
    let mut days = seconds / u64::from(SECONDS_PER_DAY);
    let mut year = UNIX_EPOCH_YEAR;
    loop {
        let length = u64::from(days_in_year(year));
        if days < length {
            break;
        }
        days -= length;
        year = year
            .checked_add(1)
            .ok_or(CalendarError::OutOfRange(seconds))?;
    }

    // days < 366 here
    let doy = u16::try_from(days + 1).map_err(|_| CalendarError::OutOfRange(seconds))?;
    Ok(DateTime {
        date: split_day_of_year(doy, year, month_lengths(year)),
        time: time_of_day(seconds),
    })
}

/// Calendar-exact date-time for a count of seconds from the start of year 0.
///
/// The whole-day count is an ordinal: one elapsed day is January 1st of year 0.
/// Less than a day elapsed gives the placeholder date `0000-00-00`. Year 0
/// itself is walked as a common year.
///
/// # Errors
/// `CalendarError::OutOfRange` when the year would pass 65535.
pub fn seconds_to_date_time(seconds: u64) -> Result<DateTime, CalendarError> {
    let time = time_of_day(seconds);
    let mut ordinal = seconds / u64::from(SECONDS_PER_DAY);
    if ordinal == 0 {
        return Ok(DateTime {
            date: CalendarDate::new(0, 0, 0),
            time,
        });
    }

    let mut year: u16 = 0;
    loop {
        let length = u64::from(if year > 0 {
            days_in_year(year)
        } else {
            DAYS_IN_COMMON_YEAR
        });
        if ordinal <= length {
            break;
        }
        ordinal -= length;
        year = year
            .checked_add(1)
            .ok_or(CalendarError::OutOfRange(seconds))?;
    }

    let table = if year > 0 {
        month_lengths(year)
    } else {
        &DAYS_IN_MONTH
    };
    let doy = u16::try_from(ordinal).map_err(|_| CalendarError::OutOfRange(seconds))?;
    Ok(DateTime {
        date: split_day_of_year(doy, year, table),
        time,
    })
}

/// Date-time for `seconds` counted from an approximate start of `base_year`.
///
/// The start is `base_year - 1970` common years plus `(base_year - 1974) / 4`
/// leap days after the Unix epoch. The leap count runs one short for most
/// years, which the one-based day count of [`date_to_seconds`] offsets.
///
/// # Errors
/// `CalendarError::OutOfRange` when the resulting Unix time is negative or
/// its year would pass 65535.
pub fn seconds_to_date_time_from(seconds: u64, base_year: u16) -> Result<DateTime, CalendarError> {
    let base = i64::from(base_year);
    let epoch = i64::from(UNIX_EPOCH_YEAR);
    let leap_days = (base - 4 - epoch) / 4;
    let unix = i128::from((base - epoch) * i64::from(SECONDS_PER_COMMON_YEAR))
        + i128::from(leap_days * i64::from(SECONDS_PER_DAY))
        + i128::from(seconds);

    let unix = u64::try_from(unix).map_err(|_| {
        debug!(base_year, seconds, "anchored conversion before the unix epoch");
        CalendarError::OutOfRange(seconds)
    })?;
    from_unix_seconds(unix)
}

/// Seconds from the start of `date.year` counting the date's day in full:
/// January 1st at midnight is 86400.
pub fn date_to_seconds(date: CalendarDate, hour: u32, minute: u32, second: u8) -> u64 {
    u64::from(day_of_year(date.year, date.month, date.day)) * u64::from(SECONDS_PER_DAY)
        + u64::from(hour) * u64::from(SECONDS_PER_HOUR)
        + u64::from(minute) * u64::from(SECONDS_PER_MINUTE)
        + u64::from(second)
}

#[allow(clippy::cast_possible_truncation)]
const fn time_of_day(seconds: u64) -> ClockTime {
    ClockTime::from_seconds((seconds % SECONDS_PER_DAY as u64) as u32)
}
