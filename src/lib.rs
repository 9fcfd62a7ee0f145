//! Calendar and clock arithmetic for devices that keep time with a
//! real-time clock or an NTP feed, plus fixed-format rendering of dates,
//! clocks, durations and Roman numerals.
//!
//! Dates are plain `(year, month, day)` values. Calendar functions do not
//! validate their input; use [`CalendarDate::checked`] where the source is
//! untrusted.

mod calendar;
mod consts;
mod convert;
mod duration;
mod epoch;
mod error;
mod format;
pub mod legacy;
mod prelude;
mod roman;
mod types;

pub use calendar::{
    am_pm, day_of_week, day_of_year, days_between, days_in_month, days_in_year,
    days_left_in_year, is_leap_year, is_pm, minutes_from_midnight, month_name_long,
    month_name_short, seconds_from_midnight, to_12_hour, to_24_hour, week_of_year,
    weekday_name_long, weekday_name_short, weeks_in_year,
};
pub use consts::*;
pub use convert::{
    day_of_year_to_date, day_of_year_to_day, day_of_year_to_month, gregorian_to_julian,
    julian_offset,
};
pub use duration::{DurationParts, duration_to_seconds, duration_words, duration_words_64};
pub use epoch::{
    date_to_seconds, from_unix_seconds, seconds_to_date_time, seconds_to_date_time_from,
    to_unix_seconds,
};
pub use error::CalendarError;
pub use format::{DateOrder, FormatConfig, Formatter, MonthStyle};
pub use roman::{roman_clock, roman_clock_12, to_roman};
pub use types::{CalendarDate, ClockTime, DateTime, Meridiem, Month, Weekday};
