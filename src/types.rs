use crate::calendar::{self, days_in_month};
use crate::consts::{
    DAYS_PER_WEEK, MAX_MONTH, MONTH_NAMES_LONG, MONTH_NAMES_SHORT, SECONDS_PER_HOUR,
    SECONDS_PER_MINUTE, WEEKDAY_NAMES_LONG, WEEKDAY_NAMES_SHORT,
};
use crate::error::CalendarError;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A Gregorian calendar date as supplied by an RTC or NTP driver.
///
/// Fields are not validated: arithmetic on an impossible date (day 35, month 0)
/// still runs and yields a well-defined but meaningless result. Use
/// [`CalendarDate::checked`] when the input needs validating.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct CalendarDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl CalendarDate {
    pub const fn new(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a date, validating the month and the day against the month length
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` or `CalendarError::InvalidDay`.
    pub fn checked(year: u16, month: u8, day: u8) -> Result<Self, CalendarError> {
        Month::new(month)?;
        if day == 0 || day > days_in_month(year, month) {
            return Err(CalendarError::InvalidDay { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    pub fn day_of_year(&self) -> u16 {
        calendar::day_of_year(self.year, self.month, self.day)
    }

    pub fn weekday(&self) -> Weekday {
        Weekday::from_sunday(calendar::day_of_week(self.year, self.month, self.day))
    }

    /// ISO 8601 week number (1..=53)
    pub fn iso_week(&self) -> u8 {
        calendar::week_of_year(self.year, self.month, self.day)
    }

    pub fn days_left_in_year(&self) -> u16 {
        calendar::days_left_in_year(self.year, self.month, self.day)
    }

    /// Days from `self` to `later`, or 0 when `self` does not precede it.
    pub fn days_until(&self, later: &Self) -> u32 {
        calendar::days_between(*self, *later)
    }
}

/// A time of day. Components are not range checked.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    Serialize,
    Deserialize,
)]
#[display(fmt = "{:02}:{:02}:{:02}", hour, minute, second)]
pub struct ClockTime {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl ClockTime {
    pub const fn new(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    /// Folds a second count into a 24-hour day.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_seconds(seconds: u32) -> Self {
        Self {
            hour: ((seconds / SECONDS_PER_HOUR) % 24) as u8,
            minute: ((seconds / SECONDS_PER_MINUTE) % 60) as u8,
            second: (seconds % SECONDS_PER_MINUTE) as u8,
        }
    }

    pub const fn seconds_from_midnight(&self) -> u32 {
        calendar::seconds_from_midnight(self.hour, self.minute, self.second)
    }

    pub const fn minutes_from_midnight(&self) -> u16 {
        calendar::minutes_from_midnight(self.hour, self.minute)
    }
}

/// A calendar date paired with a time of day.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Serialize, Deserialize,
)]
#[display(fmt = "{}T{}", date, time)]
pub struct DateTime {
    pub date: CalendarDate,
    pub time: ClockTime,
}

impl DateTime {
    pub const fn new(date: CalendarDate, time: ClockTime) -> Self {
        Self { date, time }
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, CalendarError> {
        let non_zero = NonZeroU8::new(value).ok_or(CalendarError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(CalendarError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Three-letter English name, e.g. `"Jan"`
    pub const fn short_name(self) -> &'static str {
        MONTH_NAMES_SHORT[self.index()]
    }

    pub const fn long_name(self) -> &'static str {
        MONTH_NAMES_LONG[self.index()]
    }

    const fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

impl TryFrom<u8> for Month {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.long_name())
    }
}

/// Day of the week, indexed Sunday = 0 through Saturday = 6.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
pub enum Weekday {
    #[display(fmt = "Sunday")]
    Sunday,
    #[display(fmt = "Monday")]
    Monday,
    #[display(fmt = "Tuesday")]
    Tuesday,
    #[display(fmt = "Wednesday")]
    Wednesday,
    #[display(fmt = "Thursday")]
    Thursday,
    #[display(fmt = "Friday")]
    Friday,
    #[display(fmt = "Saturday")]
    Saturday,
}

impl Weekday {
    const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// # Errors
    /// Returns `CalendarError::InvalidWeekday` for an index of 7 or more.
    pub fn from_index(index: u8) -> Result<Self, CalendarError> {
        Self::ALL
            .get(usize::from(index))
            .copied()
            .ok_or(CalendarError::InvalidWeekday(index))
    }

    // Callers pass the output of `day_of_week`, which is always below 7.
    pub(crate) const fn from_sunday(index: u8) -> Self {
        Self::ALL[(index % DAYS_PER_WEEK) as usize]
    }

    /// Sunday-first index (0..=6)
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// ISO 8601 weekday number, Monday = 1 through Sunday = 7
    pub const fn iso_number(self) -> u8 {
        match self {
            Self::Sunday => 7,
            other => other as u8,
        }
    }

    pub const fn short_name(self) -> &'static str {
        WEEKDAY_NAMES_SHORT[self as usize]
    }

    pub const fn long_name(self) -> &'static str {
        WEEKDAY_NAMES_LONG[self as usize]
    }
}

/// Half of a 12-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Meridiem {
    #[display(fmt = "AM")]
    Am,
    #[display(fmt = "PM")]
    Pm,
}

impl Meridiem {
    pub const fn of_hour(hour: u8) -> Self {
        if calendar::is_pm(hour) {
            Self::Pm
        } else {
            Self::Am
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Am => "AM",
            Self::Pm => "PM",
        }
    }
}

impl TryFrom<char> for Meridiem {
    type Error = CalendarError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'A' | 'a' => Ok(Self::Am),
            'P' | 'p' => Ok(Self::Pm),
            other => Err(CalendarError::InvalidMeridiem(other)),
        }
    }
}
