//! Fixed-format rendering of dates, clocks and date-times.
//!
//! A [`Formatter`] owns its [`FormatConfig`], so callers with different
//! preferences each keep their own instance. Every operation returns a fresh
//! `String`.

use crate::calendar::to_12_hour;
use crate::consts::{
    CLOCK_SEPARATOR, DATE_SEPARATOR, DATE_TIME_SEPARATOR, MONTH_NAMES_SHORT, SHORT_NAME_ERROR,
};
use crate::convert::{day_of_year_to_date, gregorian_to_julian};
use crate::epoch::{from_unix_seconds, seconds_to_date_time, seconds_to_date_time_from};
use crate::error::CalendarError;
use crate::prelude::*;
use crate::types::{CalendarDate, ClockTime, DateTime, Meridiem};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};
use tracing::warn;

/// Order of the day, month and year fields in a rendered date.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
pub enum DateOrder {
    #[default]
    #[display(fmt = "DD/MM/YYYY")]
    DayMonthYear,
    #[display(fmt = "MM/DD/YYYY")]
    MonthDayYear,
    #[display(fmt = "YYYY/MM/DD")]
    YearMonthDay,
    #[display(fmt = "YYYY/DD/MM")]
    YearDayMonth,
}

impl DateOrder {
    /// Maps the numeric selector 1..=4 to an order.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::DayMonthYear),
            2 => Some(Self::MonthDayYear),
            3 => Some(Self::YearMonthDay),
            4 => Some(Self::YearDayMonth),
            _ => None,
        }
    }

    pub const fn code(self) -> u8 {
        match self {
            Self::DayMonthYear => 1,
            Self::MonthDayYear => 2,
            Self::YearMonthDay => 3,
            Self::YearDayMonth => 4,
        }
    }
}

/// How the month field of a date is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonthStyle {
    /// `09`
    #[default]
    Numeric,
    /// `Sep`
    Name,
}

/// Rendering preferences.
///
/// Deserializes from partial documents; missing fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    pub date_order: DateOrder,
    /// `false` renders date-time clocks as 12-hour with an AM/PM suffix
    pub clock_24_hour: bool,
    /// `01/01/2024` rather than `1/1/2024`
    pub pad_date: bool,
    /// `08:00` rather than `8:00`
    pub pad_hour: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            date_order: DateOrder::default(),
            clock_24_hour: true,
            pad_date: true,
            pad_hour: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Formatter {
    config: FormatConfig,
}

impl Formatter {
    pub const fn new(config: FormatConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Selects the date order by its numeric code (1..=4). Any other code
    /// restores the default day-month-year order.
    pub fn set_date_order_code(&mut self, code: u8) {
        self.config.date_order = DateOrder::from_code(code).unwrap_or_else(|| {
            warn!(code, "unknown date order code, using default");
            DateOrder::default()
        });
    }

    pub fn set_date_order(&mut self, order: DateOrder) {
        self.config.date_order = order;
    }

    pub fn set_clock_24_hour(&mut self, enabled: bool) {
        self.config.clock_24_hour = enabled;
    }

    pub fn set_pad_date(&mut self, enabled: bool) {
        self.config.pad_date = enabled;
    }

    pub fn set_pad_hour(&mut self, enabled: bool) {
        self.config.pad_hour = enabled;
    }

    /// Renders a date such as `11/09/2023` or `11/Sep/2023`.
    pub fn date(&self, date: CalendarDate, style: MonthStyle) -> String {
        self.render(date, None, style)
    }

    /// Renders a date-time such as `11/09/2023 - 08:30:15`.
    pub fn date_time(&self, value: &DateTime, style: MonthStyle) -> String {
        self.render(value.date, Some(value.time), style)
    }

    /// `HH:MM` or `HH:MM:SS`, 12-hour when the 24-hour flag is off.
    pub fn clock(&self, time: ClockTime, with_seconds: bool) -> String {
        self.render_clock(time, with_seconds, false)
    }

    /// Like [`Formatter::clock`], always 12-hour with an ` AM`/` PM` suffix.
    pub fn clock_am_pm(&self, time: ClockTime, with_seconds: bool) -> String {
        self.render_clock(time, with_seconds, true)
    }

    pub fn seconds_to_clock(&self, seconds: u32, with_seconds: bool) -> String {
        self.clock(ClockTime::from_seconds(seconds), with_seconds)
    }

    pub fn seconds_to_clock_am_pm(&self, seconds: u32, with_seconds: bool) -> String {
        self.clock_am_pm(ClockTime::from_seconds(seconds), with_seconds)
    }

    /// # Errors
    /// See [`from_unix_seconds`].
    pub fn unix_to_string(&self, seconds: u64, style: MonthStyle) -> Result<String, CalendarError> {
        Ok(self.date_time(&from_unix_seconds(seconds)?, style))
    }

    /// # Errors
    /// See [`seconds_to_date_time`].
    pub fn seconds_to_date_time_string(
        &self,
        seconds: u64,
        style: MonthStyle,
    ) -> Result<String, CalendarError> {
        Ok(self.date_time(&seconds_to_date_time(seconds)?, style))
    }

    /// # Errors
    /// See [`seconds_to_date_time_from`].
    pub fn seconds_to_date_time_from_string(
        &self,
        seconds: u64,
        base_year: u16,
        style: MonthStyle,
    ) -> Result<String, CalendarError> {
        Ok(self.date_time(&seconds_to_date_time_from(seconds, base_year)?, style))
    }

    pub fn day_of_year_to_date_string(&self, doy: u16, year: u16, style: MonthStyle) -> String {
        self.date(day_of_year_to_date(doy, year), style)
    }

    pub fn gregorian_to_julian_string(&self, date: CalendarDate, style: MonthStyle) -> String {
        self.date(gregorian_to_julian(date), style)
    }

    fn render(&self, date: CalendarDate, time: Option<ClockTime>, style: MonthStyle) -> String {
        DateText {
            config: &self.config,
            date,
            time,
            style,
        }
        .to_string()
    }

    fn render_clock(&self, time: ClockTime, with_seconds: bool, am_pm: bool) -> String {
        ClockText {
            config: &self.config,
            time,
            with_seconds,
            am_pm,
        }
        .to_string()
    }
}

fn write_number(f: &mut fmt::Formatter<'_>, value: u8, pad: bool) -> fmt::Result {
    if pad {
        write!(f, "{value:02}")
    } else {
        write!(f, "{value}")
    }
}

struct DateText<'a> {
    config: &'a FormatConfig,
    date: CalendarDate,
    time: Option<ClockTime>,
    style: MonthStyle,
}

impl DateText<'_> {
    fn day(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_number(f, self.date.day, self.config.pad_date)
    }

    fn month(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.style {
            MonthStyle::Numeric => write_number(f, self.date.month, self.config.pad_date),
            MonthStyle::Name => {
                let name = usize::from(self.date.month)
                    .checked_sub(1)
                    .and_then(|index| MONTH_NAMES_SHORT.get(index))
                    .copied()
                    .unwrap_or(SHORT_NAME_ERROR);
                f.write_str(name)
            }
        }
    }

    // never zero-padded: year 7 is "7"
    fn year(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date.year)
    }

    fn clock(&self, f: &mut fmt::Formatter<'_>, time: ClockTime) -> fmt::Result {
        let hour = if self.config.clock_24_hour {
            time.hour
        } else {
            to_12_hour(time.hour)
        };
        write_number(f, hour, self.config.pad_hour)?;
        write!(
            f,
            "{CLOCK_SEPARATOR}{:02}{CLOCK_SEPARATOR}{:02}",
            time.minute, time.second
        )?;
        if !self.config.clock_24_hour {
            write!(f, " {}", Meridiem::of_hour(time.hour))?;
        }
        Ok(())
    }
}

impl fmt::Display for DateText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: [fn(&Self, &mut fmt::Formatter<'_>) -> fmt::Result; 3] = match self.config.date_order {
            DateOrder::DayMonthYear => [Self::day, Self::month, Self::year],
            DateOrder::MonthDayYear => [Self::month, Self::day, Self::year],
            DateOrder::YearMonthDay => [Self::year, Self::month, Self::day],
            DateOrder::YearDayMonth => [Self::year, Self::day, Self::month],
        };

        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                f.write_char(DATE_SEPARATOR)?;
            }
            field(self, f)?;
        }

        if let Some(time) = self.time {
            f.write_str(DATE_TIME_SEPARATOR)?;
            self.clock(f, time)?;
        }
        Ok(())
    }
}

struct ClockText<'a> {
    config: &'a FormatConfig,
    time: ClockTime,
    with_seconds: bool,
    am_pm: bool,
}

impl fmt::Display for ClockText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ClockTime {
            hour,
            minute,
            second,
        } = self.time;
        let shown = if self.am_pm || !self.config.clock_24_hour {
            to_12_hour(hour)
        } else {
            hour
        };

        write_number(f, shown, self.config.pad_hour)?;
        write!(f, "{CLOCK_SEPARATOR}{minute:02}")?;
        if self.with_seconds {
            write!(f, "{CLOCK_SEPARATOR}{second:02}")?;
        }
        if self.am_pm {
            write!(f, " {}", Meridiem::of_hour(hour))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: u16, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day)
    }

    fn formatter_with(edit: impl FnOnce(&mut Formatter)) -> Formatter {
        let mut formatter = Formatter::default();
        edit(&mut formatter);
        formatter
    }

    #[test]
    fn test_default_config() {
        let config = FormatConfig::default();
        assert_eq!(config.date_order, DateOrder::DayMonthYear);
        assert!(config.clock_24_hour);
        assert!(config.pad_date);
        assert!(config.pad_hour);
    }

    #[test]
    fn test_date_default() {
        let f = Formatter::default();
        assert_eq!(f.date(date(2024, 1, 1), MonthStyle::Numeric), "01/01/2024");
        assert_eq!(f.date(date(2024, 1, 1), MonthStyle::Name), "01/Jan/2024");
    }

    #[test]
    fn test_date_orders() {
        let cases = [
            (1, "09/03/2024", "09/Mar/2024"),
            (2, "03/09/2024", "Mar/09/2024"),
            (3, "2024/03/09", "2024/Mar/09"),
            (4, "2024/09/03", "2024/09/Mar"),
        ];
        for (code, numeric, named) in cases {
            let f = formatter_with(|f| f.set_date_order_code(code));
            assert_eq!(f.date(date(2024, 3, 9), MonthStyle::Numeric), numeric);
            assert_eq!(f.date(date(2024, 3, 9), MonthStyle::Name), named);
        }
    }

    #[test]
    fn test_invalid_order_code_falls_back() {
        let mut f = Formatter::default();
        f.set_date_order(DateOrder::YearMonthDay);
        f.set_date_order_code(9);
        assert_eq!(f.config().date_order, DateOrder::DayMonthYear);
        f.set_date_order_code(0);
        assert_eq!(f.config().date_order, DateOrder::DayMonthYear);
    }

    #[test]
    fn test_date_without_padding() {
        let f = formatter_with(|f| f.set_pad_date(false));
        assert_eq!(f.date(date(2024, 1, 5), MonthStyle::Numeric), "5/1/2024");
        assert_eq!(f.date(date(2024, 11, 25), MonthStyle::Numeric), "25/11/2024");
    }

    #[test]
    fn test_year_is_not_padded() {
        let f = Formatter::default();
        assert_eq!(f.date(date(7, 1, 1), MonthStyle::Numeric), "01/01/7");
        assert_eq!(f.date(date(89, 1, 1), MonthStyle::Numeric), "01/01/89");
        assert_eq!(f.date(date(1005, 1, 1), MonthStyle::Numeric), "01/01/1005");
        assert_eq!(f.date(date(0, 1, 1), MonthStyle::Numeric), "01/01/0");
        assert_eq!(f.date(date(65535, 1, 1), MonthStyle::Numeric), "01/01/65535");
    }

    #[test]
    fn test_invalid_month_name() {
        let f = Formatter::default();
        assert_eq!(f.date(date(2024, 13, 1), MonthStyle::Name), "01/Err/2024");
        assert_eq!(f.date(date(2024, 0, 1), MonthStyle::Name), "01/Err/2024");
    }

    #[test]
    fn test_date_time_24_hour() {
        let f = Formatter::default();
        let value = DateTime::new(date(2023, 9, 11), ClockTime::new(8, 5, 3));
        assert_eq!(
            f.date_time(&value, MonthStyle::Numeric),
            "11/09/2023 - 08:05:03"
        );
        assert_eq!(
            f.date_time(&value, MonthStyle::Name),
            "11/Sep/2023 - 08:05:03"
        );
    }

    #[test]
    fn test_date_time_12_hour() {
        let f = formatter_with(|f| f.set_clock_24_hour(false));
        let at = |h| DateTime::new(date(2023, 9, 11), ClockTime::new(h, 0, 0));
        assert_eq!(
            f.date_time(&at(0), MonthStyle::Numeric),
            "11/09/2023 - 12:00:00 AM"
        );
        assert_eq!(
            f.date_time(&at(12), MonthStyle::Numeric),
            "11/09/2023 - 12:00:00 PM"
        );
        assert_eq!(
            f.date_time(&at(13), MonthStyle::Numeric),
            "11/09/2023 - 01:00:00 PM"
        );
    }

    #[test]
    fn test_date_time_unpadded_hour() {
        let f = formatter_with(|f| {
            f.set_clock_24_hour(false);
            f.set_pad_hour(false);
        });
        let value = DateTime::new(date(2023, 9, 11), ClockTime::new(21, 7, 0));
        assert_eq!(
            f.date_time(&value, MonthStyle::Numeric),
            "11/09/2023 - 9:07:00 PM"
        );
    }

    #[test]
    fn test_clock() {
        let f = Formatter::default();
        assert_eq!(f.clock(ClockTime::new(13, 5, 9), false), "13:05");
        assert_eq!(f.clock(ClockTime::new(13, 5, 9), true), "13:05:09");
        assert_eq!(f.clock(ClockTime::new(0, 0, 0), false), "00:00");
    }

    #[test]
    fn test_clock_12_hour_has_no_suffix() {
        let f = formatter_with(|f| f.set_clock_24_hour(false));
        assert_eq!(f.clock(ClockTime::new(0, 0, 0), false), "12:00");
        assert_eq!(f.clock(ClockTime::new(15, 30, 0), true), "03:30:00");
    }

    #[test]
    fn test_clock_am_pm() {
        let f = Formatter::default();
        assert_eq!(f.clock_am_pm(ClockTime::new(13, 5, 9), true), "01:05:09 PM");
        assert_eq!(f.clock_am_pm(ClockTime::new(0, 15, 0), false), "12:15 AM");
        assert_eq!(f.clock_am_pm(ClockTime::new(12, 0, 0), false), "12:00 PM");
        assert_eq!(f.clock_am_pm(ClockTime::new(11, 59, 0), false), "11:59 AM");

        let unpadded = formatter_with(|f| f.set_pad_hour(false));
        assert_eq!(
            unpadded.clock_am_pm(ClockTime::new(13, 5, 9), true),
            "1:05:09 PM"
        );
    }

    #[test]
    fn test_seconds_to_clock() {
        let f = Formatter::default();
        assert_eq!(f.seconds_to_clock(45_296, true), "12:34:56");
        assert_eq!(f.seconds_to_clock(45_296, false), "12:34");
        assert_eq!(f.seconds_to_clock_am_pm(45_296, false), "12:34 PM");
        assert_eq!(f.seconds_to_clock_am_pm(3_600 * 25, true), "01:00:00 AM");
    }

    #[test]
    fn test_unix_to_string() {
        let f = Formatter::default();
        assert_eq!(
            f.unix_to_string(0, MonthStyle::Numeric).unwrap(),
            "01/01/1970 - 00:00:00"
        );
        assert_eq!(
            f.unix_to_string(1_694_421_015, MonthStyle::Name).unwrap(),
            "11/Sep/2023 - 08:30:15"
        );
    }

    #[test]
    fn test_seconds_to_date_time_string() {
        let f = Formatter::default();
        assert_eq!(
            f.seconds_to_date_time_string(86_400 + 3_661, MonthStyle::Numeric)
                .unwrap(),
            "01/01/0 - 01:01:01"
        );
    }

    #[test]
    fn test_seconds_to_date_time_from_string() {
        let f = Formatter::default();
        let secs = crate::epoch::date_to_seconds(date(2024, 3, 15), 10, 30, 0);
        assert_eq!(
            f.seconds_to_date_time_from_string(secs, 2024, MonthStyle::Name)
                .unwrap(),
            "15/Mar/2024 - 10:30:00"
        );
    }

    #[test]
    fn test_day_of_year_to_date_string() {
        let f = Formatter::default();
        assert_eq!(
            f.day_of_year_to_date_string(60, 2024, MonthStyle::Name),
            "29/Feb/2024"
        );
        assert_eq!(
            f.day_of_year_to_date_string(60, 2023, MonthStyle::Numeric),
            "01/03/2023"
        );
    }

    #[test]
    fn test_gregorian_to_julian_string() {
        let f = Formatter::default();
        assert_eq!(
            f.gregorian_to_julian_string(date(2023, 9, 11), MonthStyle::Numeric),
            "29/08/2023"
        );
    }

    #[test]
    fn test_independent_formatters() {
        let us = formatter_with(|f| f.set_date_order(DateOrder::MonthDayYear));
        let iso = formatter_with(|f| f.set_date_order(DateOrder::YearMonthDay));
        let d = date(2024, 7, 4);
        assert_eq!(us.date(d, MonthStyle::Numeric), "07/04/2024");
        assert_eq!(iso.date(d, MonthStyle::Numeric), "2024/07/04");
    }

    #[test]
    fn test_config_serde() {
        let config = FormatConfig {
            date_order: DateOrder::YearMonthDay,
            clock_24_hour: false,
            pad_date: true,
            pad_hour: false,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(
            json,
            r#"{"date_order":"YearMonthDay","clock_24_hour":false,"pad_date":true,"pad_hour":false}"#
        );
        let parsed: FormatConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_config_partial_document() {
        let parsed: FormatConfig =
            serde_json::from_str(r#"{"clock_24_hour":false}"#).unwrap();
        assert_eq!(
            parsed,
            FormatConfig {
                clock_24_hour: false,
                ..FormatConfig::default()
            }
        );
    }

    #[test]
    fn test_date_order_codes() {
        for code in 1..=4 {
            let order = DateOrder::from_code(code).unwrap();
            assert_eq!(order.code(), code);
        }
        assert_eq!(DateOrder::from_code(5), None);
        assert_eq!(DateOrder::YearDayMonth.to_string(), "YYYY/DD/MM");
    }
}
