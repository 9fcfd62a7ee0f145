/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Number of weekdays, Sunday through Saturday
pub const DAYS_PER_WEEK: u8 = 7;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Month lengths for a common year, January first
pub const DAYS_IN_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Month lengths for a leap year, January first
pub const DAYS_IN_MONTH_LEAP: [u8; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

pub const MONTH_NAMES_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub const MONTH_NAMES_LONG: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Weekday names, Sunday first (index 0)
pub const WEEKDAY_NAMES_SHORT: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Weekday names, Sunday first (index 0)
pub const WEEKDAY_NAMES_LONG: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Per-month offsets for Sakamoto's day-of-week formula
pub(crate) const WEEKDAY_MONTH_OFFSET: [u8; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

/// Roman symbols and their values, largest first
pub(crate) const ROMAN_NUMERALS: [(u16, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Largest value accepted by the Roman numeral encoder (inclusive)
pub const MAX_ROMAN: u16 = 10_000;

/// Roman rendering of zero ("nulla")
pub const ROMAN_ZERO: &str = "N";

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

pub const DAYS_IN_COMMON_YEAR: u16 = 365;
pub const DAYS_IN_LEAP_YEAR: u16 = 366;

pub const SECONDS_PER_MINUTE: u32 = 60;
pub const SECONDS_PER_HOUR: u32 = 3_600;
pub const SECONDS_PER_DAY: u32 = 86_400;
/// Fixed 365-day year used by the leap-unaware duration arithmetic
pub const SECONDS_PER_COMMON_YEAR: u32 = 31_536_000;

/// First year of the Unix epoch
pub const UNIX_EPOCH_YEAR: u16 = 1970;
/// Anchor year of the forward Unix conversion
pub const UNIX_ANCHOR_YEAR: u16 = 2000;
/// Seconds from 1970-01-01T00:00:00Z to 2000-01-01T00:00:00Z
pub const UNIX_SECONDS_AT_2000: u32 = 946_684_800;

/// Date component separator in rendered dates
pub const DATE_SEPARATOR: char = '/';
/// Clock component separator in rendered clocks
pub const CLOCK_SEPARATOR: char = ':';
/// Joins the date and clock parts of a rendered date-time
pub const DATE_TIME_SEPARATOR: &str = " - ";

/// Sentinel returned by short name lookups for an invalid index
pub const SHORT_NAME_ERROR: &str = "Err";
/// Sentinel returned by long name lookups for an invalid index
pub const LONG_NAME_ERROR: &str = "Error";
/// Sentinel returned by the Roman encoder above [`MAX_ROMAN`]
pub const ROMAN_TOO_BIG: &str = "Error, To Big.";
