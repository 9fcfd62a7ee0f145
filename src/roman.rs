//! Roman numeral encoding and the Roman numeral clock.

use crate::calendar::to_12_hour;
use crate::consts::{MAX_ROMAN, ROMAN_NUMERALS, ROMAN_ZERO};
use crate::error::CalendarError;
use tracing::debug;

/// Encodes `value` as Roman numerals.
///
/// Zero is written `N`. Values up to 10000 are accepted; past 3999 the
/// thousands are simply repeated (`9000` is nine `M`s).
///
/// # Errors
/// Returns `CalendarError::RomanTooLarge` above 10000.
pub fn to_roman(value: u16) -> Result<String, CalendarError> {
    if value > MAX_ROMAN {
        debug!(value, "roman numeral input above ceiling");
        return Err(CalendarError::RomanTooLarge(value));
    }
    Ok(encode(value))
}

fn encode(value: u16) -> String {
    if value == 0 {
        return ROMAN_ZERO.to_owned();
    }

    let mut remaining = value;
    let mut out = String::new();
    for &(weight, symbol) in &ROMAN_NUMERALS {
        while remaining >= weight {
            remaining -= weight;
            out.push_str(symbol);
        }
    }
    out
}

/// Renders `hour:minute` in Roman numerals on a 24-hour dial, e.g. `XIV:V`.
pub fn roman_clock(hour: u8, minute: u8) -> String {
    format!("{}:{}", encode(u16::from(hour)), encode(u16::from(minute)))
}

/// Like [`roman_clock`] with the hour folded onto a 12-hour dial.
pub fn roman_clock_12(hour: u8, minute: u8) -> String {
    roman_clock(to_12_hour(hour), minute)
}
