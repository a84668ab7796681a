//! Parsing of user-supplied date strings.
//!
//! Date pickers emit the compact `DDMMYYYY` form; typed input tends to
//! arrive with separators instead. Both are accepted here, plus the ISO
//! order for people who think year-first.

use crate::error::{Error, Result};
use crate::model::date::CalendarDate;

/// Parses a birth date from any of the accepted shapes:
///
/// * `DDMMYYYY`: compact picker output, exactly 8 digits
/// * `DD-MM-YYYY` / `DD/MM/YYYY` / `DD.MM.YYYY`
/// * `YYYY-MM-DD` / `YYYY/MM/DD` / `YYYY.MM.DD`
///
/// The year must always be 4 digits; that is what disambiguates the ISO
/// order from the day-first one. Component validation (month length, leap
/// days) happens in [`CalendarDate::from_dmy`], so `30-02-2001` fails with
/// an [`Error::InvalidDate`] naming the month length rather than a format
/// error.
///
/// ```
/// use age_insight::parse_date;
///
/// let from_picker = parse_date("01061992").unwrap();
/// let from_keyboard = parse_date("01-06-1992").unwrap();
/// let iso = parse_date("1992-06-01").unwrap();
/// assert_eq!(from_picker, from_keyboard);
/// assert_eq!(from_picker, iso);
/// ```
pub fn parse_date(input: &str) -> Result<CalendarDate> {
    let trimmed = input.trim();

    if trimmed.len() == 8 && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return compact(trimmed);
    }

    let parts: Vec<&str> = trimmed.split(['-', '/', '.']).collect();
    if parts.len() != 3 || parts.iter().any(|p| p.is_empty()) {
        return Err(format_error(input));
    }

    let (day, month, year) = if parts[0].len() == 4 {
        (parts[2], parts[1], parts[0])
    } else {
        (parts[0], parts[1], parts[2])
    };
    if year.len() != 4 {
        return Err(format_error(input));
    }

    let day = component(day, input)?;
    let month = component(month, input)?;
    let year = component(year, input)? as i32;
    CalendarDate::from_dmy(day, month, year)
}

fn compact(digits: &str) -> Result<CalendarDate> {
    // Slicing is safe: all 8 bytes are ASCII digits.
    let day = digits[0..2].parse::<u32>().map_err(|_| format_error(digits))?;
    let month = digits[2..4].parse::<u32>().map_err(|_| format_error(digits))?;
    let year = digits[4..8].parse::<i32>().map_err(|_| format_error(digits))?;
    CalendarDate::from_dmy(day, month, year)
}

fn component(text: &str, input: &str) -> Result<u32> {
    if text.len() > 4 {
        return Err(format_error(input));
    }
    text.parse::<u32>().map_err(|_| format_error(input))
}

fn format_error(input: &str) -> Error {
    Error::DateFormat {
        input: input.to_string(),
    }
}
