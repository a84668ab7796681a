//! Calendar dates with strict Gregorian validation.
//!
//! A [`CalendarDate`] can only be constructed from components that name a
//! real day, so everything downstream (age arithmetic, rendering) can trust
//! its invariants instead of re-checking them.

use crate::error::{Error, Result};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;

/// A validated (day, month, year) triple identifying one calendar day.
///
/// Ordering is chronological. The supported year range is 1..=9999, wide
/// enough for any birth date a 4-digit picker can produce.
///
/// # Example
///
/// ```
/// use age_insight::CalendarDate;
///
/// let date = CalendarDate::from_dmy(15, 6, 1990).unwrap();
/// assert_eq!((date.day(), date.month(), date.year()), (15, 6, 1990));
/// assert!(CalendarDate::from_dmy(30, 2, 1990).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CalendarDate {
    // Field order carries the derived Ord.
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    /// Builds a date from day/month/year components (day first, the order
    /// date pickers emit).
    ///
    /// Fails with [`Error::InvalidDate`] when any component is outside its
    /// calendar-valid range, including day counts that overrun the actual
    /// month length (29 February outside leap years, 31 April, ...).
    pub fn from_dmy(day: u32, month: u32, year: i32) -> Result<Self> {
        if !(1..=9999).contains(&year) {
            return Err(invalid(day, month, year, "year must be within 1..=9999"));
        }
        if !(1..=12).contains(&month) {
            return Err(invalid(day, month, year, "month must be within 1..=12"));
        }
        let len = days_in_month(year, month);
        if day == 0 || day > len {
            return Err(Error::InvalidDate {
                day,
                month,
                year,
                reason: format!("month {month:02} of {year} has {len} days"),
            });
        }
        Ok(Self { year, month, day })
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Conversion into chrono's date type for calendar subtraction.
    pub fn to_naive(&self) -> NaiveDate {
        // The constructor already proved the components form a real day.
        NaiveDate::from_ymd_opt(self.year, self.month, self.day).expect("validated on construction")
    }

    /// Conversion back from chrono's date type.
    ///
    /// Fails only when the year falls outside 1..=9999; chrono admits a far
    /// wider range than the 4-digit one supported here.
    pub fn from_naive(date: NaiveDate) -> Result<Self> {
        Self::from_dmy(date.day(), date.month(), date.year())
    }

    /// The compact `DDMMYYYY` form date pickers emit.
    ///
    /// ```
    /// use age_insight::CalendarDate;
    ///
    /// let date = CalendarDate::from_dmy(1, 6, 1992).unwrap();
    /// assert_eq!(date.compact(), "01061992");
    /// ```
    pub fn compact(&self) -> String {
        format!("{:02}{:02}{:04}", self.day, self.month, self.year)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}-{:04}", self.day, self.month, self.year)
    }
}

fn invalid(day: u32, month: u32, year: i32, reason: &str) -> Error {
    Error::InvalidDate {
        day,
        month,
        year,
        reason: reason.to_string(),
    }
}

/// Number of days in a given year/month.
///
/// Months are 1-indexed; anything outside 1..=12 yields 0 so that callers
/// validating a day against the result reject it.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Gregorian leap-year rule, century exceptions included.
///
/// A bare `year % 4` shortcut overcounts at century boundaries: 1900 and
/// 2100 are common years.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
