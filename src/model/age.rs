//! Elapsed-time arithmetic between two calendar dates.

use crate::error::{Error, Result};
use crate::model::date::{days_in_month, CalendarDate};
use serde::Serialize;
use std::fmt;

/// Elapsed time between two dates, broken down calendar-style.
///
/// `days` is always below the length of the longest month and `months`
/// below a year, so the three components read like an age statement:
/// "26 days, 11 months, 33 years".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeBreakdown {
    pub days: u32,
    pub months: u32,
    pub years: u32,
}

impl fmt::Display for AgeBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} day{}, {} month{}, {} year{}",
            self.days,
            plural(self.days),
            self.months,
            plural(self.months),
            self.years,
            plural(self.years)
        )
    }
}

fn plural(count: u32) -> &'static str {
    if count == 1 { "" } else { "s" }
}

/// Calendar-aware difference from `birth` up to `current`.
///
/// Works componentwise and borrows on underflow: a negative day count
/// borrows the length of the month preceding `current` (stepping further
/// back if that month is too short to cover the deficit), and a negative
/// month count borrows 12 from the years. Equal dates yield all zeroes.
///
/// # Errors
///
/// [`Error::BirthAfterCurrent`] when `birth` is later than `current`.
///
/// # Example
///
/// ```
/// use age_insight::{compute_age, CalendarDate};
///
/// let birth = CalendarDate::from_dmy(15, 6, 1990).unwrap();
/// let current = CalendarDate::from_dmy(10, 6, 2024).unwrap();
/// let age = compute_age(birth, current).unwrap();
/// assert_eq!((age.days, age.months, age.years), (26, 11, 33));
/// ```
pub fn compute_age(birth: CalendarDate, current: CalendarDate) -> Result<AgeBreakdown> {
    if birth > current {
        return Err(Error::BirthAfterCurrent { birth, current });
    }

    let mut days = current.day() as i32 - birth.day() as i32;
    let mut months = current.month() as i32 - birth.month() as i32;
    let mut years = current.year() - birth.year();

    // Borrow month lengths walking back from the month before `current`.
    // Two iterations at most: consecutive months cover any day deficit.
    let mut year = current.year();
    let mut month = current.month();
    while days < 0 {
        if month == 1 {
            year -= 1;
            month = 12;
        } else {
            month -= 1;
        }
        days += days_in_month(year, month) as i32;
        months -= 1;
    }

    if months < 0 {
        months += 12;
        years -= 1;
    }

    debug_assert!((0..=30).contains(&days));
    debug_assert!((0..=11).contains(&months));
    debug_assert!(years >= 0);

    Ok(AgeBreakdown {
        days: days as u32,
        months: months as u32,
        years: years as u32,
    })
}

/// Total days elapsed from `birth` to `current`.
///
/// The flat count the breakdown refines: exactly the number of midnights
/// crossed, so a leap day in between shows up here.
///
/// ```
/// use age_insight::{elapsed_days, CalendarDate};
///
/// let birth = CalendarDate::from_dmy(1, 1, 2000).unwrap();
/// let current = CalendarDate::from_dmy(1, 1, 2020).unwrap();
/// assert_eq!(elapsed_days(birth, current), 7305);
/// ```
pub fn elapsed_days(birth: CalendarDate, current: CalendarDate) -> i64 {
    (current.to_naive() - birth.to_naive()).num_days()
}
