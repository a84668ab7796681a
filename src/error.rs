//! Error types shared across the crate.
//!
//! The library surfaces typed failures instead of silently producing wrong
//! numbers: malformed input is rejected at the parser, out-of-range
//! components at date construction, and reversed date pairs at the age
//! computation.

use crate::model::CalendarDate;
use thiserror::Error;

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Day/month/year fall outside calendar-valid ranges (e.g. 30 February).
    #[error("invalid date {day:02}-{month:02}-{year:04}: {reason}")]
    InvalidDate {
        day: u32,
        month: u32,
        year: i32,
        reason: String,
    },

    /// Input text is not recognizable as any supported date format.
    #[error(
        "unrecognized date {input:?} (expected DDMMYYYY, DD-MM-YYYY, DD/MM/YYYY, \
         DD.MM.YYYY or YYYY-MM-DD with a 4-digit year)"
    )]
    DateFormat { input: String },

    /// The birth date lies after the reference date; the age would be
    /// negative, so the pair is rejected outright.
    #[error("birth date {birth} is later than current date {current}")]
    BirthAfterCurrent {
        birth: CalendarDate,
        current: CalendarDate,
    },

    /// A display collaborator (clock zone, configuration, logging) could not
    /// be set up.
    #[error("initialization failed: {0}")]
    Initialization(String),
}
