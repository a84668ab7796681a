pub mod cli;
pub mod clock;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod report;

// Re-export the core types so callers can use `age_insight::CalendarDate`.
pub use clock::{Clock, SystemClock, WallClock, CLOCK_FORMAT};
pub use error::{Error, Result};
pub use model::{
    compute_age, days_in_month, elapsed_days, is_leap_year, parse_date, AgeBreakdown, CalendarDate,
};
pub use report::AgeReport;
