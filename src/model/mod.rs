// Aggregates the split model files
pub mod age;
pub mod date;
pub mod parser;

pub use age::{compute_age, elapsed_days, AgeBreakdown};
pub use date::{days_in_month, is_leap_year, CalendarDate};
pub use parser::parse_date;
