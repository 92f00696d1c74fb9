//! Small shared utilities.

pub mod dates;

pub use dates::{days_between, days_until, parse_console_date};
