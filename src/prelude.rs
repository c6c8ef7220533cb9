//! Prelude module for the litcal crate.
//!
//! Re-exports commonly used derive macros from derive_more and the chrono
//! items every builder touches.

pub use derive_more::{Deref, Display};

pub use chrono::{Datelike, Days, NaiveDate, Weekday};
