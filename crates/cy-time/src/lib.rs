//! # cy-time
//!
//! Gregorian dates, weekdays, months, and the computation of Easter, Advent
//! and the bounds of the ecclesiastical year.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Advent Sunday and ecclesiastical-year bounds.
pub mod advent;

/// `Date` type.
pub mod date;

/// Easter Day and its fixed offsets.
pub mod easter;

/// Months of the year.
pub mod month;

/// Days of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use advent::{advent_sunday, EcclesiasticalYear};
pub use date::{Date, DateRange};
pub use easter::Easter;
pub use month::Month;
pub use weekday::Weekday;
