//! # cy-resolver
//!
//! Resolution of a calendar's rules into Church Years: one
//! [`CalendarDate`] per day with its commemorations, evening commemorations,
//! season, color, fasting status, feria, proper, collects and mass readings.
//!
//! Building is pure and single-threaded; independent builds may run
//! concurrently.  [`ChurchYearProvider`] adds read-through caching.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Built-year cache and read-through provider.
pub mod cache;

/// Per-day records.
pub mod calendar_date;

/// Civil-year view over two Church Years.
pub mod calendar_year;

/// The Church Year build pipeline.
pub mod church_year;

/// Lectionary and office cycles.
pub mod cycles;

/// Fast days.
pub mod fasting;

/// Ferial weekdays.
pub mod feria;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use cache::{CacheKey, ChurchYearCache, ChurchYearProvider, InMemoryCache, NoCache};
pub use calendar_date::{CalendarDate, Collects, Entry};
pub use calendar_year::CalendarYear;
pub use church_year::ChurchYear;
pub use cycles::{Cycles, OfficeYear, WeekdayCycle};
pub use fasting::FastDay;
pub use feria::Feria;
