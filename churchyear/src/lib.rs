//! # churchyear
//!
//! Liturgical calendar resolution for the Anglican tradition: given a rule
//! set and a year, produce every day's commemorations, season, color, fast
//! status, collects and readings.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `cy-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use churchyear::core::ResolverSettings;
//! use churchyear::rules::{
//!     CalendarRows, CommemorationRank, CommemorationRow, CommemorationRuleSet,
//!     InMemoryRuleSource, SanctoraleBasedRow, SeasonRow,
//! };
//! use churchyear::resolver::ChurchYearProvider;
//! use churchyear::time::Date;
//!
//! let rows = CalendarRows {
//!     ranks: vec![
//!         CommemorationRank::new("SUNDAY", "Sunday", 2, true)?,
//!         CommemorationRank::new("FERIA", "Weekday", 8, false)?,
//!     ],
//!     sanctorale_based: vec![SanctoraleBasedRow {
//!         common: CommemorationRow::new("The First Sunday of Advent", "SUNDAY"),
//!         weekday: 0,
//!         number_after: -4,
//!         month_after: 12,
//!         day_after: 25,
//!     }],
//!     seasons: vec![SeasonRow {
//!         order: 1,
//!         name: "Advent".into(),
//!         start_commemoration: "The First Sunday of Advent".into(),
//!         color: "violet".into(),
//!         alternate_color: None,
//!         rank: "FERIA".into(),
//!     }],
//!     ..CalendarRows::default()
//! };
//! let source = InMemoryRuleSource::new().with_calendar("DEMO", rows);
//! let rules = Arc::new(CommemorationRuleSet::load(&source, "DEMO")?);
//!
//! let provider = ChurchYearProvider::new(rules, ResolverSettings::default());
//! let day = provider.calendar_date(Date::from_ymd(2024, 12, 1)?)?;
//! assert_eq!(day.season().name, "Advent");
//! # Ok::<(), churchyear::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and resolver settings.
pub use cy_core as core;

/// Dates, weekdays, months, Easter and Advent.
pub use cy_time as time;

/// Ranks, commemoration rules, seasons, propers and rule sources.
pub use cy_rules as rules;

/// Church Year resolution, calendar years and caching.
pub use cy_resolver as resolver;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use cy_core::{Error, ResolverSettings, Result};
pub use cy_resolver::{CalendarDate, CalendarYear, ChurchYear, ChurchYearProvider};
pub use cy_rules::{CommemorationRuleSet, Observance};
pub use cy_time::Date;
