//! # cy-rules
//!
//! Commemoration rule records and their expansion into dates.
//!
//! A calendar's rules are loaded through a [`RuleSource`] into a
//! [`CommemorationRuleSet`], which places every commemoration on its date
//! for a given civil year.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Liturgical colors.
pub mod color;

/// Commemorations, dating rules, and the `Observance` trait.
pub mod commemoration;

/// Commemoration ranks.
pub mod rank;

/// Lectionary cycles and mass readings.
pub mod readings;

/// Rule sets and occurrences.
pub mod rule_set;

/// Seasons and numbered propers.
pub mod season;

/// Rule storage read interface.
pub mod source;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use color::Color;
pub use commemoration::{Commemoration, DateRule, Observance, RuleKind, MAX_WEEKS_FROM_ANCHOR};
pub use rank::{CommemorationRank, MAX_PRECEDENCE, MIN_PRECEDENCE};
pub use readings::{MassReading, SundayCycle};
pub use rule_set::{CommemorationRuleSet, Occurrence};
pub use season::{MonthDay, Proper, Season};
pub use source::{
    CalendarRows, CommemorationRow, InMemoryRuleSource, ProperRow, RuleSource, SanctoraleBasedRow,
    SanctoraleRow, SeasonRow, TemporaleRow,
};
