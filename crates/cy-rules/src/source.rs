//! Rule storage read interface.
//!
//! Persistent storage of rule records lives outside this workspace.  It is
//! reached through [`RuleSource`], which returns flat, typed rows scoped by
//! calendar abbreviation (e.g. `"ACNA_BCP2019"`).  Rows reference ranks and
//! commemorations by name; [`CommemorationRuleSet::load`] resolves those
//! names into shared handles.
//!
//! [`InMemoryRuleSource`] is a ready-made implementation backed by a map,
//! suitable for tests and for hosts that load rows from JSON (with the
//! `serde` feature).
//!
//! [`CommemorationRuleSet::load`]: crate::rule_set::CommemorationRuleSet::load

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::rank::CommemorationRank;
use crate::readings::MassReading;
use cy_core::errors::{Error, Result};

/// Fields shared by every commemoration row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CommemorationRow {
    /// Stable identifier, if storage assigns one.
    pub uuid: Option<Uuid>,
    /// Name.
    pub name: String,
    /// Rank name.
    pub rank: String,
    /// Principal color.
    pub color: Option<String>,
    /// Additional color.
    pub additional_color: Option<String>,
    /// Alternate color.
    pub alternate_color: Option<String>,
    /// Second alternate color.
    pub alternate_color_2: Option<String>,
    /// Collect.
    pub collect: Option<String>,
    /// Alternate collect.
    pub alternate_collect: Option<String>,
    /// Eve collect.
    pub eve_collect: Option<String>,
    /// Name of the commemoration this one cannot occur after.
    pub cannot_occur_after: Option<String>,
    /// Mass readings.
    pub mass_readings: Vec<MassReading>,
}

impl CommemorationRow {
    /// A row with just a name and rank.
    pub fn new(name: impl Into<String>, rank: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rank: rank.into(),
            ..Self::default()
        }
    }
}

/// A fixed-date commemoration row.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SanctoraleRow {
    /// Shared fields.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub common: CommemorationRow,
    /// Month.
    pub month: u8,
    /// Day.
    pub day: u8,
}

/// An Easter-relative commemoration row.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TemporaleRow {
    /// Shared fields.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub common: CommemorationRow,
    /// Signed offset from Easter Day.
    pub days_after_easter: i32,
}

/// A weekday-after-anchor commemoration row.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SanctoraleBasedRow {
    /// Shared fields.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub common: CommemorationRow,
    /// Weekday, 0 = Sunday … 6 = Saturday.
    pub weekday: u8,
    /// Which occurrence after the anchor (negative = before).
    pub number_after: i32,
    /// Anchor month.
    pub month_after: u8,
    /// Anchor day.
    pub day_after: u8,
}

/// A season row.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SeasonRow {
    /// Position within the year.
    pub order: u32,
    /// Name.
    pub name: String,
    /// Name of the commemoration opening the season.
    pub start_commemoration: String,
    /// Default color.
    pub color: String,
    /// Alternate color.
    #[cfg_attr(feature = "serde", serde(default))]
    pub alternate_color: Option<String>,
    /// Rank name for ferial weekdays.
    pub rank: String,
}

/// A proper row, bounded by month/day.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProperRow {
    /// Proper number.
    pub number: u8,
    /// Start month.
    pub start_month: u8,
    /// Start day.
    pub start_day: u8,
    /// End month.
    pub end_month: u8,
    /// End day.
    pub end_day: u8,
    /// Collect.
    #[cfg_attr(feature = "serde", serde(default))]
    pub collect: Option<String>,
}

/// Read interface to persisted rule records.
pub trait RuleSource {
    /// Every rank of `calendar`.
    fn ranks(&self, calendar: &str) -> Result<Vec<CommemorationRank>>;

    /// Fixed-date commemorations of `calendar`.
    fn sanctorale(&self, calendar: &str) -> Result<Vec<SanctoraleRow>>;

    /// Easter-relative commemorations of `calendar`.
    fn temporale(&self, calendar: &str) -> Result<Vec<TemporaleRow>>;

    /// Weekday-after-anchor commemorations of `calendar`.
    fn sanctorale_based(&self, calendar: &str) -> Result<Vec<SanctoraleBasedRow>>;

    /// Seasons of `calendar`.
    fn seasons(&self, calendar: &str) -> Result<Vec<SeasonRow>>;

    /// Propers of `calendar`.
    fn propers(&self, calendar: &str) -> Result<Vec<ProperRow>>;
}

/// Every row of one calendar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CalendarRows {
    /// Ranks.
    pub ranks: Vec<CommemorationRank>,
    /// Fixed-date commemorations.
    pub sanctorale: Vec<SanctoraleRow>,
    /// Easter-relative commemorations.
    pub temporale: Vec<TemporaleRow>,
    /// Weekday-after-anchor commemorations.
    pub sanctorale_based: Vec<SanctoraleBasedRow>,
    /// Seasons.
    pub seasons: Vec<SeasonRow>,
    /// Propers.
    pub propers: Vec<ProperRow>,
}

/// A [`RuleSource`] holding rows in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRuleSource {
    calendars: HashMap<String, CalendarRows>,
}

impl InMemoryRuleSource {
    /// An empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the rows of `calendar`.
    pub fn insert(&mut self, calendar: impl Into<String>, rows: CalendarRows) {
        self.calendars.insert(calendar.into(), rows);
    }

    /// Builder-style [`insert`][Self::insert].
    pub fn with_calendar(mut self, calendar: impl Into<String>, rows: CalendarRows) -> Self {
        self.insert(calendar, rows);
        self
    }

    /// Abbreviations of every calendar held.
    pub fn calendars(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.calendars.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    fn rows(&self, calendar: &str) -> Result<&CalendarRows> {
        self.calendars
            .get(calendar)
            .ok_or_else(|| Error::UnknownCalendar(calendar.to_string()))
    }
}

impl RuleSource for InMemoryRuleSource {
    fn ranks(&self, calendar: &str) -> Result<Vec<CommemorationRank>> {
        Ok(self.rows(calendar)?.ranks.clone())
    }

    fn sanctorale(&self, calendar: &str) -> Result<Vec<SanctoraleRow>> {
        Ok(self.rows(calendar)?.sanctorale.clone())
    }

    fn temporale(&self, calendar: &str) -> Result<Vec<TemporaleRow>> {
        Ok(self.rows(calendar)?.temporale.clone())
    }

    fn sanctorale_based(&self, calendar: &str) -> Result<Vec<SanctoraleBasedRow>> {
        Ok(self.rows(calendar)?.sanctorale_based.clone())
    }

    fn seasons(&self, calendar: &str) -> Result<Vec<SeasonRow>> {
        Ok(self.rows(calendar)?.seasons.clone())
    }

    fn propers(&self, calendar: &str) -> Result<Vec<ProperRow>> {
        Ok(self.rows(calendar)?.propers.clone())
    }
}
