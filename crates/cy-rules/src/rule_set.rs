//! The rules of one calendar and their expansion into dated occurrences.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::color::Color;
use crate::commemoration::{Commemoration, DateRule, Observance, RuleKind};
use crate::rank::CommemorationRank;
use crate::season::{MonthDay, Proper, Season};
use crate::source::{CommemorationRow, RuleSource};
use cy_core::errors::{Error, Result};
use cy_time::date::check_year;
use cy_time::{Date, Weekday};

/// One commemoration placed on a concrete date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    /// The resolved date.
    pub date: Date,
    /// The commemoration.
    pub commemoration: Arc<Commemoration>,
    /// Position of the commemoration within the rule set; the last
    /// tie-break when ordering a day.
    pub sequence: usize,
}

impl Occurrence {
    /// Ordering key within a day: precedence, then rule kind, then sequence.
    pub fn sort_key(&self) -> (u8, RuleKind, usize) {
        (
            self.commemoration.precedence(),
            self.commemoration.kind(),
            self.sequence,
        )
    }
}

/// The rules of one calendar.
///
/// Commemorations are held in tie-break order (Temporale, SanctoraleBased,
/// Sanctorale, each in record order) and seasons in their declared order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommemorationRuleSet {
    calendar: String,
    commemorations: Vec<Arc<Commemoration>>,
    seasons: Vec<Season>,
    propers: Vec<Proper>,
}

impl CommemorationRuleSet {
    /// Assemble and validate a rule set.
    ///
    /// # Errors
    /// * [`Error::InvalidRule`] for a malformed rule or rank, or a season
    ///   start that names more than one commemoration.
    /// * [`Error::UnknownSeasonStart`] for a season start that names none.
    pub fn new(
        calendar: impl Into<String>,
        commemorations: Vec<Commemoration>,
        mut seasons: Vec<Season>,
        propers: Vec<Proper>,
    ) -> Result<Self> {
        for c in &commemorations {
            c.rank().validate()?;
            c.rule()
                .validate()
                .map_err(|e| Error::InvalidRule(format!("{}: {e}", c.name())))?;
        }
        let mut commemorations: Vec<Arc<Commemoration>> =
            commemorations.into_iter().map(Arc::new).collect();
        commemorations.sort_by_key(|c| c.kind());

        seasons.sort_by_key(|s| s.order);
        for season in &seasons {
            season.rank.validate()?;
            let matches = commemorations
                .iter()
                .filter(|c| c.name() == season.start_commemoration)
                .count();
            match matches {
                0 => {
                    return Err(Error::UnknownSeasonStart {
                        season: season.name.clone(),
                        commemoration: season.start_commemoration.clone(),
                    })
                }
                1 => {}
                n => {
                    return Err(Error::InvalidRule(format!(
                        "season {:?} starts on {:?}, which names {n} commemorations",
                        season.name, season.start_commemoration
                    )))
                }
            }
        }

        Ok(Self {
            calendar: calendar.into(),
            commemorations,
            seasons,
            propers,
        })
    }

    /// Load the rules of `calendar` from a rule source.
    ///
    /// Rank names in the rows must match a rank of the same calendar.
    pub fn load(source: &dyn RuleSource, calendar: &str) -> Result<Self> {
        let ranks: HashMap<String, Arc<CommemorationRank>> = source
            .ranks(calendar)?
            .into_iter()
            .map(|r| (r.name.clone(), Arc::new(r)))
            .collect();
        let rank = |name: &str| {
            ranks
                .get(name)
                .cloned()
                .ok_or_else(|| Error::InvalidRule(format!("unknown rank {name:?}")))
        };

        let mut commemorations = Vec::new();
        for row in source.temporale(calendar)? {
            let rule = DateRule::Temporale {
                days_after_easter: row.days_after_easter,
            };
            commemorations.push(from_row(row.common, rule, &rank)?);
        }
        for row in source.sanctorale_based(calendar)? {
            let weekday = Weekday::from_sunday_index(row.weekday).ok_or_else(|| {
                Error::InvalidRule(format!(
                    "{}: weekday {} outside [0, 6]",
                    row.common.name, row.weekday
                ))
            })?;
            let rule = DateRule::SanctoraleBased {
                weekday,
                number_after: row.number_after,
                month_after: row.month_after,
                day_after: row.day_after,
            };
            commemorations.push(from_row(row.common, rule, &rank)?);
        }
        for row in source.sanctorale(calendar)? {
            let rule = DateRule::Sanctorale {
                month: row.month,
                day: row.day,
            };
            commemorations.push(from_row(row.common, rule, &rank)?);
        }

        let seasons = source
            .seasons(calendar)?
            .into_iter()
            .map(|row| {
                Ok(Season {
                    order: row.order,
                    name: row.name,
                    start_commemoration: row.start_commemoration,
                    color: Color::parse(&row.color),
                    alternate_color: row.alternate_color.as_deref().map(Color::parse),
                    rank: rank(&row.rank)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let propers = source
            .propers(calendar)?
            .into_iter()
            .map(|row| {
                Ok(Proper {
                    number: row.number,
                    start: MonthDay::new(row.start_month, row.start_day)?,
                    end: MonthDay::new(row.end_month, row.end_day)?,
                    collect: row.collect,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let set = Self::new(calendar, commemorations, seasons, propers)?;
        debug!(
            calendar,
            commemorations = set.commemorations.len(),
            seasons = set.seasons.len(),
            propers = set.propers.len(),
            "loaded rule set"
        );
        Ok(set)
    }

    // ── Inspectors ────────────────────────────────────────────────────────

    /// Calendar abbreviation.
    pub fn calendar(&self) -> &str {
        &self.calendar
    }

    /// Every commemoration, in tie-break order.
    pub fn commemorations(&self) -> &[Arc<Commemoration>] {
        &self.commemorations
    }

    /// Seasons, in declared order.
    pub fn seasons(&self) -> &[Season] {
        &self.seasons
    }

    /// Propers.
    pub fn propers(&self) -> &[Proper] {
        &self.propers
    }

    /// Number of commemorations.
    pub fn len(&self) -> usize {
        self.commemorations.len()
    }

    /// Whether the set holds no commemorations.
    pub fn is_empty(&self) -> bool {
        self.commemorations.is_empty()
    }

    /// Commemorations called `name`, with their sequence numbers.
    pub fn named<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = (usize, &'a Arc<Commemoration>)> + 'a {
        self.commemorations
            .iter()
            .enumerate()
            .filter(move |(_, c)| c.name() == name)
    }

    /// The proper whose month/day range contains `date`.
    pub fn proper_for(&self, date: Date) -> Option<&Proper> {
        self.propers.iter().find(|p| p.contains(date))
    }

    // ── Expansion ─────────────────────────────────────────────────────────

    /// Place every commemoration of one kind in civil year `year`.
    ///
    /// A rule whose date for `year` falls outside the supported range (a
    /// weekday walk from a late-December anchor of the last supported year)
    /// does not occur.
    ///
    /// # Errors
    /// [`Error::InvalidYear`] if `year` itself is unsupported.
    pub fn expand_kind(&self, kind: RuleKind, year: i32) -> Result<Vec<Occurrence>> {
        check_year(year)?;
        let mut out = Vec::new();
        for (sequence, commemoration) in self.commemorations.iter().enumerate() {
            if commemoration.kind() != kind {
                continue;
            }
            let date = match commemoration.date_in(year) {
                Ok(date) => date,
                Err(Error::Date(_) | Error::InvalidYear { .. }) => {
                    debug!(
                        commemoration = commemoration.name(),
                        year, "commemoration falls outside the supported range"
                    );
                    continue;
                }
                Err(e) => return Err(e),
            };
            match date {
                Some(date) => out.push(Occurrence {
                    date,
                    commemoration: Arc::clone(commemoration),
                    sequence,
                }),
                None => debug!(
                    commemoration = commemoration.name(),
                    year, "commemoration does not occur this year"
                ),
            }
        }
        Ok(out)
    }

    /// Place every commemoration in civil year `year`, kind by kind in
    /// tie-break order.
    pub fn expand(&self, year: i32) -> Result<Vec<Occurrence>> {
        let mut out = Vec::with_capacity(self.commemorations.len());
        for kind in RuleKind::ALL {
            out.extend(self.expand_kind(kind, year)?);
        }
        Ok(out)
    }
}

fn from_row(
    row: CommemorationRow,
    rule: DateRule,
    rank: &impl Fn(&str) -> Result<Arc<CommemorationRank>>,
) -> Result<Commemoration> {
    let color = |c: &Option<String>| c.as_deref().map(Color::parse);
    let mut c = Commemoration::new(row.name.as_str(), rank(&row.rank)?, rule).with_other_colors(
        color(&row.additional_color),
        color(&row.alternate_color),
        color(&row.alternate_color_2),
    );
    if let Some(id) = row.uuid {
        c = c.with_id(id);
    }
    if let Some(col) = color(&row.color) {
        c = c.with_color(col);
    }
    if let Some(text) = row.collect {
        c = c.with_collect(text);
    }
    if let Some(text) = row.alternate_collect {
        c = c.with_alternate_collect(text);
    }
    if let Some(text) = row.eve_collect {
        c = c.with_eve_collect(text);
    }
    if let Some(reference) = row.cannot_occur_after {
        c = c.cannot_occur_after(reference);
    }
    for reading in row.mass_readings {
        c = c.with_mass_reading(reading);
    }
    Ok(c)
}
