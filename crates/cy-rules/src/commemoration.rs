//! Commemorations and the rules that date them.
//!
//! A [`Commemoration`] is one observance record of a calendar.  Its date is
//! derived by exactly one [`DateRule`]:
//!
//! | Kind | Rule | Example |
//! |------|------|---------|
//! | Temporale | Easter Day + `days_after_easter` | Ash Wednesday = −46 |
//! | SanctoraleBased | the `number_after`-th `weekday` after an anchor | first Sunday after October 18 |
//! | Sanctorale | fixed month/day | Saint Andrew, November 30 |
//!
//! Commemorations and ferial weekdays share the [`Observance`] trait.

use std::sync::Arc;

use uuid::Uuid;

use crate::color::Color;
use crate::rank::CommemorationRank;
use crate::readings::{MassReading, SundayCycle};
use cy_core::errors::{Error, Result};
use cy_time::date::{days_in_month, is_leap_year};
use cy_time::{Date, Easter, Weekday};

// ── Rule kinds ────────────────────────────────────────────────────────────────

/// The three kinds of dating rule, ordered by their tie-break priority: when
/// two commemorations of equal precedence fall on one day, the Temporale one
/// sorts first, then the SanctoraleBased one, then the Sanctorale one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuleKind {
    /// Easter-relative.
    Temporale,
    /// Weekday relative to a fixed anchor date.
    SanctoraleBased,
    /// Fixed month/day.
    Sanctorale,
}

impl RuleKind {
    /// All kinds in tie-break order.
    pub const ALL: [RuleKind; 3] = [
        RuleKind::Temporale,
        RuleKind::SanctoraleBased,
        RuleKind::Sanctorale,
    ];
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            RuleKind::Temporale => "temporale",
            RuleKind::SanctoraleBased => "sanctorale-based",
            RuleKind::Sanctorale => "sanctorale",
        })
    }
}

/// Largest `number_after` magnitude a SanctoraleBased rule may use: a
/// year's worth of weeks.
pub const MAX_WEEKS_FROM_ANCHOR: u32 = 53;

/// How a commemoration's date is derived for a given civil year.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DateRule {
    /// Fixed month and day.
    Sanctorale {
        /// Month (1–12).
        month: u8,
        /// Day of the month.
        day: u8,
    },
    /// Offset in days from Easter Day (negative = before Easter).
    Temporale {
        /// Signed day offset.
        days_after_easter: i32,
    },
    /// The `number_after`-th `weekday` strictly after the anchor
    /// `month_after`/`day_after` (strictly before it when negative).
    SanctoraleBased {
        /// Target weekday.
        weekday: Weekday,
        /// Which occurrence; never zero.
        number_after: i32,
        /// Anchor month.
        month_after: u8,
        /// Anchor day.
        day_after: u8,
    },
}

impl DateRule {
    /// The rule's kind.
    pub fn kind(&self) -> RuleKind {
        match self {
            DateRule::Sanctorale { .. } => RuleKind::Sanctorale,
            DateRule::Temporale { .. } => RuleKind::Temporale,
            DateRule::SanctoraleBased { .. } => RuleKind::SanctoraleBased,
        }
    }

    /// Reject impossible month/day pairs and a `number_after` that is zero
    /// or more than [`MAX_WEEKS_FROM_ANCHOR`] weeks either side.
    ///
    /// February 29 is accepted; it simply does not occur in common years.
    pub fn validate(&self) -> Result<()> {
        match *self {
            DateRule::Sanctorale { month, day } => check_month_day(month, day),
            DateRule::Temporale { days_after_easter } => {
                // Anything beyond a year either side of Easter is a data error.
                if days_after_easter.unsigned_abs() > 366 {
                    return Err(Error::InvalidRule(format!(
                        "days_after_easter {days_after_easter} is more than a year from Easter"
                    )));
                }
                Ok(())
            }
            DateRule::SanctoraleBased {
                number_after,
                month_after,
                day_after,
                ..
            } => {
                if number_after == 0 {
                    return Err(Error::InvalidRule("number_after must be non-zero".into()));
                }
                if number_after.unsigned_abs() > MAX_WEEKS_FROM_ANCHOR {
                    return Err(Error::InvalidRule(format!(
                        "number_after {number_after} is more than {MAX_WEEKS_FROM_ANCHOR} weeks from its anchor"
                    )));
                }
                check_month_day(month_after, day_after)
            }
        }
    }

    /// Resolve the rule in civil year `year`.
    ///
    /// Returns `Ok(None)` when the rule does not occur that year: a
    /// February 29 date (or anchor) in a common year is suppressed, never
    /// shifted.
    pub fn resolve(&self, year: i32) -> Result<Option<Date>> {
        match *self {
            DateRule::Sanctorale { month, day } => {
                if is_leap_day(month, day) && !is_leap_year(year) {
                    return Ok(None);
                }
                Date::from_ymd(year, month, day).map(Some)
            }
            DateRule::Temporale { days_after_easter } => {
                Easter::offset(year, days_after_easter).map(Some)
            }
            DateRule::SanctoraleBased {
                weekday,
                number_after,
                month_after,
                day_after,
            } => {
                if is_leap_day(month_after, day_after) && !is_leap_year(year) {
                    return Ok(None);
                }
                let anchor = Date::from_ymd(year, month_after, day_after)?;
                anchor.nth_weekday_after(weekday, number_after).map(Some)
            }
        }
    }
}

fn is_leap_day(month: u8, day: u8) -> bool {
    month == 2 && day == 29
}

fn check_month_day(month: u8, day: u8) -> Result<()> {
    // 2000 is a leap year, so February 29 passes.
    let max = days_in_month(2000, month);
    if max == 0 || day == 0 || day > max {
        return Err(Error::InvalidRule(format!("no such day {month:02}-{day:02}")));
    }
    Ok(())
}

// ── Observance ────────────────────────────────────────────────────────────────

/// What every kept observance offers to the rest of the system: a name, a
/// rank, colors and collects.
pub trait Observance {
    /// Display name.
    fn name(&self) -> &str;

    /// Rank within the calendar.
    fn rank(&self) -> &CommemorationRank;

    /// Principal color, if any.
    fn color(&self) -> Option<&Color>;

    /// Alternate color, if any.
    fn alternate_color(&self) -> Option<&Color>;

    /// Collect of the day.
    fn collect(&self) -> Option<&str>;

    /// Alternate collect (used at Evening Prayer).
    fn alternate_collect(&self) -> Option<&str> {
        None
    }

    /// Collect said on the eve of the observance.
    fn eve_collect(&self) -> Option<&str> {
        None
    }

    /// Shorthand for `rank().precedence_rank`.
    fn precedence(&self) -> u8 {
        self.rank().precedence_rank
    }

    /// Shorthand for `rank().required`.
    fn is_required(&self) -> bool {
        self.rank().required
    }
}

// ── Commemoration ─────────────────────────────────────────────────────────────

/// A single commemoration record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commemoration {
    id: Uuid,
    name: String,
    rank: Arc<CommemorationRank>,
    rule: DateRule,
    color: Option<Color>,
    additional_color: Option<Color>,
    alternate_color: Option<Color>,
    alternate_color_2: Option<Color>,
    collect: Option<String>,
    alternate_collect: Option<String>,
    eve_collect: Option<String>,
    cannot_occur_after: Option<String>,
    mass_readings: Vec<MassReading>,
}

impl Commemoration {
    /// Create a commemoration with no colors, collects, or suppression rule.
    ///
    /// The id is derived from the name and rule kind; override it with
    /// [`with_id`][Self::with_id] when the record carries its own.
    pub fn new(name: impl Into<String>, rank: Arc<CommemorationRank>, rule: DateRule) -> Self {
        let name = name.into();
        let id = Uuid::new_v5(
            &Uuid::NAMESPACE_OID,
            format!("{}/{}", rule.kind(), name).as_bytes(),
        );
        Self {
            id,
            name,
            rank,
            rule,
            color: None,
            additional_color: None,
            alternate_color: None,
            alternate_color_2: None,
            collect: None,
            alternate_collect: None,
            eve_collect: None,
            cannot_occur_after: None,
            mass_readings: Vec::new(),
        }
    }

    // ── Builder-style setters ─────────────────────────────────────────────

    /// Set the stable identifier.
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Set the principal color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the additional, alternate and second alternate colors.
    pub fn with_other_colors(
        mut self,
        additional: Option<Color>,
        alternate: Option<Color>,
        alternate_2: Option<Color>,
    ) -> Self {
        self.additional_color = additional;
        self.alternate_color = alternate;
        self.alternate_color_2 = alternate_2;
        self
    }

    /// Set the collect.
    pub fn with_collect(mut self, collect: impl Into<String>) -> Self {
        self.collect = Some(collect.into());
        self
    }

    /// Set the alternate collect.
    pub fn with_alternate_collect(mut self, collect: impl Into<String>) -> Self {
        self.alternate_collect = Some(collect.into());
        self
    }

    /// Set the eve collect.
    pub fn with_eve_collect(mut self, collect: impl Into<String>) -> Self {
        self.eve_collect = Some(collect.into());
        self
    }

    /// Omit this commemoration in any ecclesiastical year where `reference`
    /// falls on or before it.
    pub fn cannot_occur_after(mut self, reference: impl Into<String>) -> Self {
        self.cannot_occur_after = Some(reference.into());
        self
    }

    /// Append a mass reading.
    pub fn with_mass_reading(mut self, reading: MassReading) -> Self {
        self.mass_readings.push(reading);
        self
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// Stable identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The dating rule.
    pub fn rule(&self) -> &DateRule {
        &self.rule
    }

    /// The dating rule's kind.
    pub fn kind(&self) -> RuleKind {
        self.rule.kind()
    }

    /// Shared rank handle.
    pub fn rank_handle(&self) -> &Arc<CommemorationRank> {
        &self.rank
    }

    /// Additional color, if any.
    pub fn additional_color(&self) -> Option<&Color> {
        self.additional_color.as_ref()
    }

    /// Second alternate color, if any.
    pub fn alternate_color_2(&self) -> Option<&Color> {
        self.alternate_color_2.as_ref()
    }

    /// Name of the commemoration this one cannot occur after.
    pub fn suppression_reference(&self) -> Option<&str> {
        self.cannot_occur_after.as_deref()
    }

    /// Every mass reading, in record order.
    pub fn mass_readings(&self) -> &[MassReading] {
        &self.mass_readings
    }

    /// Mass readings appointed in `cycle`, ordered by service then reading
    /// number.
    pub fn mass_readings_for(&self, cycle: SundayCycle) -> Vec<MassReading> {
        let mut readings: Vec<MassReading> = self
            .mass_readings
            .iter()
            .filter(|r| r.applies_to(cycle))
            .cloned()
            .collect();
        readings.sort_by(|a, b| {
            (a.service.as_deref(), a.reading_number).cmp(&(b.service.as_deref(), b.reading_number))
        });
        readings
    }

    /// Resolve this commemoration's date in civil year `year`.
    pub fn date_in(&self, year: i32) -> Result<Option<Date>> {
        self.rule.resolve(year)
    }
}

impl Observance for Commemoration {
    fn name(&self) -> &str {
        &self.name
    }

    fn rank(&self) -> &CommemorationRank {
        &self.rank
    }

    fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }

    fn alternate_color(&self) -> Option<&Color> {
        self.alternate_color.as_ref()
    }

    fn collect(&self) -> Option<&str> {
        self.collect.as_deref()
    }

    fn alternate_collect(&self) -> Option<&str> {
        self.alternate_collect.as_deref()
    }

    fn eve_collect(&self) -> Option<&str> {
        self.eve_collect.as_deref()
    }
}

impl std::fmt::Display for Commemoration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.rank.formatted_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn rank() -> Arc<CommemorationRank> {
        Arc::new(CommemorationRank::new("HOLY_DAY", "Holy Day", 3, true).unwrap())
    }

    #[test]
    fn sanctorale_resolves_directly() {
        let rule = DateRule::Sanctorale { month: 11, day: 30 };
        assert_eq!(rule.resolve(2024).unwrap(), Some(date(2024, 11, 30)));
    }

    #[test]
    fn leap_day_is_suppressed_in_common_years() {
        let rule = DateRule::Sanctorale { month: 2, day: 29 };
        assert!(rule.validate().is_ok());
        assert_eq!(rule.resolve(2024).unwrap(), Some(date(2024, 2, 29)));
        assert_eq!(rule.resolve(2025).unwrap(), None);
    }

    #[test]
    fn temporale_offsets_easter() {
        let ash = DateRule::Temporale {
            days_after_easter: -46,
        };
        assert_eq!(ash.resolve(2024).unwrap(), Some(date(2024, 2, 14)));
        assert_eq!(ash.kind(), RuleKind::Temporale);
    }

    #[test]
    fn sanctorale_based_walks_forward_from_anchor() {
        let rule = DateRule::SanctoraleBased {
            weekday: Weekday::Sunday,
            number_after: 1,
            month_after: 10,
            day_after: 18,
        };
        assert_eq!(rule.resolve(2025).unwrap(), Some(date(2025, 10, 19)));
    }

    #[test]
    fn sanctorale_based_walks_backward_when_negative() {
        let advent = DateRule::SanctoraleBased {
            weekday: Weekday::Sunday,
            number_after: -4,
            month_after: 12,
            day_after: 25,
        };
        assert_eq!(advent.resolve(2024).unwrap(), Some(date(2024, 12, 1)));
    }

    #[test]
    fn validation() {
        assert!(DateRule::Sanctorale { month: 4, day: 31 }.validate().is_err());
        assert!(DateRule::Sanctorale { month: 13, day: 1 }.validate().is_err());
        assert!(DateRule::SanctoraleBased {
            weekday: Weekday::Monday,
            number_after: 0,
            month_after: 1,
            day_after: 1,
        }
        .validate()
        .is_err());
        assert!(DateRule::Temporale {
            days_after_easter: 400
        }
        .validate()
        .is_err());
        assert!(DateRule::Temporale {
            days_after_easter: i32::MIN
        }
        .validate()
        .is_err());
    }

    #[test]
    fn weeks_from_anchor_are_bounded() {
        let rule = |number_after| DateRule::SanctoraleBased {
            weekday: Weekday::Sunday,
            number_after,
            month_after: 12,
            day_after: 25,
        };
        assert!(rule(53).validate().is_ok());
        assert!(rule(-53).validate().is_ok());
        for n in [54, -54, i32::MAX, i32::MIN] {
            assert!(matches!(rule(n).validate(), Err(Error::InvalidRule(_))), "{n}");
        }
    }

    #[test]
    fn kinds_order_for_tie_breaks() {
        assert!(RuleKind::Temporale < RuleKind::SanctoraleBased);
        assert!(RuleKind::SanctoraleBased < RuleKind::Sanctorale);
    }

    #[test]
    fn ids_are_stable() {
        let rule = DateRule::Sanctorale { month: 11, day: 30 };
        let a = Commemoration::new("Saint Andrew", rank(), rule.clone());
        let b = Commemoration::new("Saint Andrew", rank(), rule);
        assert_eq!(a.id(), b.id());
    }

    #[test]
    fn readings_filtered_by_cycle() {
        let reading = |cycle, n: u8| MassReading {
            cycle,
            service: None,
            reading_number: n,
            citation: format!("Reading {n}"),
            short_citation: None,
        };
        let c = Commemoration::new(
            "Christmas Day",
            rank(),
            DateRule::Sanctorale { month: 12, day: 25 },
        )
        .with_mass_reading(reading(None, 3))
        .with_mass_reading(reading(Some(SundayCycle::B), 1))
        .with_mass_reading(reading(Some(SundayCycle::A), 2));
        let a: Vec<u8> = c
            .mass_readings_for(SundayCycle::A)
            .iter()
            .map(|r| r.reading_number)
            .collect();
        assert_eq!(a, vec![2, 3]);
    }
}
