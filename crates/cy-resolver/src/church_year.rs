//! `ChurchYear`: one resolved ecclesiastical year.
//!
//! [`ChurchYear::build`] runs the whole resolution pipeline for one calendar
//! and Advent year:
//!
//! 1. expand every rule in the two civil years the window touches and keep
//!    the occurrences inside `[Advent Sunday, Saturday before next Advent]`;
//! 2. lay out the season timeline from the season start occurrences;
//! 3. drop commemorations whose `cannot_occur_after` reference falls on or
//!    before them;
//! 4. bucket by day and order each day;
//! 5. move colliding required commemorations forward (transfers);
//! 6. assemble one [`CalendarDate`] per day: evening list, season, color,
//!    fasting, feria, proper, mass readings and collects.
//!
//! A build either succeeds for every day or fails outright.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::calendar_date::{resolve_collects, sort_day, CalendarDate, Collects, Entry};
use crate::cycles::{Cycles, OfficeYear, WeekdayCycle};
use crate::fasting::FastDay;
use crate::feria::Feria;
use cy_core::errors::{Error, Result};
use cy_core::settings::{FeriaRules, ResolverSettings, TransferRules};
use cy_rules::{
    Color, CommemorationRuleSet, Observance, Occurrence, Proper, Season, SundayCycle,
};
use cy_time::{Date, EcclesiasticalYear, Weekday};

/// One ecclesiastical year of resolved days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChurchYear {
    calendar: String,
    bounds: EcclesiasticalYear,
    cycles: Cycles,
    dates: Vec<CalendarDate>,
}

impl ChurchYear {
    /// Resolve the ecclesiastical year beginning at Advent of `advent_year`.
    ///
    /// # Errors
    /// * [`Error::InvalidYear`] if `advent_year` or the following year is
    ///   unsupported.
    /// * [`Error::AmbiguousSuppressionReference`] for a `cannot_occur_after`
    ///   reference that does not name exactly one commemoration kept in the
    ///   window.
    /// * [`Error::MissingSeasonCoverage`] for a day no season covers.
    #[instrument(skip_all, fields(calendar = %rules.calendar(), year = advent_year))]
    pub fn build(
        rules: &CommemorationRuleSet,
        advent_year: i32,
        settings: &ResolverSettings,
    ) -> Result<Self> {
        let bounds = EcclesiasticalYear::new(advent_year)?;
        let dates: Vec<Date> = bounds.days().collect();

        let occurrences = expand_window(rules, &bounds)?;
        let seasons = assign_seasons(rules, &occurrences, &dates)?;
        let kept = suppress(rules, occurrences)?;

        let mut days: Vec<Vec<Entry>> = vec![Vec::new(); dates.len()];
        for occurrence in kept {
            let index = (occurrence.date - bounds.start()) as usize;
            days[index].push(Entry::new(occurrence.commemoration, occurrence.sequence));
        }
        for day in &mut days {
            sort_day(day);
        }

        if settings.transfers.enabled {
            transfer(&mut days, &dates, &settings.transfers);
        }

        let cycles = Cycles::for_advent_year(advent_year);
        let mut resolved = Vec::with_capacity(dates.len());
        let mut anchor: Option<(String, Collects)> = None;
        for (i, &date) in dates.iter().enumerate() {
            let all = std::mem::take(&mut days[i]);
            let all_evening = days.get(i + 1).cloned().unwrap_or_default();
            let season = Arc::clone(&seasons[i]);
            let evening_season = Arc::clone(seasons.get(i + 1).unwrap_or(&season));

            let feria = (date.weekday() != Weekday::Sunday).then(|| {
                let feria = Feria::of_season(&season);
                match &anchor {
                    Some((name, collects)) => feria.after(date.weekday(), name, collects),
                    None => feria,
                }
            });

            let mut day = CalendarDate {
                date,
                color: day_color(&all, &season),
                fast_day: FastDay::assess(date, &all, &season, &settings.fasting),
                proper: proper_for(rules, date, &all, &season, settings),
                mass_readings: all
                    .first()
                    .map(|p| p.commemoration().mass_readings_for(cycles.sunday))
                    .unwrap_or_default(),
                all,
                all_evening,
                season,
                evening_season,
                feria,
                collects: Collects::default(),
            };
            day.collects = resolve_collects(&day);

            if let Some(name) = anchor_name(&day, &settings.ferias) {
                anchor = Some((name, day.collects.clone()));
            }
            resolved.push(day);
        }

        info!(days = resolved.len(), start = %bounds.start(), "built church year");
        Ok(Self {
            calendar: rules.calendar().to_string(),
            bounds,
            cycles,
            dates: resolved,
        })
    }

    // ── Inspectors ────────────────────────────────────────────────────────

    /// Calendar abbreviation.
    pub fn calendar(&self) -> &str {
        &self.calendar
    }

    /// The civil year in which this year's Advent falls.
    pub fn advent_year(&self) -> i32 {
        self.bounds.advent_year()
    }

    /// First and last day.
    pub fn bounds(&self) -> &EcclesiasticalYear {
        &self.bounds
    }

    /// Advent Sunday.
    pub fn start(&self) -> Date {
        self.bounds.start()
    }

    /// The Saturday before the next Advent Sunday.
    pub fn end(&self) -> Date {
        self.bounds.end()
    }

    /// Every cycle in force.
    pub fn cycles(&self) -> Cycles {
        self.cycles
    }

    /// Sunday lectionary cycle (A, B or C).
    pub fn sunday_cycle(&self) -> SundayCycle {
        self.cycles.sunday
    }

    /// Weekday lectionary cycle.
    pub fn weekday_cycle(&self) -> WeekdayCycle {
        self.cycles.weekday
    }

    /// Daily office year.
    pub fn office_year(&self) -> OfficeYear {
        self.cycles.office
    }

    /// The resolved day for `date`, if it lies in this year.
    pub fn get(&self, date: Date) -> Option<&CalendarDate> {
        if !self.bounds.contains(date) {
            return None;
        }
        self.dates.get((date - self.bounds.start()) as usize)
    }

    /// The resolved day for a `YYYY-MM-DD` key.
    pub fn get_by_key(&self, key: &str) -> Option<&CalendarDate> {
        Date::parse_key(key).ok().and_then(|d| self.get(d))
    }

    /// Days in ascending order.
    pub fn iter(&self) -> std::slice::Iter<'_, CalendarDate> {
        self.dates.iter()
    }

    /// Number of days (364 or 371).
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Always false for a built year.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl<'a> IntoIterator for &'a ChurchYear {
    type Item = &'a CalendarDate;
    type IntoIter = std::slice::Iter<'a, CalendarDate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ── Pipeline stages ───────────────────────────────────────────────────────────

fn expand_window(
    rules: &CommemorationRuleSet,
    bounds: &EcclesiasticalYear,
) -> Result<Vec<Occurrence>> {
    let year = bounds.advent_year();
    let mut occurrences = rules.expand(year)?;
    occurrences.extend(rules.expand(year + 1)?);
    occurrences.retain(|o| bounds.contains(o.date));
    debug!(count = occurrences.len(), "expanded rules into window");
    Ok(occurrences)
}

/// The season of every day.  Each in-window occurrence of a season's start
/// commemoration opens that season; on a shared date the later season in
/// declared order wins.
fn assign_seasons(
    rules: &CommemorationRuleSet,
    occurrences: &[Occurrence],
    dates: &[Date],
) -> Result<Vec<Arc<Season>>> {
    let seasons: Vec<Arc<Season>> = rules.seasons().iter().cloned().map(Arc::new).collect();
    let mut starts: Vec<(Date, usize)> = Vec::new();
    for (index, season) in seasons.iter().enumerate() {
        starts.extend(
            occurrences
                .iter()
                .filter(|o| o.commemoration.name() == season.start_commemoration)
                .map(|o| (o.date, index)),
        );
    }
    starts.sort_unstable();

    let mut out = Vec::with_capacity(dates.len());
    let mut next = 0;
    let mut current: Option<usize> = None;
    for &date in dates {
        while next < starts.len() && starts[next].0 <= date {
            current = Some(starts[next].1);
            next += 1;
        }
        let index = current.ok_or_else(|| Error::MissingSeasonCoverage { date: date.key() })?;
        out.push(Arc::clone(&seasons[index]));
    }
    Ok(out)
}

/// Drop every occurrence whose `cannot_occur_after` reference falls on or
/// before it, comparing against the reference's earliest in-window date.
/// The reference must name exactly one other commemoration.
fn suppress(
    rules: &CommemorationRuleSet,
    occurrences: Vec<Occurrence>,
) -> Result<Vec<Occurrence>> {
    let mut earliest: HashMap<usize, Date> = HashMap::new();
    for o in &occurrences {
        earliest
            .entry(o.sequence)
            .and_modify(|d| *d = (*d).min(o.date))
            .or_insert(o.date);
    }

    let mut kept = Vec::with_capacity(occurrences.len());
    for o in occurrences {
        let commemoration = Arc::clone(&o.commemoration);
        let Some(reference) = commemoration.suppression_reference() else {
            kept.push(o);
            continue;
        };
        let ambiguous = |matches| Error::AmbiguousSuppressionReference {
            commemoration: commemoration.name().to_string(),
            reference: reference.to_string(),
            matches,
        };
        let matches: Vec<usize> = rules
            .named(reference)
            .map(|(i, _)| i)
            .filter(|&i| i != o.sequence)
            .collect();
        let referenced = match matches.as_slice() {
            [only] => earliest.get(only).copied().ok_or_else(|| ambiguous(0))?,
            _ => return Err(ambiguous(matches.len())),
        };
        if referenced <= o.date {
            debug!(
                commemoration = commemoration.name(),
                reference,
                date = %o.date,
                referenced = %referenced,
                "suppressed"
            );
            continue;
        }
        kept.push(o);
    }
    Ok(kept)
}

/// Move colliding required commemorations to the following day, in date
/// order, so a moved entry can move again.
fn transfer(days: &mut [Vec<Entry>], dates: &[Date], rules: &TransferRules) {
    for i in 0..days.len() {
        let moving = take_transfers(&mut days[i], rules);
        if moving.is_empty() {
            continue;
        }
        let from = dates[i];
        match days.get_mut(i + 1) {
            Some(next) => {
                for entry in moving {
                    debug!(
                        commemoration = entry.name(),
                        from = %from,
                        to = %dates[i + 1],
                        "transferred"
                    );
                    next.push(entry.transfer_from(from));
                }
                sort_day(next);
            }
            None => {
                for entry in moving {
                    warn!(
                        commemoration = entry.name(),
                        from = %from,
                        "transfer falls past the end of the year; dropped"
                    );
                }
            }
        }
    }
}

/// Remove and return the entries that leave `day`: every required entry
/// after the first, or all of them when a privileged lesser feast heads a
/// day that also has optional commemorations.
fn take_transfers(day: &mut Vec<Entry>, rules: &TransferRules) -> Vec<Entry> {
    let required = day.iter().filter(|e| e.is_required()).count();
    let has_optional = required < day.len();
    let privileged = match (&rules.privileged_lesser_feast_rank, day.iter().find(|e| e.is_required())) {
        (Some(rank), Some(first)) => first.rank().name == *rank && has_optional,
        _ => false,
    };
    let keep = if privileged { 0 } else { 1 };
    if required <= keep {
        return Vec::new();
    }

    let mut seen = 0;
    let mut moving = Vec::new();
    let mut staying = Vec::with_capacity(day.len());
    for entry in day.drain(..) {
        if entry.is_required() {
            seen += 1;
            if seen > keep {
                moving.push(entry);
                continue;
            }
        }
        staying.push(entry);
    }
    *day = staying;
    moving
}

/// Season color, unless the primary outranks the season and has a color.
fn day_color(all: &[Entry], season: &Season) -> Color {
    match all.first() {
        Some(primary) if primary.rank().outranks(&season.rank) => primary
            .color()
            .cloned()
            .unwrap_or_else(|| season.color.clone()),
        _ => season.color.clone(),
    }
}

fn proper_for(
    rules: &CommemorationRuleSet,
    date: Date,
    all: &[Entry],
    season: &Season,
    settings: &ResolverSettings,
) -> Option<Proper> {
    if season.name != settings.propers.season {
        return None;
    }
    if !all.iter().any(|e| e.rank().name == settings.propers.sunday_rank) {
        return None;
    }
    rules.proper_for(date).cloned()
}

/// Name of the observance following weekdays are named after, if this day
/// anchors them: a required primary on a Sunday, or a required primary whose
/// name contains one of the configured anchors.
fn anchor_name(day: &CalendarDate, rules: &FeriaRules) -> Option<String> {
    let primary = day.primary().filter(|p| p.is_required())?;
    let anchors = day.date().weekday() == Weekday::Sunday
        || rules.anchors.iter().any(|a| primary.name().contains(a.as_str()));
    anchors.then(|| primary.name().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cy_rules::{Commemoration, CommemorationRank, DateRule};

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn rank(name: &str, precedence: u8, required: bool) -> Arc<CommemorationRank> {
        Arc::new(CommemorationRank::new(name, name, precedence, required).unwrap())
    }

    fn entry(name: &str, rank: Arc<CommemorationRank>, sequence: usize) -> Entry {
        let c = Commemoration::new(name, rank, DateRule::Sanctorale { month: 1, day: 1 });
        Entry::new(Arc::new(c), sequence)
    }

    #[test]
    fn second_required_commemoration_moves() {
        let mut day = vec![
            entry("First", rank("MAJOR_FEAST", 3, true), 0),
            entry("Second", rank("MAJOR_FEAST", 3, true), 1),
            entry("Optional", rank("COMMEMORATION", 6, false), 2),
        ];
        let moving = take_transfers(&mut day, &TransferRules::default());
        assert_eq!(moving.len(), 1);
        assert_eq!(moving[0].name(), "Second");
        let names: Vec<&str> = day.iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["First", "Optional"]);
    }

    #[test]
    fn privileged_lesser_feast_moves_all_required() {
        let mut day = vec![
            entry("Privileged", rank("PRIVILEGED_LESSER_FEAST", 4, true), 0),
            entry("Optional", rank("COMMEMORATION", 6, false), 1),
        ];
        let moving = take_transfers(&mut day, &TransferRules::default());
        assert_eq!(moving.len(), 1);
        assert_eq!(day.len(), 1);
        assert_eq!(day[0].name(), "Optional");
    }

    #[test]
    fn single_required_commemoration_stays() {
        let mut day = vec![entry("Only", rank("MAJOR_FEAST", 3, true), 0)];
        assert!(take_transfers(&mut day, &TransferRules::default()).is_empty());
        assert_eq!(day.len(), 1);
    }

    #[test]
    fn transfer_past_end_is_dropped() {
        let dates = vec![date(2024, 11, 29), date(2024, 11, 30)];
        let mut days = vec![
            vec![],
            vec![
                entry("First", rank("MAJOR_FEAST", 3, true), 0),
                entry("Second", rank("MAJOR_FEAST", 3, true), 1),
            ],
        ];
        transfer(&mut days, &dates, &TransferRules::default());
        assert_eq!(days[1].len(), 1);
    }

    #[test]
    fn moved_entries_record_their_origin() {
        let dates = vec![date(2024, 6, 10), date(2024, 6, 11)];
        let mut days = vec![
            vec![
                entry("First", rank("MAJOR_FEAST", 3, true), 0),
                entry("Second", rank("MAJOR_FEAST", 3, true), 1),
            ],
            vec![entry("Resident", rank("MAJOR_FEAST", 3, true), 2)],
        ];
        transfer(&mut days, &dates, &TransferRules::default());
        // Second lands on 11 June ahead of Resident, then Resident moves on
        // and falls off the end.
        assert_eq!(days[1].len(), 1);
        assert_eq!(days[1][0].name(), "Second");
        assert_eq!(days[1][0].transferred_from(), Some(date(2024, 6, 10)));
    }

    #[test]
    fn color_override_needs_higher_precedence() {
        let season = Season {
            order: 1,
            name: "Season After Pentecost".into(),
            start_commemoration: "Trinity Sunday".into(),
            color: Color::Green,
            alternate_color: None,
            rank: rank("FERIA", 7, false),
        };
        let red = |precedence| {
            let c = Commemoration::new(
                "Martyr",
                rank("X", precedence, true),
                DateRule::Sanctorale { month: 1, day: 1 },
            )
            .with_color(Color::Red);
            vec![Entry::new(Arc::new(c), 0)]
        };
        assert_eq!(day_color(&red(3), &season), Color::Red);
        assert_eq!(day_color(&red(7), &season), Color::Green);
        assert_eq!(day_color(&[], &season), Color::Green);
    }
}
