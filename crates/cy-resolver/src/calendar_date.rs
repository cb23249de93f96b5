//! `CalendarDate`: the resolved record of one day.

use std::sync::Arc;

use cy_rules::{
    Color, Commemoration, CommemorationRank, MassReading, Observance, Proper, RuleKind, Season,
};
use cy_time::Date;

use crate::fasting::FastDay;
use crate::feria::Feria;

// ── Entry ─────────────────────────────────────────────────────────────────────

/// A commemoration as kept on one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    commemoration: Arc<Commemoration>,
    sequence: usize,
    transferred_from: Option<Date>,
}

impl Entry {
    pub(crate) fn new(commemoration: Arc<Commemoration>, sequence: usize) -> Self {
        Self {
            commemoration,
            sequence,
            transferred_from: None,
        }
    }

    /// The commemoration.
    pub fn commemoration(&self) -> &Arc<Commemoration> {
        &self.commemoration
    }

    /// The date this entry was transferred from, if it was moved.
    pub fn transferred_from(&self) -> Option<Date> {
        self.transferred_from
    }

    /// Whether this entry was moved from an earlier day.
    pub fn is_transferred(&self) -> bool {
        self.transferred_from.is_some()
    }

    /// Mark as moved from `from`.  An entry moved more than once keeps its
    /// original date.
    pub(crate) fn transfer_from(mut self, from: Date) -> Self {
        self.transferred_from.get_or_insert(from);
        self
    }

    /// Day ordering: precedence, transferred entries first, rule kind,
    /// rule-set position.
    pub(crate) fn order_key(&self) -> (u8, bool, RuleKind, usize) {
        (
            self.commemoration.precedence(),
            !self.is_transferred(),
            self.commemoration.kind(),
            self.sequence,
        )
    }
}

impl Observance for Entry {
    fn name(&self) -> &str {
        self.commemoration.name()
    }

    fn rank(&self) -> &CommemorationRank {
        self.commemoration.rank()
    }

    fn color(&self) -> Option<&Color> {
        self.commemoration.color()
    }

    fn alternate_color(&self) -> Option<&Color> {
        self.commemoration.alternate_color()
    }

    fn collect(&self) -> Option<&str> {
        self.commemoration.collect()
    }

    fn alternate_collect(&self) -> Option<&str> {
        self.commemoration.alternate_collect()
    }

    fn eve_collect(&self) -> Option<&str> {
        self.commemoration.eve_collect()
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.transferred_from {
            Some(from) => write!(f, "{} (transferred from {})", self.commemoration, from),
            None => write!(f, "{}", self.commemoration),
        }
    }
}

/// Sort a day's entries into day order.
pub(crate) fn sort_day(entries: &mut [Entry]) {
    entries.sort_by_key(Entry::order_key);
}

// ── Collects ──────────────────────────────────────────────────────────────────

/// Collect texts of a day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collects {
    /// Collect at Morning Prayer.
    pub morning: Option<String>,
    /// Collect at Evening Prayer.
    pub evening: Option<String>,
}

// ── CalendarDate ──────────────────────────────────────────────────────────────

/// The resolved record of one day of the Church Year.
///
/// Immutable once built.  `all` holds the day's commemorations in day order
/// (precedence, then transferred entries, then rule kind, then rule-set
/// position); `all_evening` is the following day's list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDate {
    pub(crate) date: Date,
    pub(crate) all: Vec<Entry>,
    pub(crate) all_evening: Vec<Entry>,
    pub(crate) season: Arc<Season>,
    pub(crate) evening_season: Arc<Season>,
    pub(crate) color: Color,
    pub(crate) fast_day: FastDay,
    pub(crate) feria: Option<Feria>,
    pub(crate) proper: Option<Proper>,
    pub(crate) collects: Collects,
    pub(crate) mass_readings: Vec<MassReading>,
}

impl CalendarDate {
    /// The date.
    pub fn date(&self) -> Date {
        self.date
    }

    /// `YYYY-MM-DD` key.
    pub fn key(&self) -> String {
        self.date.key()
    }

    /// Every commemoration of the day, in day order.  May be empty.
    pub fn all(&self) -> &[Entry] {
        &self.all
    }

    /// Commemorations anticipated at Evening Prayer (the next day's list).
    pub fn all_evening(&self) -> &[Entry] {
        &self.all_evening
    }

    /// The highest-precedence commemoration.
    pub fn primary(&self) -> Option<&Entry> {
        self.all.first()
    }

    /// The first evening commemoration, falling back to the morning primary.
    pub fn primary_evening(&self) -> Option<&Entry> {
        self.all_evening.first().or_else(|| self.primary())
    }

    /// Required commemorations, in day order.
    pub fn required(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.all.iter().filter(|e| e.is_required())
    }

    /// Optional commemorations, in day order.
    pub fn optional(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.all.iter().filter(|e| !e.is_required())
    }

    /// What the day actually keeps: the first required commemoration,
    /// otherwise the higher-precedence of the first optional commemoration
    /// and the feria (the commemoration on a tie).
    pub fn observance(&self) -> Option<&dyn Observance> {
        if let Some(required) = self.required().next() {
            return Some(required as &dyn Observance);
        }
        match (self.optional().next(), self.feria.as_ref()) {
            (Some(optional), Some(feria)) if feria.precedence() < optional.precedence() => {
                Some(feria as &dyn Observance)
            }
            (Some(optional), _) => Some(optional as &dyn Observance),
            (None, Some(feria)) => Some(feria as &dyn Observance),
            (None, None) => None,
        }
    }

    /// Season in force at Morning Prayer.
    pub fn season(&self) -> &Season {
        &self.season
    }

    /// Season in force at Evening Prayer.
    pub fn evening_season(&self) -> &Season {
        &self.evening_season
    }

    /// Liturgical color.
    pub fn color(&self) -> &Color {
        &self.color
    }

    /// Fasting status.
    pub fn fast_day(&self) -> FastDay {
        self.fast_day
    }

    /// The ferial observance; `None` on Sundays.
    pub fn feria(&self) -> Option<&Feria> {
        self.feria.as_ref()
    }

    /// The numbered proper, on Sundays of the propers season.
    pub fn proper(&self) -> Option<&Proper> {
        self.proper.as_ref()
    }

    /// Morning and evening collects.
    pub fn collects(&self) -> &Collects {
        &self.collects
    }

    /// Mass readings of the primary commemoration for the year's Sunday
    /// cycle.
    pub fn mass_readings(&self) -> &[MassReading] {
        &self.mass_readings
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} -", self.date.weekday(), self.date)?;
        for (i, entry) in self.all.iter().enumerate() {
            let sep = if i == 0 { " " } else { " | " };
            write!(f, "{sep}{}", entry.name())?;
        }
        Ok(())
    }
}

/// Resolve the collects of a day whose other fields are set.
///
/// Own collect first (the alternate collect in the evening), then the
/// proper's, then the feria's borrowed collect.  On the eve of a different
/// observance its eve collect replaces the evening collect.
pub(crate) fn resolve_collects(day: &CalendarDate) -> Collects {
    let observance = day.observance();
    let proper = day.proper.as_ref().and_then(|p| p.collect.as_deref());
    let feria = day.feria.as_ref();

    let morning = observance
        .and_then(|o| o.collect())
        .or(proper)
        .or_else(|| feria.and_then(|f| f.collect()));

    let mut evening = observance
        .and_then(|o| o.alternate_collect().or_else(|| o.collect()))
        .or(proper)
        .or_else(|| feria.and_then(|f| f.alternate_collect().or_else(|| f.collect())));

    if let Some(eve) = day.all_evening.first() {
        let same = day
            .primary()
            .map_or(false, |p| p.commemoration().id() == eve.commemoration().id());
        if !same {
            if let Some(text) = eve.eve_collect() {
                evening = Some(text);
            }
        }
    }

    Collects {
        morning: morning.map(str::to_owned),
        evening: evening.map(str::to_owned),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cy_rules::DateRule;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn rank(name: &str, precedence: u8, required: bool) -> Arc<CommemorationRank> {
        Arc::new(CommemorationRank::new(name, name, precedence, required).unwrap())
    }

    fn entry(name: &str, rank: Arc<CommemorationRank>, sequence: usize) -> Entry {
        let c = Commemoration::new(name, rank, DateRule::Sanctorale { month: 1, day: 1 })
            .with_collect(format!("Collect of {name}"));
        Entry::new(Arc::new(c), sequence)
    }

    fn season() -> Arc<Season> {
        Arc::new(Season {
            order: 1,
            name: "Season After Epiphany".into(),
            start_commemoration: "The Epiphany".into(),
            color: Color::Green,
            alternate_color: None,
            rank: rank("FERIA", 8, false),
        })
    }

    fn day(all: Vec<Entry>) -> CalendarDate {
        let season = season();
        CalendarDate {
            date: date(2025, 1, 14),
            all,
            all_evening: vec![],
            season: Arc::clone(&season),
            evening_season: Arc::clone(&season),
            color: Color::Green,
            fast_day: FastDay::NotAFastDay,
            feria: Some(Feria::of_season(&season)),
            proper: None,
            collects: Collects::default(),
            mass_readings: vec![],
        }
    }

    #[test]
    fn transferred_entries_win_ties() {
        let mut entries = vec![
            entry("Stays", rank("MAJOR_FEAST", 3, true), 0),
            entry("Moved", rank("MAJOR_FEAST", 3, true), 5).transfer_from(date(2025, 1, 13)),
        ];
        sort_day(&mut entries);
        assert_eq!(entries[0].name(), "Moved");
        assert_eq!(entries[0].transferred_from(), Some(date(2025, 1, 13)));
    }

    #[test]
    fn observance_prefers_required() {
        let d = day(vec![
            entry("Optional", rank("COMMEMORATION", 4, false), 0),
            entry("Required", rank("MAJOR_FEAST", 5, true), 1),
        ]);
        assert_eq!(d.observance().map(|o| o.name()), Some("Required"));
        assert_eq!(d.required().count(), 1);
        assert_eq!(d.optional().count(), 1);
    }

    #[test]
    fn observance_falls_back_to_feria() {
        let d = day(vec![entry("Optional", rank("COMMEMORATION", 9, false), 0)]);
        assert_eq!(d.observance().map(|o| o.name()), Some("FERIA"));
        let d = day(vec![entry("Optional", rank("COMMEMORATION", 6, false), 0)]);
        assert_eq!(d.observance().map(|o| o.name()), Some("Optional"));
        assert_eq!(day(vec![]).observance().map(|o| o.name()), Some("FERIA"));
    }

    #[test]
    fn evening_collect_uses_eve_collect_of_next_feast() {
        let mut d = day(vec![entry("Today", rank("MAJOR_FEAST", 3, true), 0)]);
        let tomorrow = Commemoration::new(
            "Tomorrow",
            rank("PRINCIPAL_FEAST", 1, true),
            DateRule::Sanctorale { month: 1, day: 15 },
        )
        .with_eve_collect("Eve collect");
        d.all_evening = vec![Entry::new(Arc::new(tomorrow), 1)];
        let collects = resolve_collects(&d);
        assert_eq!(collects.morning.as_deref(), Some("Collect of Today"));
        assert_eq!(collects.evening.as_deref(), Some("Eve collect"));
    }

    #[test]
    fn display_lists_names() {
        let d = day(vec![
            entry("A", rank("MAJOR_FEAST", 3, true), 0),
            entry("B", rank("COMMEMORATION", 6, false), 1),
        ]);
        assert_eq!(d.to_string(), "Tuesday 14 January 2025 - A | B");
    }
}
