//! Shared fixtures: a small but complete calendar and tracing setup.

#![allow(dead_code)]

use cy_core::ResolverSettings;
use cy_resolver::ChurchYear;
use cy_rules::{
    CalendarRows, CommemorationRank, CommemorationRow, CommemorationRuleSet, InMemoryRuleSource,
    MassReading, ProperRow, SanctoraleBasedRow, SanctoraleRow, SeasonRow, SundayCycle,
    TemporaleRow,
};
use cy_time::Date;
use tracing_subscriber::EnvFilter;

pub const CALENDAR: &str = "ACNA_TEST";

pub const ANNUNCIATION: &str = "The Annunciation of Our Lord Jesus Christ to the Blessed Virgin Mary";

/// Install a test-writer subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn row(name: &str, rank: &str, color: &str) -> CommemorationRow {
    CommemorationRow {
        color: Some(color.into()),
        collect: Some(format!("Collect for {name}")),
        ..CommemorationRow::new(name, rank)
    }
}

fn fixed(common: CommemorationRow, month: u8, day: u8) -> SanctoraleRow {
    SanctoraleRow { common, month, day }
}

fn moveable(common: CommemorationRow, days_after_easter: i32) -> TemporaleRow {
    TemporaleRow {
        common,
        days_after_easter,
    }
}

fn after(common: CommemorationRow, weekday: u8, number_after: i32, month: u8, day: u8) -> SanctoraleBasedRow {
    SanctoraleBasedRow {
        common,
        weekday,
        number_after,
        month_after: month,
        day_after: day,
    }
}

fn season(order: u32, name: &str, start: &str, color: &str, rank: &str) -> SeasonRow {
    SeasonRow {
        order,
        name: name.into(),
        start_commemoration: start.into(),
        color: color.into(),
        alternate_color: None,
        rank: rank.into(),
    }
}

fn reading(cycle: Option<SundayCycle>, reading_number: u8, citation: &str) -> MassReading {
    MassReading {
        cycle,
        service: None,
        reading_number,
        citation: citation.into(),
        short_citation: None,
    }
}

pub fn ranks() -> Vec<CommemorationRank> {
    let rank = |name: &str, formatted: &str, precedence: u8, required: bool| {
        CommemorationRank::new(name, formatted, precedence, required).unwrap()
    };
    vec![
        rank("PRINCIPAL_FEAST", "Principal Feast", 1, true),
        rank("PRIVILEGED_OBSERVANCE", "Privileged Observance", 1, true),
        rank("SUNDAY", "Sunday", 2, true),
        rank("HOLY_DAY", "Holy Day", 3, true),
        rank("FEAST_OF_OUR_LORD", "Feast of Our Lord", 3, true),
        rank("PRIVILEGED_LESSER_FEAST", "Privileged Lesser Feast", 4, true),
        rank("COMMEMORATION", "Commemoration", 5, false),
        rank("EMBER_DAY", "Ember Day", 6, false),
        rank("PRIVILEGED_FERIA", "Privileged Weekday", 7, false),
        rank("FERIA", "Weekday", 8, false),
    ]
}

pub fn rows() -> CalendarRows {
    let easter = CommemorationRow {
        mass_readings: vec![
            reading(None, 1, "Acts 10:34-43"),
            reading(Some(SundayCycle::A), 4, "Matthew 28:1-10"),
            reading(Some(SundayCycle::B), 4, "Mark 16:1-8"),
            reading(Some(SundayCycle::C), 4, "Luke 24:1-12"),
            reading(None, 3, "Colossians 3:1-4"),
        ],
        ..row("Easter Day", "PRINCIPAL_FEAST", "white")
    };
    let christmas = CommemorationRow {
        eve_collect: Some("Eve collect for Christmas Day".into()),
        ..row("Christmas Day", "PRINCIPAL_FEAST", "white")
    };
    let pentecost = CommemorationRow {
        alternate_collect: Some("Evening collect for Pentecost".into()),
        ..row("The Day of Pentecost", "PRINCIPAL_FEAST", "red")
    };
    let joseph = CommemorationRow {
        cannot_occur_after: Some("Palm Sunday".into()),
        ..row("Saint Joseph", "HOLY_DAY", "white")
    };
    let proper_sunday = CommemorationRow {
        collect: None,
        ..row("The Sunday closest to July 13", "SUNDAY", "green")
    };

    CalendarRows {
        ranks: ranks(),
        temporale: vec![
            moveable(row("Ash Wednesday", "PRIVILEGED_OBSERVANCE", "black"), -46),
            moveable(row("The First Sunday in Lent", "SUNDAY", "violet"), -42),
            moveable(row("Palm Sunday", "SUNDAY", "red"), -7),
            moveable(row("Good Friday", "PRIVILEGED_OBSERVANCE", "black"), -2),
            moveable(easter, 0),
            moveable(row("Ascension Day", "PRINCIPAL_FEAST", "white"), 39),
            moveable(pentecost, 49),
            moveable(row("Trinity Sunday", "PRINCIPAL_FEAST", "white"), 56),
        ],
        sanctorale_based: vec![
            after(row("The First Sunday of Advent", "SUNDAY", "violet"), 0, -4, 12, 25),
            after(row("The Second Sunday of Advent", "SUNDAY", "violet"), 0, -3, 12, 25),
            after(row("The Third Sunday of Advent", "SUNDAY", "rose"), 0, -2, 12, 25),
            after(row("The Fourth Sunday of Advent", "SUNDAY", "violet"), 0, -1, 12, 25),
            after(proper_sunday, 0, 1, 7, 9),
            after(row("Ember Wednesday in September", "EMBER_DAY", "violet"), 3, 1, 9, 14),
        ],
        sanctorale: vec![
            fixed(row("Saint Andrew", "HOLY_DAY", "red"), 11, 30),
            fixed(row("Saint Thomas", "HOLY_DAY", "red"), 12, 21),
            fixed(christmas, 12, 25),
            fixed(row("The Epiphany", "PRINCIPAL_FEAST", "white"), 1, 6),
            fixed(joseph, 3, 19),
            fixed(row(ANNUNCIATION, "HOLY_DAY", "white"), 3, 25),
            fixed(row("The Transfiguration", "FEAST_OF_OUR_LORD", "white"), 8, 6),
            fixed(row("Saint Luke", "HOLY_DAY", "red"), 10, 18),
            fixed(row("John Cassian, Monk", "COMMEMORATION", "white"), 2, 29),
        ],
        seasons: vec![
            season(1, "Advent", "The First Sunday of Advent", "violet", "FERIA"),
            season(2, "Christmas Season", "Christmas Day", "white", "FERIA"),
            season(3, "Season After Epiphany", "The Epiphany", "green", "FERIA"),
            season(4, "Lenten Season", "Ash Wednesday", "violet", "PRIVILEGED_FERIA"),
            season(5, "Holy Week", "Palm Sunday", "red", "PRIVILEGED_FERIA"),
            season(6, "Easter Season", "Easter Day", "white", "FERIA"),
            season(7, "Season After Pentecost", "Trinity Sunday", "green", "FERIA"),
        ],
        propers: vec![ProperRow {
            number: 10,
            start_month: 7,
            start_day: 10,
            end_month: 7,
            end_day: 16,
            collect: Some("Collect for Proper 10".into()),
        }],
    }
}

pub fn source_with(rows: CalendarRows) -> InMemoryRuleSource {
    InMemoryRuleSource::new().with_calendar(CALENDAR, rows)
}

pub fn rule_set_from(rows: CalendarRows) -> CommemorationRuleSet {
    CommemorationRuleSet::load(&source_with(rows), CALENDAR).unwrap()
}

pub fn rule_set() -> CommemorationRuleSet {
    rule_set_from(rows())
}

pub fn build(advent_year: i32) -> ChurchYear {
    init_tracing();
    ChurchYear::build(&rule_set(), advent_year, &ResolverSettings::default()).unwrap()
}

/// Names of the day's commemorations.
pub fn names(year: &ChurchYear, date: Date) -> Vec<String> {
    use cy_rules::Observance;
    year.get(date)
        .unwrap()
        .all()
        .iter()
        .map(|e| e.name().to_string())
        .collect()
}
