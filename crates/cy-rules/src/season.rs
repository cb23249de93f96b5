//! Liturgical seasons and numbered propers.

use std::sync::Arc;

use crate::color::Color;
use crate::rank::CommemorationRank;
use cy_core::errors::{Error, Result};
use cy_time::date::days_in_month;
use cy_time::Date;

/// A season of the Church Year.
///
/// A season opens on the date of its start commemoration and runs until the
/// next season opens.  Its rank also serves as the rank of the ferial
/// weekdays within it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Season {
    /// Position within the year (Advent = 1 …).
    pub order: u32,
    /// Display name, e.g. `"Lenten Season"`.
    pub name: String,
    /// Name of the commemoration marking the first day.
    pub start_commemoration: String,
    /// Default color.
    pub color: Color,
    /// Alternate color.
    pub alternate_color: Option<Color>,
    /// Rank of ferial weekdays in this season.
    pub rank: Arc<CommemorationRank>,
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// A year-agnostic month/day pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDay {
    /// Month (1–12).
    pub month: u8,
    /// Day of the month.
    pub day: u8,
}

impl MonthDay {
    /// Create a validated month/day.  February 29 is allowed.
    pub fn new(month: u8, day: u8) -> Result<Self> {
        let max = days_in_month(2000, month);
        if max == 0 || day == 0 || day > max {
            return Err(Error::InvalidRule(format!("no such day {month:02}-{day:02}")));
        }
        Ok(Self { month, day })
    }

    /// The month/day of `date`.
    pub fn of(date: Date) -> Self {
        let (_, month, day) = date.ymd();
        Self { month, day }
    }
}

/// A numbered proper of Ordinary Time, appointed by month/day range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proper {
    /// Proper number (1–29).
    pub number: u8,
    /// First month/day of the range.
    pub start: MonthDay,
    /// Last month/day of the range (inclusive).
    pub end: MonthDay,
    /// Collect of the proper.
    pub collect: Option<String>,
}

impl Proper {
    /// Whether `date` falls within this proper's range, ignoring the year.
    /// A range whose start is after its end wraps through the new year.
    pub fn contains(&self, date: Date) -> bool {
        let md = MonthDay::of(date);
        if self.start <= self.end {
            self.start <= md && md <= self.end
        } else {
            md >= self.start || md <= self.end
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn proper(start: (u8, u8), end: (u8, u8)) -> Proper {
        Proper {
            number: 1,
            start: MonthDay::new(start.0, start.1).unwrap(),
            end: MonthDay::new(end.0, end.1).unwrap(),
            collect: None,
        }
    }

    #[test]
    fn month_day_validation() {
        assert!(MonthDay::new(2, 29).is_ok());
        assert!(MonthDay::new(2, 30).is_err());
        assert!(MonthDay::new(0, 1).is_err());
    }

    #[test]
    fn proper_range_ignores_year() {
        let p = proper((5, 8), (5, 14));
        assert!(p.contains(date(2019, 5, 8)));
        assert!(p.contains(date(2031, 5, 14)));
        assert!(!p.contains(date(2031, 5, 15)));
    }

    #[test]
    fn wrapping_range() {
        let p = proper((12, 20), (1, 5));
        assert!(p.contains(date(2024, 12, 31)));
        assert!(p.contains(date(2025, 1, 2)));
        assert!(!p.contains(date(2025, 6, 1)));
    }
}
