//! Advent Sunday and the bounds of an ecclesiastical year.
//!
//! The ecclesiastical year named after civil year Y begins on Advent Sunday
//! of Y (the fourth Sunday before Christmas Day) and ends on the Saturday
//! before Advent Sunday of Y + 1.  It is 364 or 371 days long.

use crate::date::Date;
use crate::weekday::Weekday;
use cy_core::errors::Result;

/// Advent Sunday of `year`: the fourth Sunday strictly before December 25,
/// which is also the Sunday closest to November 30.
pub fn advent_sunday(year: i32) -> Result<Date> {
    Date::from_ymd(year, 12, 25)?.nth_weekday_after(Weekday::Sunday, -4)
}

/// The inclusive span of one ecclesiastical year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EcclesiasticalYear {
    advent_year: i32,
    start: Date,
    end: Date,
}

impl EcclesiasticalYear {
    /// The ecclesiastical year beginning on Advent Sunday of `advent_year`.
    ///
    /// # Errors
    /// [`cy_core::Error::InvalidYear`] unless both `advent_year` and the
    /// following year are supported.
    pub fn new(advent_year: i32) -> Result<Self> {
        let start = advent_sunday(advent_year)?;
        let end = advent_sunday(advent_year + 1)?.pred()?;
        Ok(Self {
            advent_year,
            start,
            end,
        })
    }

    /// The ecclesiastical year that contains `date`.
    pub fn containing(date: Date) -> Result<Self> {
        let year = date.year();
        if date >= advent_sunday(year)? {
            Self::new(year)
        } else {
            Self::new(year - 1)
        }
    }

    /// The civil year in which this ecclesiastical year begins.
    pub fn advent_year(&self) -> i32 {
        self.advent_year
    }

    /// Advent Sunday (first day).
    pub fn start(&self) -> Date {
        self.start
    }

    /// The Saturday before the next Advent Sunday (last day).
    pub fn end(&self) -> Date {
        self.end
    }

    /// Whether `date` falls within this year.
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of days (364 or 371).
    pub fn len_days(&self) -> usize {
        (self.end - self.start + 1) as usize
    }

    /// Iterate over every day, ascending.
    pub fn days(&self) -> crate::date::DateRange {
        Date::range_inclusive(self.start, self.end)
    }
}
