//! `CalendarYear`: a civil year read across two ecclesiastical years.
//!
//! January 1 through the Saturday before Advent Sunday belong to the year
//! that began at the previous Advent; Advent Sunday through December 31
//! belong to the year beginning that Advent.

use std::sync::Arc;

use crate::calendar_date::CalendarDate;
use crate::church_year::ChurchYear;
use cy_core::ensure;
use cy_core::errors::Result;
use cy_time::{Date, Month};

/// A read-only view of civil year `year` stitched from two Church Years.
#[derive(Debug, Clone)]
pub struct CalendarYear {
    year: i32,
    prior: Arc<ChurchYear>,
    current: Arc<ChurchYear>,
}

impl CalendarYear {
    /// Stitch civil year `year` from the ecclesiastical years beginning at
    /// Advent `year - 1` (`prior`) and Advent `year` (`current`).
    ///
    /// # Errors
    /// [`Error::Precondition`] if the two years are not those two, or belong
    /// to different calendars.
    pub fn build(year: i32, prior: Arc<ChurchYear>, current: Arc<ChurchYear>) -> Result<Self> {
        ensure!(
            prior.advent_year() == year - 1,
            "prior Church Year begins in {}, expected {}",
            prior.advent_year(),
            year - 1
        );
        ensure!(
            current.advent_year() == year,
            "current Church Year begins in {}, expected {}",
            current.advent_year(),
            year
        );
        ensure!(
            prior.calendar() == current.calendar(),
            "Church Years belong to different calendars ({} and {})",
            prior.calendar(),
            current.calendar()
        );
        Ok(Self {
            year,
            prior,
            current,
        })
    }

    /// The civil year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Calendar abbreviation.
    pub fn calendar(&self) -> &str {
        self.current.calendar()
    }

    /// The resolved day for `date`, if it lies in this civil year.
    pub fn get(&self, date: Date) -> Option<&CalendarDate> {
        if date.year() != self.year {
            return None;
        }
        if date < self.current.start() {
            self.prior.get(date)
        } else {
            self.current.get(date)
        }
    }

    /// Every day from January 1 to December 31, ascending.
    pub fn iter(&self) -> impl Iterator<Item = &CalendarDate> + '_ {
        let year = self.year;
        let head = self.prior.iter().filter(move |d| d.date().year() == year);
        let tail = self
            .current
            .iter()
            .take_while(move |d| d.date().year() == year);
        head.chain(tail)
    }

    /// Days of one month, ascending.
    pub fn month(&self, month: Month) -> impl Iterator<Item = &CalendarDate> + '_ {
        self.iter().filter(move |d| d.date().month_of_year() == month)
    }

    /// Number of days (365 or 366).
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Always false for a built year.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
