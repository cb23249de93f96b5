//! `Date` type.
//!
//! Dates are stored as a serial number of days relative to the civil epoch
//! 1970-01-01 on the proleptic Gregorian calendar.  Only years in
//! [`Date::MIN_YEAR`]`..=`[`Date::MAX_YEAR`] are representable: the lower
//! bound is the first full year of the Gregorian reform, which is also the
//! first year the Easter computation is valid for.
//!
//! Every date has a canonical string key, `YYYY-MM-DD`, used to index the
//! days of a Church Year.

use std::str::FromStr;

use crate::month::Month;
use crate::weekday::Weekday;
use cy_core::errors::{Error, Result};

/// A calendar date represented as a serial day number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Smallest supported year.
    pub const MIN_YEAR: i32 = 1583;

    /// Largest supported year.
    pub const MAX_YEAR: i32 = 9999;

    /// January 1, 1583.
    pub const MIN: Date = Date(serial_from_ymd(Self::MIN_YEAR, 1, 1));

    /// December 31, 9999.
    pub const MAX: Date = Date(serial_from_ymd(Self::MAX_YEAR, 12, 31));

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month.
    ///
    /// # Errors
    /// [`Error::InvalidYear`] for an unsupported year, [`Error::Date`] for an
    /// impossible month or day.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self> {
        check_year(year)?;
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Create a date from a serial day number (0 = 1970-01-01).
    pub fn from_serial(serial: i32) -> Result<Self> {
        let d = Date(serial);
        if d < Self::MIN || d > Self::MAX {
            return Err(Error::Date(format!("serial {serial} out of range")));
        }
        Ok(d)
    }

    /// Parse a `YYYY-MM-DD` key.
    pub fn parse_key(key: &str) -> Result<Self> {
        let bad = || Error::Date(format!("malformed date key {key:?}, expected YYYY-MM-DD"));
        let mut parts = key.trim().splitn(3, '-');
        let year = parts.next().and_then(|p| p.parse::<i32>().ok()).ok_or_else(bad)?;
        let month = parts.next().and_then(|p| p.parse::<u8>().ok()).ok_or_else(bad)?;
        let day = parts.next().and_then(|p| p.parse::<u8>().ok()).ok_or_else(bad)?;
        Self::from_ymd(year, month, day)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return `(year, month, day)`.
    pub fn ymd(&self) -> (i32, u8, u8) {
        ymd_from_serial(self.0)
    }

    /// Return the year.
    pub fn year(&self) -> i32 {
        self.ymd().0
    }

    /// Return the month number (1–12).
    pub fn month(&self) -> u8 {
        self.ymd().1
    }

    /// Return the month as a [`Month`].
    pub fn month_of_year(&self) -> Month {
        Month::from_number(self.month()).unwrap_or(Month::January)
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        self.ymd().2
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let year = self.year();
        (self.0 - serial_from_ymd(year, 1, 1) + 1) as u16
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // 1970-01-01 was a Thursday (ISO ordinal 4).
        let w = ((self.0 + 3).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).unwrap_or(Weekday::Monday)
    }

    /// The canonical `YYYY-MM-DD` key.
    pub fn key(&self) -> String {
        let (y, m, d) = self.ymd();
        format!("{y:04}-{m:02}-{d:02}")
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self
            .0
            .checked_add(n)
            .ok_or_else(|| Error::Date("date arithmetic overflow".into()))?;
        Self::from_serial(serial)
    }

    /// The following day.
    pub fn succ(self) -> Result<Self> {
        self.add_days(1)
    }

    /// The preceding day.
    pub fn pred(self) -> Result<Self> {
        self.add_days(-1)
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Walk to the `n`-th `weekday` strictly after this date, or strictly
    /// before it when `n` is negative.
    ///
    /// `nth_weekday_after(Weekday::Sunday, 1)` on a Sunday returns the next
    /// Sunday, never the date itself.
    ///
    /// # Errors
    /// Returns an error if `n` is zero or the result is out of range.
    pub fn nth_weekday_after(self, weekday: Weekday, n: i32) -> Result<Self> {
        let current = self.weekday().ordinal() as i32;
        let target = weekday.ordinal() as i32;
        let overflow = || Error::Date(format!("nth_weekday_after: {n} weeks out of range"));
        let weeks = |k: i32| {
            k.checked_sub(1)
                .and_then(|k| k.checked_mul(7))
                .ok_or_else(overflow)
        };
        match n {
            0 => Err(Error::Date("nth_weekday_after: n must be non-zero".into())),
            n if n > 0 => {
                let mut skip = (target - current).rem_euclid(7);
                if skip == 0 {
                    skip = 7;
                }
                let days = weeks(n)?.checked_add(skip).ok_or_else(overflow)?;
                self.add_days(days)
            }
            n => {
                let mut back = (current - target).rem_euclid(7);
                if back == 0 {
                    back = 7;
                }
                let days = weeks(n.checked_neg().ok_or_else(overflow)?)?
                    .checked_add(back)
                    .ok_or_else(overflow)?;
                self.add_days(-days)
            }
        }
    }

    /// Iterate over every date in `[start, end]`, ascending.
    pub fn range_inclusive(start: Date, end: Date) -> DateRange {
        DateRange {
            next: (start <= end).then_some(start),
            end,
        }
    }
}

// ── Iteration ─────────────────────────────────────────────────────────────────

/// Ascending iterator over an inclusive span of dates.
#[derive(Debug, Clone)]
pub struct DateRange {
    next: Option<Date>,
    end: Date,
}

impl Iterator for DateRange {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        let current = self.next?;
        self.next = if current < self.end {
            Some(Date(current.0 + 1))
        } else {
            None
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self
            .next
            .map(|d| (self.end.0 - d.0 + 1) as usize)
            .unwrap_or(0);
        (n, Some(n))
    }
}

impl ExactSizeIterator for DateRange {}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Parsing and display ───────────────────────────────────────────────────────

impl FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_key(s)
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, _, d) = self.ymd();
        write!(f, "{d} {} {y}", self.month_of_year())
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({})", self.key())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.key())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        Date::parse_key(&key).map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "chrono")]
impl From<Date> for chrono::NaiveDate {
    fn from(date: Date) -> Self {
        let (y, m, d) = date.ymd();
        // Every representable `Date` is a valid proleptic Gregorian date.
        chrono::NaiveDate::from_ymd_opt(y, m as u32, d as u32).unwrap_or_default()
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<chrono::NaiveDate> for Date {
    type Error = Error;

    fn try_from(date: chrono::NaiveDate) -> Result<Self> {
        use chrono::Datelike;
        Date::from_ymd(date.year(), date.month() as u8, date.day() as u8)
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Return `Err(Error::InvalidYear)` unless `year` is supported.
pub fn check_year(year: i32) -> Result<()> {
    if !(Date::MIN_YEAR..=Date::MAX_YEAR).contains(&year) {
        return Err(Error::InvalidYear {
            year,
            min: Date::MIN_YEAR,
            max: Date::MAX_YEAR,
        });
    }
    Ok(())
}

/// Whether a given year is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.  Returns 0 for an invalid month.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Days since 1970-01-01 for a proleptic Gregorian date (years >= 1).
const fn serial_from_ymd(year: i32, month: u8, day: u8) -> i32 {
    let m = month as i32;
    let y = if m <= 2 { year - 1 } else { year };
    let era = y / 400;
    let yoe = y - era * 400;
    let mp = if m > 2 { m - 3 } else { m + 9 };
    let doy = (153 * mp + 2) / 5 + day as i32 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Inverse of [`serial_from_ymd`].
fn ymd_from_serial(serial: i32) -> (i32, u8, u8) {
    let z = serial + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let month = if mp < 10 { mp + 3 } else { mp - 9 } as u8;
    let year = yoe + era * 400 + i32::from(month <= 2);
    (year, month, day)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
