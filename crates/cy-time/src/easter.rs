//! Easter and the dates computed from it.
//!
//! Easter Sunday is found with the anonymous Gregorian algorithm (Meeus /
//! Jones / Butcher), integer arithmetic only.  Every other moveable feast of
//! the Temporale is a fixed day offset from it.

use crate::date::{check_year, Date};
use cy_core::errors::Result;

/// Ash Wednesday, relative to Easter Day.
pub const ASH_WEDNESDAY: i32 = -46;
/// Palm Sunday, relative to Easter Day.
pub const PALM_SUNDAY: i32 = -7;
/// Maundy Thursday, relative to Easter Day.
pub const MAUNDY_THURSDAY: i32 = -3;
/// Good Friday, relative to Easter Day.
pub const GOOD_FRIDAY: i32 = -2;
/// Holy Saturday, relative to Easter Day.
pub const HOLY_SATURDAY: i32 = -1;
/// Ascension Day, relative to Easter Day.
pub const ASCENSION: i32 = 39;
/// The Day of Pentecost, relative to Easter Day.
pub const PENTECOST: i32 = 49;
/// Trinity Sunday, relative to Easter Day.
pub const TRINITY_SUNDAY: i32 = 56;

/// Easter date utilities.
pub struct Easter;

impl Easter {
    /// Return Easter Day for `year`.
    ///
    /// # Errors
    /// [`cy_core::Error::InvalidYear`] outside `1583..=9999`.
    pub fn sunday(year: i32) -> Result<Date> {
        check_year(year)?;
        let a = year % 19;
        let b = year / 100;
        let c = year % 100;
        let d = b / 4;
        let e = b % 4;
        let f = (b + 8) / 25;
        let g = (b - f + 1) / 3;
        let h = (19 * a + b - d - g + 15) % 30;
        let i = c / 4;
        let k = c % 4;
        let l = (32 + 2 * e + 2 * i - h - k) % 7;
        let m = (a + 11 * h + 22 * l) / 451;
        let n = h + l - 7 * m + 114;
        Date::from_ymd(year, (n / 31) as u8, (n % 31 + 1) as u8)
    }

    /// Return Easter Day of `year` shifted by `days` (negative = before).
    pub fn offset(year: i32, days: i32) -> Result<Date> {
        Self::sunday(year)?.add_days(days)
    }

    /// Ash Wednesday of `year`.
    pub fn ash_wednesday(year: i32) -> Result<Date> {
        Self::offset(year, ASH_WEDNESDAY)
    }

    /// Palm Sunday of `year`.
    pub fn palm_sunday(year: i32) -> Result<Date> {
        Self::offset(year, PALM_SUNDAY)
    }

    /// Maundy Thursday of `year`.
    pub fn maundy_thursday(year: i32) -> Result<Date> {
        Self::offset(year, MAUNDY_THURSDAY)
    }

    /// Good Friday of `year`.
    pub fn good_friday(year: i32) -> Result<Date> {
        Self::offset(year, GOOD_FRIDAY)
    }

    /// Holy Saturday of `year`.
    pub fn holy_saturday(year: i32) -> Result<Date> {
        Self::offset(year, HOLY_SATURDAY)
    }

    /// Ascension Day of `year`.
    pub fn ascension(year: i32) -> Result<Date> {
        Self::offset(year, ASCENSION)
    }

    /// The Day of Pentecost of `year`.
    pub fn pentecost(year: i32) -> Result<Date> {
        Self::offset(year, PENTECOST)
    }

    /// Trinity Sunday of `year`.
    pub fn trinity_sunday(year: i32) -> Result<Date> {
        Self::offset(year, TRINITY_SUNDAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weekday::Weekday;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn known_easters() {
        let known = [
            (1583, 4, 10),
            (1818, 3, 22),
            (1943, 4, 25),
            (2000, 4, 23),
            (2019, 4, 21),
            (2024, 3, 31),
            (2025, 4, 20),
            (2038, 4, 25),
            (2285, 3, 22),
        ];
        for (y, m, d) in known {
            assert_eq!(Easter::sunday(y).unwrap(), date(y, m, d), "Easter {y}");
        }
    }

    #[test]
    fn offsets_2024() {
        assert_eq!(Easter::ash_wednesday(2024).unwrap(), date(2024, 2, 14));
        assert_eq!(Easter::palm_sunday(2024).unwrap(), date(2024, 3, 24));
        assert_eq!(Easter::good_friday(2024).unwrap(), date(2024, 3, 29));
        assert_eq!(Easter::ascension(2024).unwrap(), date(2024, 5, 9));
        assert_eq!(Easter::pentecost(2024).unwrap(), date(2024, 5, 19));
        assert_eq!(Easter::trinity_sunday(2024).unwrap(), date(2024, 5, 26));
        assert_eq!(Easter::maundy_thursday(2024).unwrap().weekday(), Weekday::Thursday);
        assert_eq!(Easter::holy_saturday(2024).unwrap().weekday(), Weekday::Saturday);
    }

    #[test]
    fn invalid_years() {
        assert!(matches!(
            Easter::sunday(0),
            Err(cy_core::Error::InvalidYear { year: 0, .. })
        ));
        assert!(Easter::sunday(-5).is_err());
        assert!(Easter::sunday(1582).is_err());
        assert!(Easter::sunday(10_000).is_err());
        assert!(Easter::sunday(i32::MAX).is_err());
    }
}
