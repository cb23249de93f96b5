//! Month-of-year enum.

use crate::date::days_in_month;

/// Month of the year, numbered 1–12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Month {
    /// January (1).
    January = 1,
    /// February (2).
    February = 2,
    /// March (3).
    March = 3,
    /// April (4).
    April = 4,
    /// May (5).
    May = 5,
    /// June (6).
    June = 6,
    /// July (7).
    July = 7,
    /// August (8).
    August = 8,
    /// September (9).
    September = 9,
    /// October (10).
    October = 10,
    /// November (11).
    November = 11,
    /// December (12).
    December = 12,
}

const ALL: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

impl Month {
    /// Construct from a number (1 = January … 12 = December).
    pub fn from_number(n: u8) -> Option<Self> {
        ALL.get(usize::from(n).checked_sub(1)?).copied()
    }

    /// Return the 1-based month number.
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Number of days this month has in `year`.
    pub fn days_in(&self, year: i32) -> u8 {
        days_in_month(year, self.number())
    }

    /// All twelve months in order.
    pub fn all() -> impl Iterator<Item = Month> {
        ALL.into_iter()
    }

    /// Return the full English name.
    pub fn name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Month {
    type Error = cy_core::Error;

    fn try_from(n: u8) -> cy_core::Result<Self> {
        Self::from_number(n)
            .ok_or_else(|| cy_core::Error::Date(format!("month {n} out of range [1, 12]")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbering() {
        assert_eq!(Month::all().count(), 12);
        for m in Month::all() {
            assert_eq!(Month::from_number(m.number()), Some(m));
        }
        assert!(Month::from_number(0).is_none());
        assert!(Month::try_from(13).is_err());
    }

    #[test]
    fn february_length() {
        assert_eq!(Month::February.days_in(2024), 29);
        assert_eq!(Month::February.days_in(2025), 28);
        assert_eq!(Month::February.days_in(1900), 28);
    }
}
