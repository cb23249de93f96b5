//! Lectionary and office cycles of an ecclesiastical year.

use cy_rules::SundayCycle;

/// The two-year weekday (daily mass) lectionary cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeekdayCycle {
    /// Year 1 (the year ends in an odd civil year).
    One,
    /// Year 2.
    Two,
}

/// The two-year daily office lectionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OfficeYear {
    /// Year 1 (Advent falls in an even civil year).
    One,
    /// Year 2.
    Two,
}

/// Every cycle in force for the ecclesiastical year beginning in
/// `advent_year`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cycles {
    /// Sunday lectionary: A, B or C.
    pub sunday: SundayCycle,
    /// Weekday lectionary.
    pub weekday: WeekdayCycle,
    /// Daily office lectionary.
    pub office: OfficeYear,
}

impl Cycles {
    /// Cycles of the year beginning at Advent of `advent_year`.
    pub fn for_advent_year(advent_year: i32) -> Self {
        let end_year = advent_year + 1;
        Self {
            sunday: SundayCycle::for_advent_year(advent_year),
            weekday: if end_year.rem_euclid(2) == 1 {
                WeekdayCycle::One
            } else {
                WeekdayCycle::Two
            },
            office: if advent_year.rem_euclid(2) == 0 {
                OfficeYear::One
            } else {
                OfficeYear::Two
            },
        }
    }
}

impl std::fmt::Display for WeekdayCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            WeekdayCycle::One => "1",
            WeekdayCycle::Two => "2",
        })
    }
}

impl std::fmt::Display for OfficeYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            OfficeYear::One => "1",
            OfficeYear::Two => "2",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_beginning_advent_2024() {
        let c = Cycles::for_advent_year(2024);
        assert_eq!(c.sunday, SundayCycle::C);
        assert_eq!(c.weekday, WeekdayCycle::One);
        assert_eq!(c.office, OfficeYear::One);
    }

    #[test]
    fn year_beginning_advent_2025() {
        let c = Cycles::for_advent_year(2025);
        assert_eq!(c.sunday, SundayCycle::A);
        assert_eq!(c.weekday, WeekdayCycle::Two);
        assert_eq!(c.office, OfficeYear::Two);
        assert_eq!(c.weekday.to_string(), "2");
    }
}
