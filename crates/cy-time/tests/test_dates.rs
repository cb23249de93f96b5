//! Property tests for Easter, Advent, and weekday walking.

use proptest::prelude::*;

use cy_time::date::is_leap_year;
use cy_time::{advent_sunday, Date, Easter, EcclesiasticalYear, Weekday};

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

// ─── Easter ───────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn easter_is_a_sunday_between_march_22_and_april_25(year in 1583i32..=9999) {
        let easter = Easter::sunday(year).unwrap();
        prop_assert_eq!(easter.weekday(), Weekday::Sunday);
        prop_assert!(easter >= date(year, 3, 22), "{:?}", easter);
        prop_assert!(easter <= date(year, 4, 25), "{:?}", easter);
    }

    #[test]
    fn ash_wednesday_is_a_wednesday(year in 1583i32..=9999) {
        prop_assert_eq!(Easter::ash_wednesday(year).unwrap().weekday(), Weekday::Wednesday);
        prop_assert_eq!(Easter::pentecost(year).unwrap().weekday(), Weekday::Sunday);
    }

    #[test]
    fn advent_sunday_is_closest_sunday_to_st_andrew(year in 1583i32..=9999) {
        let advent = advent_sunday(year).unwrap();
        let st_andrew = date(year, 11, 30);
        prop_assert_eq!(advent.weekday(), Weekday::Sunday);
        prop_assert!((advent - st_andrew).abs() <= 3);
        let to_christmas = date(year, 12, 25) - advent;
        prop_assert!((22..=28).contains(&to_christmas));
    }

    #[test]
    fn ecclesiastical_year_is_52_or_53_weeks(year in 1583i32..9999) {
        let y = EcclesiasticalYear::new(year).unwrap();
        prop_assert!(y.len_days() == 364 || y.len_days() == 371);
        prop_assert_eq!(y.days().count(), y.len_days());
        prop_assert_eq!(y.end().succ().unwrap(), advent_sunday(year + 1).unwrap());
    }

    #[test]
    fn first_weekday_after_is_within_a_week(
        serial in Date::MIN.serial()..Date::MAX.serial() - 60,
        weekday in 0u8..7,
        n in 1i32..5,
    ) {
        let anchor = Date::from_serial(serial).unwrap();
        let weekday = Weekday::from_sunday_index(weekday).unwrap();
        let found = anchor.nth_weekday_after(weekday, n).unwrap();
        prop_assert_eq!(found.weekday(), weekday);
        let gap = found - anchor;
        prop_assert!(gap > 7 * (n - 1) && gap <= 7 * n);
    }
}

// ─── Concrete dates ───────────────────────────────────────────────────────────

#[test]
fn easter_2024_and_its_offsets() {
    assert_eq!(Easter::sunday(2024).unwrap(), date(2024, 3, 31));
    assert_eq!(Easter::ash_wednesday(2024).unwrap(), date(2024, 2, 14));
    assert_eq!(Easter::pentecost(2024).unwrap(), date(2024, 5, 19));
}

#[test]
fn first_sunday_after_october_18_2025() {
    let anchor = date(2025, 10, 18);
    assert_eq!(
        anchor.nth_weekday_after(Weekday::Sunday, 1).unwrap(),
        date(2025, 10, 19)
    );
}

#[test]
fn leap_years() {
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(2025));
    assert!(!is_leap_year(2100));
    assert!(is_leap_year(2000));
}
