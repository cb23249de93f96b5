//! Ferial weekdays.
//!
//! Every weekday other than Sunday carries a feria: the plain weekday of its
//! season, kept when no commemoration outranks it.  A feria is named after
//! the closest preceding anchor day ("Tuesday after the Second Sunday of
//! Advent") and borrows that day's collects.

use std::sync::Arc;

use cy_rules::{Color, CommemorationRank, Observance, Season};
use cy_time::Weekday;

use crate::calendar_date::Collects;

/// A ferial weekday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feria {
    name: String,
    rank: Arc<CommemorationRank>,
    color: Color,
    alternate_color: Option<Color>,
    anchor: Option<String>,
    collects: Collects,
}

impl Feria {
    /// The plain feria of `season`, named after the season's rank.
    pub fn of_season(season: &Season) -> Self {
        Self {
            name: season.rank.formatted_name.clone(),
            rank: Arc::clone(&season.rank),
            color: season.color.clone(),
            alternate_color: season.alternate_color.clone(),
            anchor: None,
            collects: Collects::default(),
        }
    }

    /// Name this feria after `anchor` and borrow the anchor's collects.
    pub fn after(mut self, weekday: Weekday, anchor: &str, collects: &Collects) -> Self {
        self.name = format!("{weekday} after {anchor}");
        self.anchor = Some(anchor.to_string());
        self.collects = collects.clone();
        self
    }

    /// Name of the anchor observance, if any.
    pub fn anchor(&self) -> Option<&str> {
        self.anchor.as_deref()
    }
}

impl Observance for Feria {
    fn name(&self) -> &str {
        &self.name
    }

    fn rank(&self) -> &CommemorationRank {
        &self.rank
    }

    fn color(&self) -> Option<&Color> {
        Some(&self.color)
    }

    fn alternate_color(&self) -> Option<&Color> {
        self.alternate_color.as_ref()
    }

    fn collect(&self) -> Option<&str> {
        self.collects.morning.as_deref()
    }

    fn alternate_collect(&self) -> Option<&str> {
        self.collects.evening.as_deref()
    }
}

impl std::fmt::Display for Feria {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn advent() -> Season {
        Season {
            order: 1,
            name: "Advent".into(),
            start_commemoration: "The First Sunday of Advent".into(),
            color: Color::Violet,
            alternate_color: Some(Color::Blue),
            rank: Arc::new(CommemorationRank::new("ADVENT_FERIA", "Advent Weekday", 9, false).unwrap()),
        }
    }

    #[test]
    fn plain_feria_takes_the_season() {
        let feria = Feria::of_season(&advent());
        assert_eq!(feria.name(), "Advent Weekday");
        assert_eq!(feria.color(), Some(&Color::Violet));
        assert_eq!(feria.alternate_color(), Some(&Color::Blue));
        assert_eq!(feria.precedence(), 9);
        assert!(feria.collect().is_none());
    }

    #[test]
    fn anchored_feria_borrows_collects() {
        let collects = Collects {
            morning: Some("Almighty God, give us grace".into()),
            evening: Some("Almighty God, give us grace".into()),
        };
        let feria = Feria::of_season(&advent()).after(
            Weekday::Tuesday,
            "The First Sunday of Advent",
            &collects,
        );
        assert_eq!(feria.name(), "Tuesday after The First Sunday of Advent");
        assert_eq!(feria.anchor(), Some("The First Sunday of Advent"));
        assert_eq!(feria.collect(), Some("Almighty God, give us grace"));
    }
}
