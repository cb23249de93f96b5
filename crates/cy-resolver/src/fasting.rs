//! Fast days.

use cy_core::settings::FastingRules;
use cy_rules::{Observance, Season};
use cy_time::{Date, Weekday};

use crate::calendar_date::Entry;

/// Fasting status of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FastDay {
    /// Not a fast day.
    #[default]
    NotAFastDay,
    /// An ember day with nothing required kept.
    EmberDay,
    /// A rogation day with nothing required kept.
    RogationDay,
    /// A weekday in Lent.
    LentenFast,
    /// A Friday outside the exempt seasons.
    WeeklyFast,
}

impl FastDay {
    /// Whether this is any kind of fast day.
    pub fn is_fast(&self) -> bool {
        !matches!(self, FastDay::NotAFastDay)
    }

    /// Decide the status of `date`, whose commemorations (in day order) are
    /// `entries` and whose season is `season`.
    pub(crate) fn assess(
        date: Date,
        entries: &[Entry],
        season: &Season,
        rules: &FastingRules,
    ) -> Self {
        let weekday = date.weekday();
        if weekday == Weekday::Sunday {
            return FastDay::NotAFastDay;
        }

        let first_required = entries.iter().find(|e| e.is_required());
        if first_required.is_none() {
            for optional in entries {
                let rank = &optional.rank().name;
                if rules.ember_ranks.contains(rank) {
                    return FastDay::EmberDay;
                }
                if rules.rogation_ranks.contains(rank) {
                    return FastDay::RogationDay;
                }
            }
        }

        if rules.exempt_seasons.contains(&season.name) {
            return FastDay::NotAFastDay;
        }

        if season.name == rules.lenten_season {
            let exempt = first_required
                .map_or(false, |e| rules.lenten_exemptions.iter().any(|n| n == e.name()));
            return if exempt {
                FastDay::NotAFastDay
            } else {
                FastDay::LentenFast
            };
        }

        if first_required.map_or(false, |e| rules.friday_exempt_ranks.contains(&e.rank().name)) {
            return FastDay::NotAFastDay;
        }

        if weekday == Weekday::Friday {
            FastDay::WeeklyFast
        } else {
            FastDay::NotAFastDay
        }
    }
}

impl std::fmt::Display for FastDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            FastDay::NotAFastDay => "not a fast day",
            FastDay::EmberDay => "ember day",
            FastDay::RogationDay => "rogation day",
            FastDay::LentenFast => "Lenten fast",
            FastDay::WeeklyFast => "Friday fast",
        })
    }
}
