//! Resolver settings.
//!
//! [`ResolverSettings`] carries the denomination-specific knobs the Church
//! Year resolver needs beyond the rule records themselves: which rank names
//! and season names drive fasting, transfers, propers and ferial naming, and
//! how long a built year may be cached.  There is no process-wide instance;
//! callers construct one (usually via `Default`) and pass it to every build.

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default lifetime of a cached Church Year (12 hours).
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(12 * 60 * 60);

/// All settings consumed by the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ResolverSettings {
    /// Fast-day rules.
    pub fasting: FastingRules,
    /// Transfer rules for colliding required commemorations.
    pub transfers: TransferRules,
    /// Where numbered propers apply.
    pub propers: ProperRules,
    /// Ferial naming anchors.
    pub ferias: FeriaRules,
    /// Time-to-live of cached Church Years.
    pub cache_ttl: Duration,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            fasting: FastingRules::default(),
            transfers: TransferRules::default(),
            propers: ProperRules::default(),
            ferias: FeriaRules::default(),
            cache_ttl: DEFAULT_CACHE_TTL,
        }
    }
}

impl ResolverSettings {
    /// Replace the fasting rules.
    pub fn with_fasting(mut self, fasting: FastingRules) -> Self {
        self.fasting = fasting;
        self
    }

    /// Replace the transfer rules.
    pub fn with_transfers(mut self, transfers: TransferRules) -> Self {
        self.transfers = transfers;
        self
    }

    /// Turn transfers off entirely.
    pub fn without_transfers(mut self) -> Self {
        self.transfers.enabled = false;
        self
    }

    /// Replace the proper rules.
    pub fn with_propers(mut self, propers: ProperRules) -> Self {
        self.propers = propers;
        self
    }

    /// Replace the ferial naming rules.
    pub fn with_ferias(mut self, ferias: FeriaRules) -> Self {
        self.ferias = ferias;
        self
    }

    /// Set the cache time-to-live.
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }
}

/// Which days are fast days.
///
/// Sundays are never fast days.  Otherwise, in order: ember and rogation
/// days (when nothing required is kept), exempt seasons, the Lenten season,
/// feasts that lift the Friday fast, and finally Fridays.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FastingRules {
    /// Rank names marking ember days.
    pub ember_ranks: Vec<String>,
    /// Rank names marking rogation days.
    pub rogation_ranks: Vec<String>,
    /// Seasons in which no weekday is a fast day.
    pub exempt_seasons: Vec<String>,
    /// The season whose weekdays are all fast days.
    pub lenten_season: String,
    /// Required commemorations that lift the Lenten fast.
    pub lenten_exemptions: Vec<String>,
    /// Rank names of feasts that lift the Friday fast.
    pub friday_exempt_ranks: Vec<String>,
}

impl Default for FastingRules {
    fn default() -> Self {
        Self {
            ember_ranks: vec!["EMBER_DAY".into()],
            rogation_ranks: vec!["ROGATION_DAY".into()],
            exempt_seasons: vec!["Christmas Season".into(), "Easter Season".into()],
            lenten_season: "Lenten Season".into(),
            lenten_exemptions: vec![
                "The Annunciation of Our Lord Jesus Christ to the Blessed Virgin Mary".into(),
            ],
            friday_exempt_ranks: vec!["FEAST_OF_OUR_LORD".into()],
        }
    }
}

/// How colliding required commemorations move to later days.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TransferRules {
    /// Whether transfers happen at all.
    pub enabled: bool,
    /// Rank name of a privileged lesser feast.  When such a feast heads a
    /// day that also has optional commemorations, every required
    /// commemoration of that day moves to the next day.
    pub privileged_lesser_feast_rank: Option<String>,
}

impl Default for TransferRules {
    fn default() -> Self {
        Self {
            enabled: true,
            privileged_lesser_feast_rank: Some("PRIVILEGED_LESSER_FEAST".into()),
        }
    }
}

/// Where numbered propers apply.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProperRules {
    /// The season whose Sundays take a numbered proper.
    pub season: String,
    /// Rank name of a Sunday observance.
    pub sunday_rank: String,
}

impl Default for ProperRules {
    fn default() -> Self {
        Self {
            season: "Season After Pentecost".into(),
            sunday_rank: "SUNDAY".into(),
        }
    }
}

/// Which observances a weekday feria is named after.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FeriaRules {
    /// Names (substring match) of required observances that anchor the
    /// following weekdays, in addition to Sundays.
    pub anchors: Vec<String>,
}

impl Default for FeriaRules {
    fn default() -> Self {
        Self {
            anchors: vec!["Christmas Day".into(), "Ash Wednesday".into()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ttl_is_twelve_hours() {
        assert_eq!(ResolverSettings::default().cache_ttl.as_secs(), 43_200);
    }

    #[test]
    fn builder_overrides() {
        let s = ResolverSettings::default()
            .without_transfers()
            .with_cache_ttl(Duration::from_secs(5));
        assert!(!s.transfers.enabled);
        assert_eq!(s.cache_ttl, Duration::from_secs(5));
        assert_eq!(s.fasting, FastingRules::default());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_falls_back_to_defaults() {
        let s: ResolverSettings =
            serde_json::from_str(r#"{"propers": {"season": "Ordinary Time"}}"#).unwrap();
        assert_eq!(s.propers.season, "Ordinary Time");
        assert_eq!(s.propers.sunday_rank, "SUNDAY");
        assert_eq!(s.cache_ttl, DEFAULT_CACHE_TTL);
    }
}
