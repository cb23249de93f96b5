//! Built-year caching and the read-through provider.
//!
//! A [`ChurchYearCache`] stores built years keyed by calendar and Advent
//! year with a time-to-live.  [`ChurchYearProvider`] reads through it: on a
//! miss it builds, stores and returns; a failed build is never stored.
//! Concurrent misses for one key may build twice, which is harmless since a
//! build is deterministic.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::{Duration, Instant};

use tracing::debug;

use crate::calendar_date::CalendarDate;
use crate::calendar_year::CalendarYear;
use crate::church_year::ChurchYear;
use cy_core::errors::{Error, Result};
use cy_core::settings::ResolverSettings;
use cy_rules::CommemorationRuleSet;
use cy_time::{Date, EcclesiasticalYear};

/// Cache key: calendar abbreviation and Advent year.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// Calendar abbreviation.
    pub calendar: String,
    /// Advent year of the cached Church Year.
    pub year: i32,
}

impl CacheKey {
    /// Build a key.
    pub fn new(calendar: impl Into<String>, year: i32) -> Self {
        Self {
            calendar: calendar.into(),
            year,
        }
    }
}

/// Storage for built Church Years.
pub trait ChurchYearCache: Send + Sync {
    /// The cached year, if present and not expired.
    fn get(&self, key: &CacheKey) -> Option<Arc<ChurchYear>>;

    /// Store `value` under `key` for `ttl`.
    fn set(&self, key: CacheKey, value: Arc<ChurchYear>, ttl: Duration);
}

/// A cache that never holds anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCache;

impl ChurchYearCache for NoCache {
    fn get(&self, _key: &CacheKey) -> Option<Arc<ChurchYear>> {
        None
    }

    fn set(&self, _key: CacheKey, _value: Arc<ChurchYear>, _ttl: Duration) {}
}

/// Thread-safe in-process cache with per-entry expiry.
#[derive(Debug, Default)]
pub struct InMemoryCache {
    // `None` expiry: the ttl overflowed `Instant`; never expires.
    entries: RwLock<HashMap<CacheKey, (Option<Instant>, Arc<ChurchYear>)>>,
}

impl InMemoryCache {
    /// An empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.  Expired entries are evicted when read or
    /// on the next store.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl ChurchYearCache for InMemoryCache {
    fn get(&self, key: &CacheKey) -> Option<Arc<ChurchYear>> {
        {
            let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
            match entries.get(key) {
                None => return None,
                Some((expires, year)) if live(*expires, Instant::now()) => {
                    return Some(Arc::clone(year))
                }
                Some(_) => {}
            }
        }
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        // Re-check: another thread may have stored a fresh year meanwhile.
        let now = Instant::now();
        if entries.get(key).is_some_and(|(expires, _)| !live(*expires, now)) {
            entries.remove(key);
            debug!(calendar = %key.calendar, year = key.year, "evicted expired church year");
        }
        entries
            .get(key)
            .filter(|(expires, _)| live(*expires, now))
            .map(|(_, year)| Arc::clone(year))
    }

    fn set(&self, key: CacheKey, value: Arc<ChurchYear>, ttl: Duration) {
        let now = Instant::now();
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.retain(|_, (expires, _)| live(*expires, now));
        entries.insert(key, (now.checked_add(ttl), value));
    }
}

fn live(expires: Option<Instant>, now: Instant) -> bool {
    expires.map_or(true, |e| now < e)
}

/// Read-through access to the Church Years of one calendar.
#[derive(Debug)]
pub struct ChurchYearProvider<C: ChurchYearCache = InMemoryCache> {
    rules: Arc<CommemorationRuleSet>,
    settings: ResolverSettings,
    cache: C,
}

impl ChurchYearProvider<InMemoryCache> {
    /// A provider with an [`InMemoryCache`].
    pub fn new(rules: Arc<CommemorationRuleSet>, settings: ResolverSettings) -> Self {
        Self::with_cache(rules, settings, InMemoryCache::new())
    }
}

impl<C: ChurchYearCache> ChurchYearProvider<C> {
    /// A provider backed by `cache`.
    pub fn with_cache(rules: Arc<CommemorationRuleSet>, settings: ResolverSettings, cache: C) -> Self {
        Self {
            rules,
            settings,
            cache,
        }
    }

    /// The rule set.
    pub fn rules(&self) -> &CommemorationRuleSet {
        &self.rules
    }

    /// The settings every build uses.
    pub fn settings(&self) -> &ResolverSettings {
        &self.settings
    }

    /// The cache.
    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// The Church Year beginning at Advent of `advent_year`.
    pub fn church_year(&self, advent_year: i32) -> Result<Arc<ChurchYear>> {
        let key = CacheKey::new(self.rules.calendar(), advent_year);
        if let Some(year) = self.cache.get(&key) {
            debug!(calendar = %key.calendar, year = advent_year, "church year cache hit");
            return Ok(year);
        }
        debug!(calendar = %key.calendar, year = advent_year, "church year cache miss");
        let year = Arc::new(ChurchYear::build(&self.rules, advent_year, &self.settings)?);
        self.cache.set(key, Arc::clone(&year), self.settings.cache_ttl);
        Ok(year)
    }

    /// Civil year `year`, stitched from the two Church Years it touches.
    pub fn calendar_year(&self, year: i32) -> Result<CalendarYear> {
        let prior = self.church_year(year - 1)?;
        let current = self.church_year(year)?;
        CalendarYear::build(year, prior, current)
    }

    /// The resolved day for `date`, from the Church Year containing it.
    pub fn calendar_date(&self, date: Date) -> Result<CalendarDate> {
        let bounds = EcclesiasticalYear::containing(date)?;
        let year = self.church_year(bounds.advent_year())?;
        year.get(date)
            .cloned()
            .ok_or_else(|| Error::Runtime(format!("{date} missing from its Church Year")))
    }
}
