//! Lectionary cycles and citation-only mass readings.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The three-year Sunday lectionary cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SundayCycle {
    /// Year A.
    A,
    /// Year B.
    B,
    /// Year C.
    C,
}

impl SundayCycle {
    /// The cycle of the ecclesiastical year beginning in `advent_year`.
    pub fn for_advent_year(advent_year: i32) -> Self {
        match advent_year.rem_euclid(3) {
            0 => SundayCycle::A,
            1 => SundayCycle::B,
            _ => SundayCycle::C,
        }
    }
}

impl std::fmt::Display for SundayCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = match self {
            SundayCycle::A => "A",
            SundayCycle::B => "B",
            SundayCycle::C => "C",
        };
        f.write_str(letter)
    }
}

/// One appointed reading of a commemoration's mass.
///
/// Only the citation is held here; passage text is fetched elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MassReading {
    /// Cycle the reading belongs to; `None` means every year.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cycle: Option<SundayCycle>,
    /// Service name when a day has several masses (e.g. "Vigil").
    #[cfg_attr(feature = "serde", serde(default))]
    pub service: Option<String>,
    /// Position within the service (1 = first lesson …).
    pub reading_number: u8,
    /// Full citation.
    pub citation: String,
    /// Abbreviated citation, if the lectionary offers one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub short_citation: Option<String>,
}

impl MassReading {
    /// Whether this reading is appointed in `cycle`.
    pub fn applies_to(&self, cycle: SundayCycle) -> bool {
        self.cycle.map_or(true, |c| c == cycle)
    }
}
