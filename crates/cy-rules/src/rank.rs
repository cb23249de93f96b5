//! Commemoration ranks.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use cy_core::errors::{Error, Result};

/// Highest-priority precedence rank.
pub const MIN_PRECEDENCE: u8 = 1;

/// Lowest-priority precedence rank.
pub const MAX_PRECEDENCE: u8 = 9;

/// The rank of a commemoration within one calendar.
///
/// A lower `precedence_rank` means higher liturgical priority.  Required
/// ranks are observances that must be kept (and are transferred when they
/// collide); the rest are optional commemorations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CommemorationRank {
    /// Machine name, e.g. `"PRINCIPAL_FEAST"`.
    pub name: String,
    /// Display name, e.g. `"Principal Feast"`.
    pub formatted_name: String,
    /// Priority, 1 (highest) to 9 (lowest).
    pub precedence_rank: u8,
    /// Whether commemorations of this rank must be observed.
    pub required: bool,
}

impl CommemorationRank {
    /// Create a validated rank.
    pub fn new(
        name: impl Into<String>,
        formatted_name: impl Into<String>,
        precedence_rank: u8,
        required: bool,
    ) -> Result<Self> {
        let rank = Self {
            name: name.into(),
            formatted_name: formatted_name.into(),
            precedence_rank,
            required,
        };
        rank.validate()?;
        Ok(rank)
    }

    /// Check the precedence range.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_PRECEDENCE..=MAX_PRECEDENCE).contains(&self.precedence_rank) {
            return Err(Error::InvalidRule(format!(
                "rank {:?} has precedence {} outside [{MIN_PRECEDENCE}, {MAX_PRECEDENCE}]",
                self.name, self.precedence_rank
            )));
        }
        Ok(())
    }

    /// Whether this rank takes priority over `other`.
    pub fn outranks(&self, other: &CommemorationRank) -> bool {
        self.precedence_rank < other.precedence_rank
    }
}
