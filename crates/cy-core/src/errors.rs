//! Error types for the churchyear workspace.
//!
//! Every fallible operation in the workspace returns [`Result`], whose error
//! side is the single [`Error`] enum below.  Precondition checks use the
//! `ensure!` and `fail!` convenience macros defined here.

use thiserror::Error;

/// The top-level error type used throughout the workspace.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A year outside the supported Gregorian range.
    #[error("year {year} out of range [{min}, {max}]")]
    InvalidYear {
        /// The offending year.
        year: i32,
        /// Smallest supported year.
        min: i32,
        /// Largest supported year.
        max: i32,
    },

    /// A `cannot_occur_after` reference that does not resolve to exactly one
    /// commemoration for the year being built.
    #[error(
        "commemoration {commemoration:?} cannot occur after {reference:?}, \
         which resolves to {matches} commemorations (expected exactly 1)"
    )]
    AmbiguousSuppressionReference {
        /// Name of the commemoration carrying the reference.
        commemoration: String,
        /// The referenced name.
        reference: String,
        /// How many commemorations the reference resolved to.
        matches: usize,
    },

    /// No season has started on or before the given day.
    #[error("no season covers {date}")]
    MissingSeasonCoverage {
        /// The uncovered day (`YYYY-MM-DD`).
        date: String,
    },

    /// A season whose start commemoration is not part of the rule set.
    #[error("season {season:?} starts on unknown commemoration {commemoration:?}")]
    UnknownSeasonStart {
        /// Season name.
        season: String,
        /// Name of the missing start commemoration.
        commemoration: String,
    },

    /// A malformed rule record.
    #[error("invalid rule: {0}")]
    InvalidRule(String),

    /// The rule source holds nothing for the requested calendar.
    #[error("unknown calendar: {0}")]
    UnknownCalendar(String),

    /// Date construction or arithmetic error.
    #[error("date error: {0}")]
    Date(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// General runtime error.
    #[error("{0}")]
    Runtime(String),
}

/// Shorthand `Result` type used throughout the workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use cy_core::{ensure, errors::Error};
/// fn positive(x: i32) -> cy_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(matches!(positive(-1), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use cy_core::fail;
/// fn always_err() -> cy_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
