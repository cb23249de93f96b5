//! # cy-core
//!
//! Error definitions and resolver settings shared by every crate in the
//! churchyear workspace.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Settings consumed by the Church Year resolver.
pub mod settings;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{FastingRules, FeriaRules, ProperRules, ResolverSettings, TransferRules};
