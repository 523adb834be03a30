//! Matching logic module
//!
//! Implements crossing detection and trade generation for the
//! price-time priority matching algorithm.

pub mod crossing;
pub mod executor;

pub use crossing::can_match;
pub use executor::MatchExecutor;
