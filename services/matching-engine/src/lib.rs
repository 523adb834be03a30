//! Matching Engine Service
//!
//! Single-instrument order matching engine implementing price-time priority.
//! Orders are admitted, crossed against the opposite side of the book, and
//! any resting-eligible remainder is queued at its price level. A
//! line-oriented protocol front end drives the engine from any `BufRead`.
//!
//! **Key Invariants:**
//! - Price-time priority strictly enforced
//! - Deterministic matching (same inputs → same outputs)
//! - A resting order's remaining quantity is always positive
//! - No empty price level is ever left in either book

pub mod book;
pub mod engine;
pub mod matching;
pub mod protocol;
pub mod snapshot;

pub use engine::{Engine, MatchingEngine};
pub use protocol::MessageProcessor;
pub use snapshot::BookSnapshot;
