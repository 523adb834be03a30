//! Unique identifier types for engine entities
//!
//! Order identifiers are caller-supplied strings: the protocol layer accepts
//! any nonempty token and uniqueness is enforced by the engine's order index
//! on admission. Trade identifiers are engine-generated UUID v7 values so
//! trade records are time-sortable.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for an order
///
/// A nonempty string chosen by the submitter. Immutable once admitted;
/// duplicate ids are rejected at admission.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Create a new OrderId from a string
    ///
    /// # Panics
    /// Panics if the id is empty
    pub fn new(id: impl Into<String>) -> Self {
        let s = id.into();
        assert!(!s.is_empty(), "OrderId must be nonempty");
        Self(s)
    }

    /// Try to create an OrderId, returning None if empty
    pub fn try_new(id: impl Into<String>) -> Option<Self> {
        let s = id.into();
        if s.is_empty() {
            None
        } else {
            Some(Self(s))
        }
    }

    /// Get the id string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for OrderId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Unique identifier for a trade
///
/// Uses UUID v7 for time-based sorting of trade records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TradeId(Uuid);

impl TradeId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TradeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TradeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_creation() {
        let id = OrderId::new("ord1");
        assert_eq!(id.as_str(), "ord1");
    }

    #[test]
    fn test_order_id_try_new() {
        assert!(OrderId::try_new("ord1").is_some());
        assert!(OrderId::try_new("").is_none());
    }

    #[test]
    #[should_panic(expected = "OrderId must be nonempty")]
    fn test_order_id_empty_panics() {
        OrderId::new("");
    }

    #[test]
    fn test_order_id_serialization() {
        let id = OrderId::new("ord1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"ord1\"");

        let deserialized: OrderId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_trade_id_creation() {
        let id1 = TradeId::new();
        let id2 = TradeId::new();
        assert_ne!(id1, id2, "TradeIds should be unique");
    }

    #[test]
    fn test_trade_id_serialization() {
        let id = TradeId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: TradeId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
