//! Bid (buy-side) order book
//!
//! Maintains buy orders sorted by price descending (best bid first).
//! Uses BTreeMap for deterministic iteration order.

use std::collections::BTreeMap;
use types::ids::OrderId;
use types::numeric::Price;

use super::price_level::PriceLevel;

/// Bid (buy) side order book
///
/// Orders are sorted by price descending, so the highest bid is visited
/// first. At each price level, orders are maintained in FIFO order.
/// A price key exists in the map iff its queue is non-empty.
#[derive(Debug, Clone)]
pub struct BidBook {
    /// Price levels; BTreeMap sorts ascending, so the best bid is the last key
    levels: BTreeMap<Price, PriceLevel>,
}

impl BidBook {
    /// Create a new empty bid book
    pub fn new() -> Self {
        Self {
            levels: BTreeMap::new(),
        }
    }

    /// Insert an order at the tail of its price level
    pub fn insert(&mut self, price: Price, order_id: OrderId) {
        self.levels
            .entry(price)
            .or_insert_with(PriceLevel::new)
            .push_back(order_id);
    }

    /// Remove an order from its price level
    ///
    /// Empty levels are dropped eagerly. Returns true if the order was found.
    pub fn remove(&mut self, price: Price, order_id: &OrderId) -> bool {
        if let Some(level) = self.levels.get_mut(&price) {
            if level.remove(order_id) {
                if level.is_empty() {
                    self.levels.remove(&price);
                }
                return true;
            }
        }
        false
    }

    /// Get the best bid (highest price)
    pub fn best_price(&self) -> Option<Price> {
        self.levels.keys().next_back().copied()
    }

    /// Get mutable access to the level at a price
    pub fn level_mut(&mut self, price: Price) -> Option<&mut PriceLevel> {
        self.levels.get_mut(&price)
    }

    /// Drop the level at a price if its queue has emptied
    pub fn drop_level_if_empty(&mut self, price: Price) {
        if let Some(level) = self.levels.get(&price) {
            if level.is_empty() {
                self.levels.remove(&price);
            }
        }
    }

    /// Iterate levels in priority order (highest price first)
    pub fn iter_levels(&self) -> impl Iterator<Item = (Price, &PriceLevel)> {
        self.levels.iter().rev().map(|(price, level)| (*price, level))
    }

    /// Check if the bid book is empty
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Get the total number of price levels
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Clear all levels
    pub fn clear(&mut self) {
        self.levels.clear();
    }
}

impl Default for BidBook {
    fn default() -> Self {
        Self::new()
    }
}
