//! Aggregated order book snapshots
//!
//! A snapshot reports one entry per price level with the total resting
//! quantity at that level, each side in its natural priority order (bids
//! descending, asks ascending). Quantities are summed through the order
//! index at capture time; the level queues themselves carry no aggregates.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::Order;

use crate::book::{AskBook, BidBook, PriceLevel};

/// A single aggregated price level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSummary {
    /// The price of this level
    pub price: Price,
    /// Total quantity at this level across all orders
    pub total_quantity: Quantity,
    /// Number of orders resting at this level
    pub order_count: usize,
}

/// A point-in-time view of both sides of the book
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BookSnapshot {
    /// Bid levels in descending price order (best first)
    pub bids: Vec<LevelSummary>,
    /// Ask levels in ascending price order (best first)
    pub asks: Vec<LevelSummary>,
}

impl BookSnapshot {
    /// Check whether the snapshot has no levels on either side
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }
}

/// Build a snapshot from the two books and the order index
pub fn build(bids: &BidBook, asks: &AskBook, orders: &HashMap<OrderId, Order>) -> BookSnapshot {
    BookSnapshot {
        bids: summarize(bids.iter_levels(), orders),
        asks: summarize(asks.iter_levels(), orders),
    }
}

/// Aggregate each level's resting quantity through the order index
///
/// Levels whose aggregate is not positive are skipped; the eager empty-level
/// cleanup makes this a defensive guard rather than a reachable case.
fn summarize<'a>(
    levels: impl Iterator<Item = (Price, &'a PriceLevel)>,
    orders: &HashMap<OrderId, Order>,
) -> Vec<LevelSummary> {
    levels
        .filter_map(|(price, level)| {
            let mut total_quantity = Quantity::zero();
            let mut order_count = 0;
            for order_id in level.iter() {
                if let Some(order) = orders.get(order_id) {
                    total_quantity += order.quantity;
                    order_count += 1;
                }
            }
            if total_quantity.is_positive() {
                Some(LevelSummary {
                    price,
                    total_quantity,
                    order_count,
                })
            } else {
                None
            }
        })
        .collect()
}
