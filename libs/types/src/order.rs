//! Order lifecycle types

use crate::ids::OrderId;
use crate::numeric::{Price, Quantity};
use serde::{Deserialize, Serialize};

/// Order side (buyer or seller)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy order (bid)
    BUY,
    /// Sell order (ask)
    SELL,
}

impl Side {
    /// Get the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::BUY => Side::SELL,
            Side::SELL => Side::BUY,
        }
    }
}

/// Time-in-force policy for orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderType {
    /// Good-For-Day: rests in the book if not fully filled on admission
    GFD,
    /// Immediate-Or-Cancel: match immediately, discard the remainder
    IOC,
}

impl OrderType {
    /// Whether an unfilled remainder of this type may rest in the book
    pub fn rests(&self) -> bool {
        matches!(self, OrderType::GFD)
    }
}

/// A live order
///
/// `quantity` is the remaining unfilled amount; it is decremented by trades
/// and an order reaching zero is removed from the book. Exclusively owned by
/// the engine's order index; price-level queues reference it by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    pub side: Side,
    pub order_type: OrderType,
    pub price: Price,
    pub quantity: Quantity,
    pub created_at: i64, // Unix nanos
}

impl Order {
    /// Create a new order
    pub fn new(
        order_id: OrderId,
        side: Side,
        order_type: OrderType,
        price: Price,
        quantity: Quantity,
        timestamp: i64,
    ) -> Self {
        Self {
            order_id,
            side,
            order_type,
            price,
            quantity,
            created_at: timestamp,
        }
    }

    /// Check if the order has no remaining quantity
    pub fn is_filled(&self) -> bool {
        self.quantity.is_zero()
    }

    /// Consume filled quantity
    ///
    /// # Panics
    /// Panics if the fill is not positive or exceeds the remaining quantity
    pub fn fill(&mut self, fill_quantity: Quantity) {
        assert!(fill_quantity.is_positive(), "fill must be positive");
        assert!(
            fill_quantity <= self.quantity,
            "fill exceeds remaining quantity"
        );
        self.quantity -= fill_quantity;
    }

    /// Overwrite placement fields in place
    ///
    /// Used by modification: the order keeps its identity and type but takes
    /// the new side, price and quantity verbatim, with no bounds check.
    pub fn relocate(&mut self, new_side: Side, new_price: Price, new_quantity: Quantity) {
        self.side = new_side;
        self.price = new_price;
        self.quantity = new_quantity;
    }
}
