//! Trade execution types

use crate::ids::{OrderId, TradeId};
use crate::numeric::{Price, Quantity};
use serde::{Deserialize, Serialize};

/// A trade between a resting (maker) order and an incoming (taker) order
///
/// One record is emitted per match, in chronological match order. Both
/// placement prices are carried because the two orders may cross at
/// different limits; the maker fields always describe the resting order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub trade_id: TradeId,
    /// Global monotonic sequence
    pub sequence: u64,

    // Resting side
    pub maker_order_id: OrderId,
    pub maker_price: Price,

    // Incoming side
    pub taker_order_id: OrderId,
    pub taker_price: Price,

    pub quantity: Quantity,
    pub executed_at: i64, // Unix nanos
}

impl Trade {
    /// Create a new trade record
    pub fn new(
        sequence: u64,
        maker_order_id: OrderId,
        maker_price: Price,
        taker_order_id: OrderId,
        taker_price: Price,
        quantity: Quantity,
        executed_at: i64,
    ) -> Self {
        Self {
            trade_id: TradeId::new(),
            sequence,
            maker_order_id,
            maker_price,
            taker_order_id,
            taker_price,
            quantity,
            executed_at,
        }
    }
}
