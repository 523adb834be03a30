//! Trade generation
//!
//! Stamps each match with a monotonically increasing sequence number and
//! builds the trade record. The resting order is always the maker.

use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::trade::Trade;

/// Match executor for handling trade generation
pub struct MatchExecutor {
    sequence_counter: u64,
}

impl MatchExecutor {
    /// Create a new match executor with starting sequence number
    pub fn new(starting_sequence: u64) -> Self {
        Self {
            sequence_counter: starting_sequence,
        }
    }

    /// Get next sequence number (monotonically increasing)
    fn next_sequence(&mut self) -> u64 {
        let seq = self.sequence_counter;
        self.sequence_counter += 1;
        seq
    }

    /// Build the trade record for one match
    pub fn execute_trade(
        &mut self,
        maker_order_id: OrderId,
        maker_price: Price,
        taker_order_id: OrderId,
        taker_price: Price,
        quantity: Quantity,
        timestamp: i64,
    ) -> Trade {
        let sequence = self.next_sequence();
        Trade::new(
            sequence,
            maker_order_id,
            maker_price,
            taker_order_id,
            taker_price,
            quantity,
            timestamp,
        )
    }
}
