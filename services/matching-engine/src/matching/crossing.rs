//! Crossing detection logic
//!
//! Determines when a bid and ask can match based on price compatibility.

use types::numeric::Price;

/// Check if a bid and ask can match at given prices
///
/// A cross exists iff the bid price is greater than or equal to the ask
/// price. Because each side is scanned best-to-worst, the first level that
/// fails this test guarantees every deeper level fails too, so scans
/// terminate at the first non-crossing level.
pub fn can_match(bid_price: Price, ask_price: Price) -> bool {
    bid_price >= ask_price
}
