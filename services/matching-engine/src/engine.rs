//! Matching engine core
//!
//! Main coordinator for the order books, the order index and the matching
//! logic. The engine is strictly single-threaded: each operation runs to
//! completion before the next is accepted, and the engine exclusively owns
//! every live order.

use std::collections::HashMap;

use tracing::debug;
use types::errors::OrderError;
use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::{Order, OrderType, Side};
use types::trade::Trade;

use crate::book::{AskBook, BidBook};
use crate::matching::{crossing, MatchExecutor};
use crate::snapshot::{self, BookSnapshot};

/// Order entry capability of the matching engine
///
/// The protocol front end is generic over this trait so that a test double
/// can stand in for the concrete engine.
pub trait Engine {
    /// Validate and admit an order, crossing it against the opposite side
    ///
    /// Returns the trades generated, in match order. A rejected order
    /// (non-positive price or quantity, duplicate id) leaves the engine
    /// untouched.
    fn process_order(
        &mut self,
        order_type: OrderType,
        side: Side,
        price: Price,
        quantity: Quantity,
        order_id: OrderId,
    ) -> Result<Vec<Trade>, OrderError>;

    /// Remove a resting order; unknown ids leave the engine untouched
    fn cancel_order(&mut self, order_id: &OrderId) -> Result<(), OrderError>;

    /// Relocate a resting order to a new side/price/quantity
    ///
    /// A pure relocation: the order loses time priority and no matching is
    /// performed, even if the new price crosses the opposite book. Unknown
    /// ids and IOC orders leave the engine untouched.
    fn modify_order(
        &mut self,
        order_id: &OrderId,
        new_side: Side,
        new_price: Price,
        new_quantity: Quantity,
    ) -> Result<(), OrderError>;

    /// Discard all resting orders without generating trades
    fn purge(&mut self);

    /// Capture an aggregated view of both sides of the book
    fn snapshot(&self) -> BookSnapshot;
}

/// Main matching engine for a single instrument
pub struct MatchingEngine {
    bids: BidBook,
    asks: AskBook,
    /// Order index: owns every live order, keyed by id
    orders: HashMap<OrderId, Order>,
    /// Trade generator with sequence numbering
    executor: MatchExecutor,
}

impl MatchingEngine {
    /// Create a new empty matching engine
    pub fn new() -> Self {
        Self {
            bids: BidBook::new(),
            asks: AskBook::new(),
            orders: HashMap::new(),
            executor: MatchExecutor::new(1),
        }
    }

    /// Number of resting orders
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Check if an order id is resting in the book
    pub fn contains(&self, order_id: &OrderId) -> bool {
        self.orders.contains_key(order_id)
    }

    /// Number of bid price levels
    pub fn bid_level_count(&self) -> usize {
        self.bids.level_count()
    }

    /// Number of ask price levels
    pub fn ask_level_count(&self) -> usize {
        self.asks.level_count()
    }

    fn now() -> i64 {
        chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
    }

    fn rest_order(&mut self, order: Order) {
        match order.side {
            Side::BUY => self.bids.insert(order.price, order.order_id.clone()),
            Side::SELL => self.asks.insert(order.price, order.order_id.clone()),
        }
        self.orders.insert(order.order_id.clone(), order);
    }

    /// Match an incoming buy order against the ask book
    ///
    /// Levels are visited lowest-price-first; the scan stops at the first
    /// level that fails to cross, since every deeper level is worse.
    fn match_against_asks(&mut self, taker: &mut Order, now: i64) -> Vec<Trade> {
        let mut trades = Vec::new();

        while !taker.is_filled() {
            let Some(best_ask) = self.asks.best_price() else {
                break;
            };
            if !crossing::can_match(taker.price, best_ask) {
                break;
            }

            let Some(level) = self.asks.level_mut(best_ask) else {
                break;
            };
            while let Some(maker_id) = level.front().cloned() {
                let maker = self
                    .orders
                    .get_mut(&maker_id)
                    .expect("resting order missing from index");
                let maker_price = maker.price;
                let trade_quantity = taker.quantity.min(maker.quantity);

                maker.fill(trade_quantity);
                taker.fill(trade_quantity);
                let maker_filled = maker.is_filled();

                trades.push(self.executor.execute_trade(
                    maker_id.clone(),
                    maker_price,
                    taker.order_id.clone(),
                    taker.price,
                    trade_quantity,
                    now,
                ));

                if maker_filled {
                    level.pop_front();
                    self.orders.remove(&maker_id);
                }
                if taker.is_filled() {
                    break;
                }
            }
            self.asks.drop_level_if_empty(best_ask);
        }

        trades
    }

    /// Match an incoming sell order against the bid book
    ///
    /// Levels are visited highest-price-first; the scan stops at the first
    /// level that fails to cross, since every deeper level is worse.
    fn match_against_bids(&mut self, taker: &mut Order, now: i64) -> Vec<Trade> {
        let mut trades = Vec::new();

        while !taker.is_filled() {
            let Some(best_bid) = self.bids.best_price() else {
                break;
            };
            if !crossing::can_match(best_bid, taker.price) {
                break;
            }

            let Some(level) = self.bids.level_mut(best_bid) else {
                break;
            };
            while let Some(maker_id) = level.front().cloned() {
                let maker = self
                    .orders
                    .get_mut(&maker_id)
                    .expect("resting order missing from index");
                let maker_price = maker.price;
                let trade_quantity = taker.quantity.min(maker.quantity);

                maker.fill(trade_quantity);
                taker.fill(trade_quantity);
                let maker_filled = maker.is_filled();

                trades.push(self.executor.execute_trade(
                    maker_id.clone(),
                    maker_price,
                    taker.order_id.clone(),
                    taker.price,
                    trade_quantity,
                    now,
                ));

                if maker_filled {
                    level.pop_front();
                    self.orders.remove(&maker_id);
                }
                if taker.is_filled() {
                    break;
                }
            }
            self.bids.drop_level_if_empty(best_bid);
        }

        trades
    }
}

impl Engine for MatchingEngine {
    fn process_order(
        &mut self,
        order_type: OrderType,
        side: Side,
        price: Price,
        quantity: Quantity,
        order_id: OrderId,
    ) -> Result<Vec<Trade>, OrderError> {
        if !price.is_positive() {
            return Err(OrderError::InvalidPrice(price.value()));
        }
        if !quantity.is_positive() {
            return Err(OrderError::InvalidQuantity(quantity.value()));
        }
        if self.orders.contains_key(&order_id) {
            return Err(OrderError::DuplicateId {
                order_id: order_id.to_string(),
            });
        }

        let now = Self::now();
        let mut order = Order::new(order_id, side, order_type, price, quantity, now);

        let trades = match side {
            Side::BUY => self.match_against_asks(&mut order, now),
            Side::SELL => self.match_against_bids(&mut order, now),
        };
        if !trades.is_empty() {
            debug!(
                order_id = %order.order_id,
                trades = trades.len(),
                "order crossed"
            );
        }

        if !order.is_filled() && order.order_type.rests() {
            debug!(
                order_id = %order.order_id,
                price = %order.price,
                quantity = %order.quantity,
                "order resting"
            );
            self.rest_order(order);
        }

        Ok(trades)
    }

    fn cancel_order(&mut self, order_id: &OrderId) -> Result<(), OrderError> {
        let (side, price) = match self.orders.get(order_id) {
            Some(order) => (order.side, order.price),
            None => {
                return Err(OrderError::NotFound {
                    order_id: order_id.to_string(),
                })
            }
        };

        let removed = match side {
            Side::BUY => self.bids.remove(price, order_id),
            Side::SELL => self.asks.remove(price, order_id),
        };
        debug_assert!(removed, "indexed order missing from its price level");

        self.orders.remove(order_id);
        debug!(order_id = %order_id, "order canceled");
        Ok(())
    }

    fn modify_order(
        &mut self,
        order_id: &OrderId,
        new_side: Side,
        new_price: Price,
        new_quantity: Quantity,
    ) -> Result<(), OrderError> {
        let (old_side, old_price, order_type) = match self.orders.get(order_id) {
            Some(order) => (order.side, order.price, order.order_type),
            None => {
                return Err(OrderError::NotFound {
                    order_id: order_id.to_string(),
                })
            }
        };
        if !order_type.rests() {
            return Err(OrderError::NotModifiable {
                order_id: order_id.to_string(),
            });
        }

        let removed = match old_side {
            Side::BUY => self.bids.remove(old_price, order_id),
            Side::SELL => self.asks.remove(old_price, order_id),
        };
        debug_assert!(removed, "indexed order missing from its price level");

        if let Some(order) = self.orders.get_mut(order_id) {
            order.relocate(new_side, new_price, new_quantity);
        }
        match new_side {
            Side::BUY => self.bids.insert(new_price, order_id.clone()),
            Side::SELL => self.asks.insert(new_price, order_id.clone()),
        }
        debug!(order_id = %order_id, price = %new_price, "order relocated");
        Ok(())
    }

    fn purge(&mut self) {
        debug!(orders = self.orders.len(), "purging engine state");
        self.orders.clear();
        self.bids.clear();
        self.asks.clear();
    }

    fn snapshot(&self) -> BookSnapshot {
        snapshot::build(&self.bids, &self.asks, &self.orders)
    }
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self::new()
    }
}
