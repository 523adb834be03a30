//! Line-oriented protocol front end
//!
//! Consumes one command per line from any `BufRead` and drives an
//! [`Engine`](crate::engine::Engine) implementation, writing trade records
//! and snapshots to any `Write`. Lines are processed independently;
//! malformed lines are skipped silently and processing continues.
//!
//! Commands (tokens separated by a single space):
//! - `BUY|SELL <GFD|IOC> <price> <quantity> <orderId>` — admission
//! - `CANCEL <orderId>` — cancel
//! - `MODIFY <orderId> <BUY|SELL> <price> <quantity>` — relocation
//! - `PRINT` — snapshot

use std::io::{self, BufRead, Write};

use tracing::debug;
use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::{OrderType, Side};
use types::trade::Trade;

use crate::engine::Engine;
use crate::snapshot::BookSnapshot;

/// Protocol reader bound to an engine
pub struct MessageProcessor<E> {
    engine: E,
}

impl<E: Engine> MessageProcessor<E> {
    /// Create a processor driving the given engine
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Access the underlying engine
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Mutable access to the underlying engine
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Process lines from `input` until EOF, writing output to `output`
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            self.process_line(&line, output)?;
        }
        Ok(())
    }

    /// Process a single command line
    pub fn process_line<W: Write>(&mut self, line: &str, output: &mut W) -> io::Result<()> {
        let tokens: Vec<&str> = line.split(' ').collect();
        match tokens.first().copied() {
            Some("BUY") | Some("SELL") => self.handle_submit(&tokens, output)?,
            Some("CANCEL") => self.handle_cancel(&tokens),
            Some("MODIFY") => self.handle_modify(&tokens),
            Some("PRINT") => {
                if tokens.len() == 1 {
                    write_snapshot(output, &self.engine.snapshot())?;
                } else {
                    debug!(line, "dropped malformed PRINT");
                }
            }
            _ => {
                if !line.is_empty() {
                    debug!(line, "dropped unrecognized command");
                }
            }
        }
        Ok(())
    }

    fn handle_submit<W: Write>(&mut self, tokens: &[&str], output: &mut W) -> io::Result<()> {
        if tokens.len() != 5 {
            debug!("dropped submission with wrong token count");
            return Ok(());
        }
        let Some(side) = parse_side(tokens[0]) else {
            return Ok(());
        };
        let Some(order_type) = parse_order_type(tokens[1]) else {
            return Ok(());
        };
        let Some(price) = parse_amount(tokens[2]) else {
            return Ok(());
        };
        let Some(quantity) = parse_amount(tokens[3]) else {
            return Ok(());
        };
        let Some(order_id) = parse_order_id(tokens[4]) else {
            return Ok(());
        };

        match self.engine.process_order(
            order_type,
            side,
            Price::new(price),
            Quantity::new(quantity),
            order_id,
        ) {
            Ok(trades) => {
                for trade in &trades {
                    write_trade(output, trade)?;
                }
            }
            Err(err) => debug!(%err, "order rejected"),
        }
        Ok(())
    }

    fn handle_cancel(&mut self, tokens: &[&str]) {
        if tokens.len() != 2 {
            debug!("dropped cancel with wrong token count");
            return;
        }
        let Some(order_id) = parse_order_id(tokens[1]) else {
            return;
        };

        if let Err(err) = self.engine.cancel_order(&order_id) {
            debug!(%err, "cancel ignored");
        }
    }

    fn handle_modify(&mut self, tokens: &[&str]) {
        if tokens.len() != 5 {
            debug!("dropped modify with wrong token count");
            return;
        }
        let Some(order_id) = parse_order_id(tokens[1]) else {
            return;
        };
        let Some(side) = parse_side(tokens[2]) else {
            return;
        };
        let Some(price) = parse_amount(tokens[3]) else {
            return;
        };
        let Some(quantity) = parse_amount(tokens[4]) else {
            return;
        };

        if let Err(err) =
            self.engine
                .modify_order(&order_id, side, Price::new(price), Quantity::new(quantity))
        {
            debug!(%err, "modify ignored");
        }
    }
}

fn parse_side(token: &str) -> Option<Side> {
    match token {
        "BUY" => Some(Side::BUY),
        "SELL" => Some(Side::SELL),
        _ => None,
    }
}

fn parse_order_type(token: &str) -> Option<OrderType> {
    match token {
        "GFD" => Some(OrderType::GFD),
        "IOC" => Some(OrderType::IOC),
        _ => None,
    }
}

fn parse_amount(token: &str) -> Option<i64> {
    token.parse().ok()
}

fn parse_order_id(token: &str) -> Option<OrderId> {
    OrderId::try_new(token)
}

/// Write one trade record, resting order first
fn write_trade<W: Write>(output: &mut W, trade: &Trade) -> io::Result<()> {
    writeln!(
        output,
        "TRADE {} {} {} {} {} {}",
        trade.maker_order_id,
        trade.maker_price,
        trade.quantity,
        trade.taker_order_id,
        trade.taker_price,
        trade.quantity
    )
}

/// Write a snapshot: asks ascending under `SELL:`, bids descending under `BUY:`
fn write_snapshot<W: Write>(output: &mut W, snapshot: &BookSnapshot) -> io::Result<()> {
    writeln!(output, "SELL:")?;
    for level in &snapshot.asks {
        writeln!(output, "{} {}", level.price, level.total_quantity)?;
    }
    writeln!(output, "BUY:")?;
    for level in &snapshot.bids {
        writeln!(output, "{} {}", level.price, level.total_quantity)?;
    }
    Ok(())
}
