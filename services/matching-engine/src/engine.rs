//! Order book core
//!
//! Single-instrument book with price-time priority matching. Not internally
//! synchronized: the dispatcher's worker thread owns it exclusively while
//! the engine runs.

use std::collections::HashMap;

use types::ids::OrderId;
use types::level::LevelInfo;
use types::numeric::{Price, Quantity};
use types::order::{Order, OrderType, Side};
use types::trade::Trade;

use crate::book::{AskBook, BidBook, Handle};
use crate::matching::crossing;

/// What became of an admitted order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddStatus {
    /// Duplicate id or empty quantity; the book is untouched
    Rejected,
    /// Fully consumed by matching
    Filled,
    /// Matched partially; the residual rests on the book
    PartiallyFilled,
    /// Rested whole without matching
    Rested,
    /// Market-order residual discarded after exhausting the opposite side
    Discarded,
}

/// Result of [`OrderBook::add`]
#[derive(Debug)]
pub struct AddResult {
    /// Trades generated by this order, in execution order
    pub trades: Vec<Trade>,
    pub status: AddStatus,
}

impl AddResult {
    fn rejected() -> Self {
        Self {
            trades: Vec::new(),
            status: AddStatus::Rejected,
        }
    }

    /// Whether the command changed the resting book
    ///
    /// True when any maker was consumed or the order rested. False for
    /// rejections and for a market order that crossed nothing.
    pub fn book_changed(&self) -> bool {
        !self.trades.is_empty()
            || matches!(self.status, AddStatus::Rested | AddStatus::PartiallyFilled)
    }
}

/// Where a resting order lives, for O(1) cancellation
#[derive(Debug, Clone, Copy)]
struct Locator {
    side: Side,
    handle: Handle,
}

/// A two-sided limit order book for one instrument
///
/// `add` matches the incoming order against the opposite side best-price
/// first, FIFO within each level, then rests any limit residual. `cancel`
/// removes a resting order through the id index without scanning.
#[derive(Debug, Default)]
pub struct OrderBook {
    bids: BidBook,
    asks: AskBook,
    index: HashMap<OrderId, Locator>,
}

impl OrderBook {
    /// Create a new empty book
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit an incoming order: match, then rest any limit residual
    ///
    /// Duplicate ids and empty quantities are no-ops returning no trades.
    /// Trades execute at the maker's price and carry `timestamp` as their
    /// execution time. The book is uncrossed when this returns.
    pub fn add(&mut self, mut order: Order, timestamp: i64) -> AddResult {
        if self.index.contains_key(&order.id) || order.remaining_quantity.is_zero() {
            return AddResult::rejected();
        }

        let trades = match order.side {
            Side::Buy => self.match_buy(&mut order, timestamp),
            Side::Sell => self.match_sell(&mut order, timestamp),
        };

        let status = if order.is_filled() {
            AddStatus::Filled
        } else if order.order_type == OrderType::Market {
            // Market residual never rests
            AddStatus::Discarded
        } else {
            let handle = match order.side {
                Side::Buy => self.bids.insert(order.id, order.price, order.remaining_quantity),
                Side::Sell => self.asks.insert(order.id, order.price, order.remaining_quantity),
            };
            self.index.insert(
                order.id,
                Locator {
                    side: order.side,
                    handle,
                },
            );
            if trades.is_empty() {
                AddStatus::Rested
            } else {
                AddStatus::PartiallyFilled
            }
        };

        AddResult { trades, status }
    }

    /// Match an incoming buy against the asks, best (lowest) price first
    fn match_buy(&mut self, order: &mut Order, timestamp: i64) -> Vec<Trade> {
        let mut trades = Vec::new();

        while !order.is_filled() {
            let Some((ask_price, handle)) = self.asks.front_of_best() else {
                break;
            };
            if !crossing::taker_crosses(order, ask_price) {
                break;
            }
            let Some(maker) = self.asks.node(handle) else {
                break;
            };
            let maker_id = maker.id;

            let trade_qty = order.remaining_quantity.min(maker.remaining);
            trades.push(Trade::new(ask_price, trade_qty, maker_id, order.id, timestamp));

            order.fill(trade_qty);
            if self.asks.fill(handle, trade_qty) {
                self.index.remove(&maker_id);
            }
        }

        trades
    }

    /// Match an incoming sell against the bids, best (highest) price first
    fn match_sell(&mut self, order: &mut Order, timestamp: i64) -> Vec<Trade> {
        let mut trades = Vec::new();

        while !order.is_filled() {
            let Some((bid_price, handle)) = self.bids.front_of_best() else {
                break;
            };
            if !crossing::taker_crosses(order, bid_price) {
                break;
            }
            let Some(maker) = self.bids.node(handle) else {
                break;
            };
            let maker_id = maker.id;

            let trade_qty = order.remaining_quantity.min(maker.remaining);
            trades.push(Trade::new(bid_price, trade_qty, maker_id, order.id, timestamp));

            order.fill(trade_qty);
            if self.bids.fill(handle, trade_qty) {
                self.index.remove(&maker_id);
            }
        }

        trades
    }

    /// Remove a resting order
    ///
    /// Returns `true` if the id was resting and has been removed; `false`
    /// for unknown (or already filled/canceled) ids.
    pub fn cancel(&mut self, id: OrderId) -> bool {
        let Some(locator) = self.index.remove(&id) else {
            return false;
        };

        let removed = match locator.side {
            Side::Buy => self.bids.remove(locator.handle).is_some(),
            Side::Sell => self.asks.remove(locator.handle).is_some(),
        };
        debug_assert!(removed, "indexed order missing from its side");

        true
    }

    /// Enumerate bid levels, best (highest) price first
    pub fn bids(&self) -> Vec<LevelInfo> {
        self.bids.levels()
    }

    /// Enumerate ask levels, best (lowest) price first
    pub fn asks(&self) -> Vec<LevelInfo> {
        self.asks.levels()
    }

    /// Best bid `(price, volume)`, if any
    pub fn best_bid(&self) -> Option<(Price, Quantity)> {
        self.bids.best()
    }

    /// Best ask `(price, volume)`, if any
    pub fn best_ask(&self) -> Option<(Price, Quantity)> {
        self.asks.best()
    }

    /// Whether an order with this id is resting
    pub fn contains(&self, id: OrderId) -> bool {
        self.index.contains_key(&id)
    }

    /// Number of resting orders
    pub fn order_count(&self) -> usize {
        self.index.len()
    }

    /// Whether both sides are empty
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }
}
