//! Ask (sell-side) order book
//!
//! Sell orders keyed by price, enumerated ascending so the lowest ask is
//! first. `BTreeMap` gives deterministic iteration; the slab arena gives
//! stable handles for cancellation.

use std::collections::BTreeMap;

use slab::Slab;
use types::ids::OrderId;
use types::level::LevelInfo;
use types::numeric::{Price, Quantity};

use super::price_level::{Handle, OrderNode, PriceLevel};

/// Ask (sell) side of the book
///
/// Price levels sorted so the best ask is the lowest price. At each level,
/// orders keep strict FIFO arrival order.
#[derive(Debug, Clone, Default)]
pub struct AskBook {
    levels: BTreeMap<Price, PriceLevel>,
    arena: Slab<OrderNode>,
}

impl AskBook {
    /// Create a new empty ask book
    pub fn new() -> Self {
        Self::default()
    }

    /// Rest an order at the tail of its price level, creating the level if
    /// absent. Returns the stable handle for the order index.
    pub fn insert(&mut self, id: OrderId, price: Price, quantity: Quantity) -> Handle {
        let level = self.levels.entry(price).or_default();
        level.push_back(&mut self.arena, id, price, quantity)
    }

    /// Remove a resting order by handle, dropping its level if emptied
    pub fn remove(&mut self, handle: Handle) -> Option<OrderNode> {
        let price = self.arena.get(handle)?.price;
        let level = self.levels.get_mut(&price)?;
        let node = level.unlink(&mut self.arena, handle);
        if level.is_empty() {
            self.levels.remove(&price);
        }
        node
    }

    /// Consume quantity from a resting order after a match
    ///
    /// Returns `true` when the order is fully filled and has been removed
    /// (along with its level, if that emptied it).
    pub fn fill(&mut self, handle: Handle, quantity: Quantity) -> bool {
        let Some(node) = self.arena.get_mut(handle) else {
            return false;
        };
        let price = node.price;
        node.remaining = node.remaining.saturating_sub(quantity);
        let filled = node.remaining.is_zero();

        if let Some(level) = self.levels.get_mut(&price) {
            level.debit(quantity);
            if filled {
                level.unlink(&mut self.arena, handle);
                if level.is_empty() {
                    self.levels.remove(&price);
                }
            }
        }

        filled
    }

    /// Get the best ask (lowest price) and its total volume
    pub fn best(&self) -> Option<(Price, Quantity)> {
        self.levels
            .iter()
            .next()
            .map(|(price, level)| (*price, level.total_volume()))
    }

    /// Get the best ask price
    pub fn best_price(&self) -> Option<Price> {
        self.levels.keys().next().copied()
    }

    /// Head of the best level's FIFO: the next maker to trade against
    pub fn front_of_best(&self) -> Option<(Price, Handle)> {
        let (price, level) = self.levels.iter().next()?;
        Some((*price, level.front()?))
    }

    /// Look up a resting order by handle
    pub fn node(&self, handle: Handle) -> Option<&OrderNode> {
        self.arena.get(handle)
    }

    /// Enumerate `(price, volume)` levels from best to worst
    pub fn levels(&self) -> Vec<LevelInfo> {
        self.levels
            .iter() // Lowest prices first
            .map(|(price, level)| LevelInfo::new(*price, level.total_volume()))
            .collect()
    }

    /// Number of price levels
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Number of resting orders across all levels
    pub fn order_count(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}
