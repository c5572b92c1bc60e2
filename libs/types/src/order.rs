//! Order lifecycle types

use crate::ids::OrderId;
use crate::numeric::{Price, Quantity};
use serde::{Deserialize, Serialize};

/// Order side (buyer or seller)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Buy order (bid)
    Buy,
    /// Sell order (ask)
    Sell,
}

impl Side {
    /// Get the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

/// Order type
///
/// A limit order rests at its price when not fully matched. A market order
/// crosses every level and any unfilled residual is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Limit,
    Market,
}

/// A client order as admitted to the engine
///
/// `remaining_quantity` starts equal to `initial_quantity` and only ever
/// decreases. `timestamp` is Unix nanoseconds recorded at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub side: Side,
    pub order_type: OrderType,
    pub price: Price,
    pub initial_quantity: Quantity,
    pub remaining_quantity: Quantity,
    pub timestamp: i64, // Unix nanos
}

impl Order {
    /// Create a new unfilled order
    pub fn new(
        id: OrderId,
        side: Side,
        order_type: OrderType,
        price: Price,
        quantity: Quantity,
        timestamp: i64,
    ) -> Self {
        Self {
            id,
            side,
            order_type,
            price,
            initial_quantity: quantity,
            remaining_quantity: quantity,
            timestamp,
        }
    }

    /// Shorthand for a limit order
    pub fn limit(id: OrderId, side: Side, price: Price, quantity: Quantity, timestamp: i64) -> Self {
        Self::new(id, side, OrderType::Limit, price, quantity, timestamp)
    }

    /// Shorthand for a market order (quotes the zero price)
    pub fn market(id: OrderId, side: Side, quantity: Quantity, timestamp: i64) -> Self {
        Self::new(id, side, OrderType::Market, Price::ZERO, quantity, timestamp)
    }

    /// Check if the order is completely filled
    pub fn is_filled(&self) -> bool {
        self.remaining_quantity.is_zero()
    }

    /// Quantity filled so far
    pub fn filled_quantity(&self) -> Quantity {
        self.initial_quantity.saturating_sub(self.remaining_quantity)
    }

    /// Consume quantity from the order
    ///
    /// # Panics
    /// Panics if the fill exceeds the remaining quantity; fills are always
    /// computed as `min(incoming.remaining, maker.remaining)` so an overfill
    /// is a programmer error.
    pub fn fill(&mut self, quantity: Quantity) {
        self.remaining_quantity = self
            .remaining_quantity
            .checked_sub(quantity)
            .expect("fill exceeds remaining quantity");
    }
}
