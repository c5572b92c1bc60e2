//! Trade records produced by matching

use crate::ids::OrderId;
use crate::numeric::{Price, Quantity};
use serde::{Deserialize, Serialize};

/// An atomic exchange between a resting maker and an incoming taker
///
/// The price is always the maker level's price, never the taker's quote.
/// Trades are emitted in generation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    pub price: Price,
    pub quantity: Quantity,
    pub maker_order_id: OrderId,
    pub taker_order_id: OrderId,
    pub executed_at: i64, // Unix nanos
}

impl Trade {
    /// Create a new trade record
    pub fn new(
        price: Price,
        quantity: Quantity,
        maker_order_id: OrderId,
        taker_order_id: OrderId,
        executed_at: i64,
    ) -> Self {
        Self {
            price,
            quantity,
            maker_order_id,
            taker_order_id,
            executed_at,
        }
    }

    /// Trade value in tick × lot units
    ///
    /// Widened to `u128` so a full-range price × quantity cannot overflow.
    pub fn notional(&self) -> u128 {
        self.price.as_u64() as u128 * self.quantity.as_u64() as u128
    }
}
