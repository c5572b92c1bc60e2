//! Crossing detection logic
//!
//! Determines when an incoming order can trade against a resting level.

use types::numeric::Price;
use types::order::{Order, OrderType, Side};

/// Check if a bid and an ask can match at given prices
///
/// A buy matches a sell when the bid price is at or above the ask price.
pub fn can_match(bid_price: Price, ask_price: Price) -> bool {
    bid_price >= ask_price
}

/// Check if an incoming order crosses a resting level's price
///
/// Market orders cross trivially at every level; limit orders cross when
/// their quote reaches the resting price from their own side.
pub fn taker_crosses(incoming: &Order, resting_price: Price) -> bool {
    if incoming.order_type == OrderType::Market {
        return true;
    }
    match incoming.side {
        Side::Buy => incoming.price >= resting_price,
        Side::Sell => incoming.price <= resting_price,
    }
}
