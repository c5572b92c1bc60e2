//! Depth enumeration pairs

use crate::numeric::{Price, Quantity};
use serde::{Deserialize, Serialize};

/// One `(price, total volume)` pair of a depth enumeration
///
/// `quantity` is the sum of remaining quantities of every order resting at
/// this price. Book sides enumerate levels best-to-worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelInfo {
    pub price: Price,
    pub quantity: Quantity,
}

impl LevelInfo {
    pub fn new(price: Price, quantity: Quantity) -> Self {
        Self { price, quantity }
    }
}
