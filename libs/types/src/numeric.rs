//! Tick-denominated numeric types for prices and quantities
//!
//! Prices and quantities are unsigned 64-bit integers in instrument tick
//! units. Integer ticks keep matching arithmetic exact and deterministic;
//! the instrument's tick scale is decided outside the engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// Price in instrument tick units
///
/// Zero is a legal price only for market orders, which ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// The zero price quoted by market orders
    pub const ZERO: Price = Price(0);

    /// Create a price from raw ticks
    pub fn new(ticks: u64) -> Self {
        Self(ticks)
    }

    /// Get the raw tick value
    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// Check whether this is the zero (market) price
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl From<u64> for Price {
    fn from(ticks: u64) -> Self {
        Self(ticks)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Quantity in instrument lot units
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(u64);

impl Quantity {
    /// The empty quantity
    pub const ZERO: Quantity = Quantity(0);

    /// Create a quantity from raw lots
    pub fn new(lots: u64) -> Self {
        Self(lots)
    }

    /// Get the raw lot value
    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// Check whether the quantity is empty
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Subtract, clamping at zero
    pub fn saturating_sub(self, rhs: Quantity) -> Quantity {
        Quantity(self.0.saturating_sub(rhs.0))
    }

    /// Subtract, returning `None` on underflow
    pub fn checked_sub(self, rhs: Quantity) -> Option<Quantity> {
        self.0.checked_sub(rhs.0).map(Quantity)
    }
}

impl From<u64> for Quantity {
    fn from(lots: u64) -> Self {
        Self(lots)
    }
}

impl Add for Quantity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Quantity {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
