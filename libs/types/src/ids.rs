//! Unique identifier types for engine entities
//!
//! Order ids are assigned outside the engine (the reference transport uses a
//! monotonic counter starting at 1) and are unique for the process lifetime
//! of a book. The engine treats them as opaque keys and rejects duplicates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(u64);

impl OrderId {
    /// Wrap an externally assigned id
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw id value
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for OrderId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
