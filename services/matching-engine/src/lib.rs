//! Single-instrument limit order matching engine
//!
//! Price-time priority matching over a two-sided book, behind a serialized
//! command queue.
//!
//! **Key invariants:**
//! - Price-time priority strictly enforced: best price first, FIFO within a
//!   price level
//! - Trades execute at the maker's price
//! - Cancellation is O(1) after an O(log n) price lookup, via stable arena
//!   handles
//! - Commands are applied in submission order; observers see callbacks for
//!   command *k* before command *k+1* is processed
//! - Deterministic: the same command sequence produces the same trade tape
//!   and the same final book

pub mod book;
pub mod dispatcher;
pub mod engine;
pub mod events;
pub mod matching;

pub use dispatcher::{Command, CommandSender, MatchingEngine};
pub use engine::{AddResult, AddStatus, OrderBook};
