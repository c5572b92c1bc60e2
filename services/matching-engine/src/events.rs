//! Observer contract
//!
//! Two optional callbacks, both invoked on the dispatcher's worker thread,
//! serially, in command order. Callbacks for one command are fully delivered
//! before the next command is processed.

use types::trade::Trade;

use crate::engine::OrderBook;

/// Fired with the non-empty batch of trades one command produced
///
/// A batch is never split across invocations; one command yields at most one
/// invocation.
pub type TradeCallback = Box<dyn FnMut(&[Trade]) + Send + 'static>;

/// Fired after a command changed the resting book
///
/// Receives the book by reference on the worker thread, which owns it:
/// calling `bids()`/`asks()` here is the sanctioned way to build snapshots
/// while the engine runs. Keep callbacks light; they stall matching.
pub type BookUpdateCallback = Box<dyn FnMut(&OrderBook) + Send + 'static>;
