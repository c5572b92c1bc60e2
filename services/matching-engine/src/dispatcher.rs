//! Command dispatcher
//!
//! Serializes concurrent producers onto the single-threaded book: any number
//! of threads enqueue commands, one worker drains them in FIFO order and is
//! the only code that ever touches the `OrderBook`. Observers are notified
//! from the worker after each processed command.

use crossbeam_channel::{unbounded, Receiver, Sender};
use std::thread::{self, JoinHandle};
use tracing::{debug, info, warn};
use types::ids::OrderId;
use types::order::Order;
use types::time::unix_nanos;

use crate::engine::OrderBook;
use crate::events::{BookUpdateCallback, TradeCallback};

/// A command accepted by the engine queue
#[derive(Debug)]
pub enum Command {
    /// Match an incoming order and rest any limit residual
    Add(Order),
    /// Remove a resting order if present
    Cancel(OrderId),
    /// Terminate the worker after all previously queued commands
    Stop,
}

/// Cloneable producer handle
///
/// Submissions are non-blocking and keep their enqueue order. Sends after
/// the engine stopped are dropped.
#[derive(Clone)]
pub struct CommandSender {
    tx: Sender<Command>,
}

impl CommandSender {
    /// Enqueue a command
    pub fn submit(&self, command: Command) {
        if self.tx.send(command).is_err() {
            warn!("command dropped: engine is stopped");
        }
    }

    /// Enqueue an add command
    pub fn add_order(&self, order: Order) {
        self.submit(Command::Add(order));
    }

    /// Enqueue a cancel command
    pub fn cancel_order(&self, id: OrderId) {
        self.submit(Command::Cancel(id));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Running,
    Stopped,
}

/// The matching engine: an order book behind a serialized command queue
///
/// Lifecycle is `Idle → Running → Stopped`. Callbacks must be registered
/// while idle; `start` moves them and the book into the worker thread.
/// `stop` posts a `Stop` command behind any queued work and joins, so every
/// previously submitted command is applied before shutdown completes.
pub struct MatchingEngine {
    tx: Sender<Command>,
    rx: Option<Receiver<Command>>,
    book: Option<OrderBook>,
    on_trade: Option<TradeCallback>,
    on_book_update: Option<BookUpdateCallback>,
    worker: Option<JoinHandle<()>>,
    state: State,
}

impl MatchingEngine {
    /// Create an idle engine over an empty book
    pub fn new() -> Self {
        let (tx, rx) = unbounded();
        Self {
            tx,
            rx: Some(rx),
            book: Some(OrderBook::new()),
            on_trade: None,
            on_book_update: None,
            worker: None,
            state: State::Idle,
        }
    }

    /// Register the trade observer; only honored while idle
    pub fn set_trade_callback(&mut self, callback: TradeCallback) {
        if self.state == State::Idle {
            self.on_trade = Some(callback);
        }
    }

    /// Register the book-update observer; only honored while idle
    pub fn set_book_update_callback(&mut self, callback: BookUpdateCallback) {
        if self.state == State::Idle {
            self.on_book_update = Some(callback);
        }
    }

    /// Launch the worker thread
    ///
    /// Commands submitted before `start` are processed once the worker runs.
    /// No-op unless the engine is idle.
    pub fn start(&mut self) {
        if self.state != State::Idle {
            return;
        }
        let (Some(rx), Some(book)) = (self.rx.take(), self.book.take()) else {
            return;
        };
        let on_trade = self.on_trade.take();
        let on_book_update = self.on_book_update.take();

        self.worker = Some(thread::spawn(move || {
            run(book, rx, on_trade, on_book_update)
        }));
        self.state = State::Running;
        info!("matching engine started");
    }

    /// Enqueue a command; non-blocking
    pub fn submit(&self, command: Command) {
        if self.tx.send(command).is_err() {
            warn!("command dropped: engine is stopped");
        }
    }

    /// Enqueue an add command
    pub fn add_order(&self, order: Order) {
        self.submit(Command::Add(order));
    }

    /// Enqueue a cancel command
    pub fn cancel_order(&self, id: OrderId) {
        self.submit(Command::Cancel(id));
    }

    /// A cloneable handle for producer threads
    pub fn sender(&self) -> CommandSender {
        CommandSender {
            tx: self.tx.clone(),
        }
    }

    /// Stop the engine, draining all previously queued commands first
    ///
    /// Blocks until the worker observes `Stop` and exits. Idempotent.
    pub fn stop(&mut self) {
        match self.state {
            State::Running => {
                let _ = self.tx.send(Command::Stop);
                if let Some(worker) = self.worker.take() {
                    let _ = worker.join();
                }
                self.state = State::Stopped;
                info!("matching engine stopped");
            }
            State::Idle => {
                // Drop the receiver so later submissions fail fast
                self.rx = None;
                self.state = State::Stopped;
            }
            State::Stopped => {}
        }
    }
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for MatchingEngine {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Worker loop: drain the queue, apply each command, notify observers
fn run(
    mut book: OrderBook,
    rx: Receiver<Command>,
    mut on_trade: Option<TradeCallback>,
    mut on_book_update: Option<BookUpdateCallback>,
) {
    while let Ok(command) = rx.recv() {
        match command {
            Command::Stop => break,
            Command::Add(order) => {
                let id = order.id;
                let result = book.add(order, unix_nanos());
                debug!(
                    order = id.as_u64(),
                    trades = result.trades.len(),
                    status = ?result.status,
                    "processed add"
                );

                if !result.trades.is_empty() {
                    if let Some(callback) = on_trade.as_mut() {
                        callback(&result.trades);
                    }
                }
                if result.book_changed() {
                    if let Some(callback) = on_book_update.as_mut() {
                        callback(&book);
                    }
                }
            }
            Command::Cancel(id) => {
                let removed = book.cancel(id);
                debug!(order = id.as_u64(), removed, "processed cancel");

                if removed {
                    if let Some(callback) = on_book_update.as_mut() {
                        callback(&book);
                    }
                }
            }
        }
    }
}
