//! Shared application state for the websocket handlers

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use matching_engine::CommandSender;
use tokio::sync::broadcast;
use types::level::LevelInfo;

/// Most recent depth published by the engine's book-update callback
///
/// Connect-time snapshots are served from here; the live book is never read
/// outside the engine worker.
#[derive(Debug, Clone, Default)]
pub struct DepthCache {
    pub bids: Vec<LevelInfo>,
    pub asks: Vec<LevelInfo>,
}

#[derive(Clone)]
pub struct AppState {
    /// Producer handle into the engine's command queue
    pub commands: CommandSender,
    /// Pre-serialized outbound frames fanned out to every client
    pub events: broadcast::Sender<String>,
    pub depth: Arc<RwLock<DepthCache>>,
    next_order_id: Arc<AtomicU64>,
}

impl AppState {
    pub fn new(
        commands: CommandSender,
        events: broadcast::Sender<String>,
        depth: Arc<RwLock<DepthCache>>,
    ) -> Self {
        Self {
            commands,
            events,
            depth,
            next_order_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Next order id from the monotonic counter starting at 1
    pub fn allocate_order_id(&self) -> u64 {
        self.next_order_id.fetch_add(1, Ordering::Relaxed)
    }
}
