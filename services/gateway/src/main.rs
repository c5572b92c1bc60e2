//! Websocket order gateway
//!
//! Bridges websocket clients to the matching engine: inbound JSON frames
//! become queued commands, engine callbacks become broadcast `book` and
//! `trade` frames, and new connections receive a depth snapshot built from
//! the latest book update.

mod config;
mod handlers;
mod models;
mod router;
mod state;

use std::net::SocketAddr;
use std::sync::{Arc, RwLock};

use matching_engine::MatchingEngine;
use tokio::net::TcpListener;
use tokio::sync::broadcast;

use config::GatewayConfig;
use models::{book_frame, trade_frame};
use router::create_router;
use state::{AppState, DepthCache};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt::init();

    let config = GatewayConfig::from_env();
    tracing::info!("Starting order gateway");

    let (events, _) = broadcast::channel::<String>(config.broadcast_capacity);
    let depth = Arc::new(RwLock::new(DepthCache::default()));

    let mut engine = MatchingEngine::new();
    {
        let events = events.clone();
        engine.set_trade_callback(Box::new(move |trades| {
            match serde_json::to_string(&trade_frame(trades)) {
                // Send only fails with no subscribers; that is fine
                Ok(frame) => {
                    let _ = events.send(frame);
                }
                Err(err) => tracing::warn!(%err, "failed to serialize trade frame"),
            }
        }));
    }
    {
        let events = events.clone();
        let depth = depth.clone();
        engine.set_book_update_callback(Box::new(move |book| {
            let bids = book.bids();
            let asks = book.asks();

            if let Ok(mut cache) = depth.write() {
                cache.bids = bids.clone();
                cache.asks = asks.clone();
            }
            match serde_json::to_string(&book_frame(&bids, &asks)) {
                Ok(frame) => {
                    let _ = events.send(frame);
                }
                Err(err) => tracing::warn!(%err, "failed to serialize book frame"),
            }
        }));
    }
    engine.start();

    let state = AppState::new(engine.sender(), events, depth);
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    engine.stop();
    Ok(())
}
