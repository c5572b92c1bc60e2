//! Websocket session handling
//!
//! Each client gets the cached depth snapshot on connect, then every
//! broadcast `book` and `trade` frame. Inbound frames are parsed, validated,
//! stamped with a fresh order id, and enqueued on the engine; malformed or
//! invalid payloads are logged and dropped without closing the connection.

use axum::extract::ws::{Message, Utf8Bytes, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::Response;
use futures::{SinkExt, StreamExt};
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, warn};
use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::Order;
use types::time::unix_nanos;

use crate::models::{snapshot_frame, ClientMessage};
use crate::state::AppState;

pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    let (mut sink, mut stream) = socket.split();

    // Connect-time snapshot from the cached depth. The live book belongs to
    // the engine worker and is never read here.
    let snapshot = {
        let depth = state.depth.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        snapshot_frame(&depth.bids, &depth.asks)
    };
    let frame = match serde_json::to_string(&snapshot) {
        Ok(frame) => frame,
        Err(err) => {
            warn!(%err, "failed to serialize snapshot");
            return;
        }
    };
    if sink.send(Message::Text(Utf8Bytes::from(frame))).await.is_err() {
        return;
    }

    // Forward broadcast frames until the client goes away or falls behind
    let mut events = state.events.subscribe();
    let forward = tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(frame) => {
                    if sink.send(Message::Text(Utf8Bytes::from(frame))).await.is_err() {
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "dropping lagged websocket client");
                    break;
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    while let Some(Ok(message)) = stream.next().await {
        match message {
            Message::Text(text) => handle_frame(&state, text.as_str()),
            Message::Close(_) => break,
            _ => {}
        }
    }

    forward.abort();
}

/// Parse, validate, and enqueue one inbound frame
fn handle_frame(state: &AppState, raw: &str) {
    let message: ClientMessage = match serde_json::from_str(raw) {
        Ok(message) => message,
        Err(err) => {
            warn!(%err, "ignoring malformed frame");
            return;
        }
    };
    if let Err(reason) = message.validate() {
        warn!(%reason, "rejecting order payload");
        return;
    }

    match message {
        ClientMessage::Add { side, price, qty } => {
            let id = OrderId::new(state.allocate_order_id());
            let order = Order::limit(id, side, Price::new(price), Quantity::new(qty), unix_nanos());
            debug!(order = id.as_u64(), "submitting add");
            state.commands.add_order(order);
        }
        ClientMessage::Cancel { order_id } => {
            debug!(order = order_id, "submitting cancel");
            state.commands.cancel_order(OrderId::new(order_id));
        }
    }
}
