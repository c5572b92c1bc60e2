//! Wire frames exchanged with websocket clients
//!
//! Client → server: `add` and `cancel`. Server → client: `snapshot` on
//! connect, `book` on every resting-book change, `trade` per trade batch.
//! Prices and quantities are plain unsigned integers in tick units.

use serde::{Deserialize, Serialize};
use types::errors::OrderRejectError;
use types::level::LevelInfo;
use types::order::Side;
use types::trade::Trade;

/// Frames accepted from clients
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ClientMessage {
    Add {
        side: Side,
        price: u64,
        qty: u64,
    },
    Cancel {
        #[serde(rename = "orderId")]
        order_id: u64,
    },
}

impl ClientMessage {
    /// Reject payloads the engine would otherwise silently swallow
    pub fn validate(&self) -> Result<(), OrderRejectError> {
        match self {
            ClientMessage::Add { price, qty, .. } => {
                if *qty == 0 {
                    return Err(OrderRejectError::InvalidQuantity);
                }
                if *price == 0 {
                    return Err(OrderRejectError::InvalidPrice);
                }
                Ok(())
            }
            ClientMessage::Cancel { .. } => Ok(()),
        }
    }
}

/// Frames broadcast to clients
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ServerMessage {
    Snapshot {
        bids: Vec<WireLevel>,
        asks: Vec<WireLevel>,
    },
    Book {
        bids: Vec<WireLevel>,
        asks: Vec<WireLevel>,
    },
    Trade {
        trades: Vec<WireTrade>,
    },
}

/// One `(price, qty)` depth row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireLevel {
    pub price: u64,
    pub qty: u64,
}

impl From<&LevelInfo> for WireLevel {
    fn from(level: &LevelInfo) -> Self {
        Self {
            price: level.price.as_u64(),
            qty: level.quantity.as_u64(),
        }
    }
}

/// One executed trade row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireTrade {
    pub price: u64,
    pub qty: u64,
    pub maker: u64,
    pub taker: u64,
}

impl From<&Trade> for WireTrade {
    fn from(trade: &Trade) -> Self {
        Self {
            price: trade.price.as_u64(),
            qty: trade.quantity.as_u64(),
            maker: trade.maker_order_id.as_u64(),
            taker: trade.taker_order_id.as_u64(),
        }
    }
}

/// Build the connect-time snapshot frame
pub fn snapshot_frame(bids: &[LevelInfo], asks: &[LevelInfo]) -> ServerMessage {
    ServerMessage::Snapshot {
        bids: bids.iter().map(WireLevel::from).collect(),
        asks: asks.iter().map(WireLevel::from).collect(),
    }
}

/// Build the book-changed frame
pub fn book_frame(bids: &[LevelInfo], asks: &[LevelInfo]) -> ServerMessage {
    ServerMessage::Book {
        bids: bids.iter().map(WireLevel::from).collect(),
        asks: asks.iter().map(WireLevel::from).collect(),
    }
}

/// Build the trade-batch frame
pub fn trade_frame(trades: &[Trade]) -> ServerMessage {
    ServerMessage::Trade {
        trades: trades.iter().map(WireTrade::from).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::ids::OrderId;
    use types::numeric::{Price, Quantity};

    #[test]
    fn test_parse_add_frame() {
        let raw = r#"{"type":"add","side":"buy","price":100,"qty":10}"#;
        let message: ClientMessage = serde_json::from_str(raw).unwrap();

        match message {
            ClientMessage::Add { side, price, qty } => {
                assert_eq!(side, Side::Buy);
                assert_eq!(price, 100);
                assert_eq!(qty, 10);
            }
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn test_parse_cancel_frame() {
        let raw = r#"{"type":"cancel","orderId":7}"#;
        let message: ClientMessage = serde_json::from_str(raw).unwrap();

        assert!(matches!(message, ClientMessage::Cancel { order_id: 7 }));
    }

    #[test]
    fn test_unknown_frame_type_fails() {
        assert!(serde_json::from_str::<ClientMessage>(r#"{"type":"amend","orderId":7}"#).is_err());
        assert!(serde_json::from_str::<ClientMessage>(r#"{"side":"buy"}"#).is_err());
    }

    #[test]
    fn test_validation_rejects_zero_values() {
        let zero_qty: ClientMessage =
            serde_json::from_str(r#"{"type":"add","side":"sell","price":100,"qty":0}"#).unwrap();
        assert_eq!(zero_qty.validate(), Err(OrderRejectError::InvalidQuantity));

        let zero_price: ClientMessage =
            serde_json::from_str(r#"{"type":"add","side":"sell","price":0,"qty":5}"#).unwrap();
        assert_eq!(zero_price.validate(), Err(OrderRejectError::InvalidPrice));

        let cancel: ClientMessage =
            serde_json::from_str(r#"{"type":"cancel","orderId":0}"#).unwrap();
        assert_eq!(cancel.validate(), Ok(()));
    }

    #[test]
    fn test_snapshot_frame_shape() {
        let bids = vec![LevelInfo::new(Price::new(100), Quantity::new(10))];
        let asks = vec![LevelInfo::new(Price::new(101), Quantity::new(5))];

        let json = serde_json::to_string(&snapshot_frame(&bids, &asks)).unwrap();
        assert_eq!(
            json,
            r#"{"type":"snapshot","bids":[{"price":100,"qty":10}],"asks":[{"price":101,"qty":5}]}"#
        );
    }

    #[test]
    fn test_book_frame_shape() {
        let json = serde_json::to_string(&book_frame(&[], &[])).unwrap();
        assert_eq!(json, r#"{"type":"book","bids":[],"asks":[]}"#);
    }

    #[test]
    fn test_trade_frame_shape() {
        let trades = vec![Trade::new(
            Price::new(100),
            Quantity::new(5),
            OrderId::new(1),
            OrderId::new(2),
            42,
        )];

        let json = serde_json::to_string(&trade_frame(&trades)).unwrap();
        assert_eq!(
            json,
            r#"{"type":"trade","trades":[{"price":100,"qty":5,"maker":1,"taker":2}]}"#
        );
    }
}
