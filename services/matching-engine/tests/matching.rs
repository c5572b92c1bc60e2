//! Book-level matching scenarios
//!
//! Exercises the price-time priority algorithm end to end through the public
//! `OrderBook` API: crossing, sweeping, cancellation, duplicate handling,
//! and the conservation laws the book must uphold after every command.

use matching_engine::{AddStatus, OrderBook};
use types::ids::OrderId;
use types::level::LevelInfo;
use types::numeric::{Price, Quantity};
use types::order::{Order, Side};

fn limit(id: u64, side: Side, price: u64, qty: u64) -> Order {
    Order::limit(
        OrderId::new(id),
        side,
        Price::new(price),
        Quantity::new(qty),
        id as i64,
    )
}

fn add(book: &mut OrderBook, order: Order) -> matching_engine::AddResult {
    let ts = order.timestamp;
    book.add(order, ts)
}

fn level(price: u64, qty: u64) -> LevelInfo {
    LevelInfo::new(Price::new(price), Quantity::new(qty))
}

/// Flatten trades to `(price, qty, maker, taker)` rows for comparison.
fn tape(result: &matching_engine::AddResult) -> Vec<(u64, u64, u64, u64)> {
    result
        .trades
        .iter()
        .map(|t| {
            (
                t.price.as_u64(),
                t.quantity.as_u64(),
                t.maker_order_id.as_u64(),
                t.taker_order_id.as_u64(),
            )
        })
        .collect()
}

/// Structural invariants that must hold for every reachable book state.
fn audit(book: &OrderBook) {
    let bids = book.bids();
    let asks = book.asks();

    for window in bids.windows(2) {
        assert!(window[0].price > window[1].price, "bids must be strictly descending");
    }
    for window in asks.windows(2) {
        assert!(window[0].price < window[1].price, "asks must be strictly ascending");
    }
    for l in bids.iter().chain(asks.iter()) {
        assert!(!l.quantity.is_zero(), "no empty level may survive");
    }
    if let (Some(bid), Some(ask)) = (bids.first(), asks.first()) {
        assert!(bid.price < ask.price, "book must not be crossed");
    }
}

#[test]
fn scenario_no_cross() {
    let mut book = OrderBook::new();

    add(&mut book, limit(1, Side::Buy, 100, 10));
    let result = add(&mut book, limit(2, Side::Sell, 101, 5));

    assert!(result.trades.is_empty());
    assert_eq!(book.bids(), vec![level(100, 10)]);
    assert_eq!(book.asks(), vec![level(101, 5)]);
    audit(&book);
}

#[test]
fn scenario_exact_match() {
    let mut book = OrderBook::new();

    add(&mut book, limit(1, Side::Sell, 100, 5));
    let result = add(&mut book, limit(2, Side::Buy, 100, 5));

    assert_eq!(tape(&result), vec![(100, 5, 1, 2)]);
    assert!(book.bids().is_empty());
    assert!(book.asks().is_empty());
    audit(&book);
}

#[test]
fn scenario_partial_fill_taker_rests() {
    let mut book = OrderBook::new();

    add(&mut book, limit(1, Side::Sell, 100, 3));
    let result = add(&mut book, limit(2, Side::Buy, 100, 5));

    assert_eq!(tape(&result), vec![(100, 3, 1, 2)]);
    assert_eq!(book.bids(), vec![level(100, 2)]);
    assert!(book.asks().is_empty());
    audit(&book);
}

#[test]
fn scenario_sweep_multiple_levels_price_time_priority() {
    let mut book = OrderBook::new();

    add(&mut book, limit(1, Side::Sell, 100, 2));
    add(&mut book, limit(2, Side::Sell, 100, 3));
    add(&mut book, limit(3, Side::Sell, 101, 4));

    let result = add(&mut book, limit(4, Side::Buy, 101, 8));

    assert_eq!(
        tape(&result),
        vec![(100, 2, 1, 4), (100, 3, 2, 4), (101, 3, 3, 4)]
    );
    assert_eq!(result.status, AddStatus::Filled);
    assert_eq!(book.asks(), vec![level(101, 1)]);
    assert!(book.bids().is_empty());
    audit(&book);
}

#[test]
fn scenario_cancel_then_no_match() {
    let mut book = OrderBook::new();

    add(&mut book, limit(1, Side::Buy, 100, 5));
    assert!(book.cancel(OrderId::new(1)));

    let result = add(&mut book, limit(2, Side::Sell, 100, 5));
    assert!(result.trades.is_empty());
    assert!(book.bids().is_empty());
    assert_eq!(book.asks(), vec![level(100, 5)]);

    assert!(!book.cancel(OrderId::new(1)));
    audit(&book);
}

#[test]
fn scenario_duplicate_id_rejected() {
    let mut book = OrderBook::new();

    add(&mut book, limit(1, Side::Buy, 100, 5));
    let result = add(&mut book, limit(1, Side::Buy, 101, 7));

    assert_eq!(result.status, AddStatus::Rejected);
    assert!(result.trades.is_empty());
    assert_eq!(book.bids(), vec![level(100, 5)]);
    assert_eq!(book.order_count(), 1);
    audit(&book);
}

#[test]
fn law_cancel_undoes_add() {
    let mut book = OrderBook::new();

    add(&mut book, limit(1, Side::Sell, 100, 5));
    assert!(book.cancel(OrderId::new(1)));

    assert!(book.is_empty());
    assert_eq!(book.order_count(), 0);
    audit(&book);
}

#[test]
fn law_idempotent_cancel() {
    let mut book = OrderBook::new();

    add(&mut book, limit(1, Side::Buy, 100, 5));
    assert!(book.cancel(OrderId::new(1)));
    assert!(!book.cancel(OrderId::new(1)));
    assert!(!book.cancel(OrderId::new(1)));
}

#[test]
fn law_trade_conservation() {
    let mut book = OrderBook::new();

    add(&mut book, limit(1, Side::Sell, 100, 4));
    add(&mut book, limit(2, Side::Sell, 101, 6));
    let resting_before: u64 = book.asks().iter().map(|l| l.quantity.as_u64()).sum();

    let incoming_qty = 7u64;
    let result = add(&mut book, limit(3, Side::Buy, 101, incoming_qty));

    let traded: u64 = result.trades.iter().map(|t| t.quantity.as_u64()).sum();
    let resting_after: u64 = book.asks().iter().map(|l| l.quantity.as_u64()).sum();

    // Each trade debits maker and taker by the same quantity
    assert_eq!(resting_before - resting_after, traded);
    assert_eq!(result.status, AddStatus::Filled);
    assert_eq!(traded, incoming_qty);
    audit(&book);
}

#[test]
fn law_same_commands_same_outcome() {
    let commands = [
        limit(1, Side::Sell, 102, 4),
        limit(2, Side::Buy, 99, 3),
        limit(3, Side::Sell, 100, 2),
        limit(4, Side::Buy, 101, 5),
        limit(5, Side::Sell, 99, 6),
    ];

    let mut book_a = OrderBook::new();
    let mut book_b = OrderBook::new();
    let mut tape_a = Vec::new();
    let mut tape_b = Vec::new();

    for order in &commands {
        tape_a.extend(book_a.add(order.clone(), order.timestamp).trades);
    }
    for order in &commands {
        tape_b.extend(book_b.add(order.clone(), order.timestamp).trades);
    }

    assert_eq!(tape_a, tape_b);
    assert_eq!(book_a.bids(), book_b.bids());
    assert_eq!(book_a.asks(), book_b.asks());
    audit(&book_a);
}

#[test]
fn aggressive_limit_rests_at_its_own_quote() {
    let mut book = OrderBook::new();

    add(&mut book, limit(1, Side::Sell, 100, 2));
    // Buys through the ask, then rests the residual at its quoted 105
    let result = add(&mut book, limit(2, Side::Buy, 105, 5));

    assert_eq!(tape(&result), vec![(100, 2, 1, 2)]);
    assert_eq!(book.bids(), vec![level(105, 3)]);
    assert!(book.asks().is_empty());
    audit(&book);
}

#[test]
fn deep_book_stays_sorted_under_churn() {
    let mut book = OrderBook::new();

    for i in 0..20u64 {
        add(&mut book, limit(i + 1, Side::Buy, 80 + i, 1 + i % 3));
        add(&mut book, limit(i + 101, Side::Sell, 110 + i, 1 + i % 3));
    }
    for id in [3u64, 7, 12, 104, 109, 118] {
        assert!(book.cancel(OrderId::new(id)));
    }
    // Sweep part of the ask side
    add(&mut book, limit(500, Side::Buy, 113, 6));

    audit(&book);
}
