use std::sync::Arc;
use std::thread;
use trade_core::{Side, StoreError, Trade, TradePayload, TradeStore};

fn payload(id: i64, currency: &str, side: Side, price: f64, amount: f64) -> TradePayload {
    TradePayload {
        id,
        user_id: 5,
        currency: currency.to_string(),
        side,
        price,
        amount,
    }
}

fn valid(id: i64) -> Trade {
    payload(id, "usd", Side::Buy, 100.0, 20.0).validate().unwrap()
}

#[test]
fn test_create_then_get_round_trip() {
    let store = TradeStore::new();
    let created = store.create(valid(1));
    assert_eq!(store.get(1).unwrap(), created);
    assert_eq!(created.currency().as_str(), "USD");
}

#[test]
fn test_list_keeps_insertion_order_after_delete() {
    let store = TradeStore::new();
    for id in [5, 3, 9, 1] {
        store.create(valid(id));
    }
    store.delete(9).unwrap();

    let ids: Vec<i64> = store.list().iter().map(Trade::id).collect();
    assert_eq!(ids, vec![5, 3, 1]);
}

#[test]
fn test_trade_lifecycle() {
    let store = TradeStore::new();
    store.create(payload(1, "usd", Side::Buy, 100.0, 20.0).validate().unwrap());

    let replacement = payload(1, "eur", Side::Sell, 200.0, 30.0).validate().unwrap();
    store.update(1, replacement).unwrap();

    let updated = store.get(1).unwrap();
    assert_eq!(updated.currency().as_str(), "EUR");
    assert_eq!(updated.side(), Side::Sell);
    assert_eq!(updated.price(), 200.0);
    assert_eq!(updated.amount(), 30.0);

    let removed = store.delete(1).unwrap();
    assert_eq!(removed, updated);
    assert_eq!(store.get(1), Err(StoreError::NotFound(1)));
}

#[test]
fn test_update_ignores_body_id() {
    let store = TradeStore::new();
    store.create(valid(1));
    store.update(1, valid(42)).unwrap();

    assert!(store.get(1).is_ok());
    assert_eq!(store.get(42), Err(StoreError::NotFound(42)));
}

#[test]
fn test_concurrent_creates_are_not_lost() {
    let store = Arc::new(TradeStore::new());
    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let store = store.clone();
            thread::spawn(move || {
                for i in 0..50 {
                    store.create(valid(worker * 1000 + i));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(store.len(), 400);
}
