use crate::error::StoreError;
use crate::model::Trade;
use log::{info, warn};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Process-lifetime collection of trades, kept in insertion order.
///
/// Ids are not unique: lookups, updates and deletes act on the first
/// trade whose id matches. All access goes through one coarse lock.
#[derive(Debug, Default)]
pub struct TradeStore {
    trades: RwLock<Vec<Trade>>,
}

impl TradeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a validated trade and returns it.
    pub fn create(&self, trade: Trade) -> Trade {
        let mut trades = self.write();
        trades.push(trade.clone());
        info!(
            "Created trade {} ({} {} {} @ {})",
            trade.id(),
            trade.side(),
            trade.amount(),
            trade.currency(),
            trade.price()
        );
        trade
    }

    pub fn list(&self) -> Vec<Trade> {
        self.read().clone()
    }

    pub fn get(&self, id: i64) -> Result<Trade, StoreError> {
        self.read()
            .iter()
            .find(|t| t.id() == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    /// Replaces every field but `id` of the first trade matching `id`.
    pub fn update(&self, id: i64, replacement: Trade) -> Result<Trade, StoreError> {
        let mut trades = self.write();
        let trade = trades
            .iter_mut()
            .find(|t| t.id() == id)
            .ok_or_else(|| not_found(id))?;
        trade.apply(replacement);
        info!("Updated trade {}", id);
        Ok(trade.clone())
    }

    /// Removes the first trade matching `id` and returns it.
    pub fn delete(&self, id: i64) -> Result<Trade, StoreError> {
        let mut trades = self.write();
        let index = trades
            .iter()
            .position(|t| t.id() == id)
            .ok_or_else(|| not_found(id))?;
        let removed = trades.remove(index);
        info!("Deleted trade {}", id);
        Ok(removed)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Every operation is a single step, so a poisoned Vec is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Trade>> {
        self.trades.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Trade>> {
        self.trades.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn not_found(id: i64) -> StoreError {
    warn!("Trade {} not found", id);
    StoreError::NotFound(id)
}
