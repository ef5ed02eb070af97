//! # Trade Core Library
//!
//! Domain layer of the trade store service, independent of any transport.
//!
//! ## Modules
//! - `model`: The `Trade` record, its request payload and field validation.
//! - `store`: The in-memory `TradeStore` owning the ordered trade collection.
//! - `error`: Validation and lookup errors shared with the HTTP layer.

pub mod error;
pub mod model;
pub mod store;

pub use error::{FieldError, StoreError, ValidationError};
pub use model::{CurrencyCode, Side, Trade, TradePayload};
pub use store::TradeStore;
