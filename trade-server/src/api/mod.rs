//! API module
//!
//! Route table of the trade service and the state shared by its handlers.

mod trades;

use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use trade_core::TradeStore;

pub use trades::{create_trade, delete_trade, list_trades, read_trade, update_trade};

// App State to share with routes
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<TradeStore>,
}

impl AppState {
    pub fn new(store: Arc<TradeStore>) -> Self {
        Self { store }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/trades/", get(list_trades).post(create_trade))
        .route("/trades", get(list_trades).post(create_trade))
        .route(
            "/trades/:trade_id",
            get(read_trade).put(update_trade).delete(delete_trade),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "OK", "trades": state.store.len()}))
}
