use super::AppState;
use crate::error::ApiError;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use log::debug;
use trade_core::{error::require_positive_id, Trade, TradePayload};

type TradeIdPath = Result<Path<i64>, PathRejection>;
type TradeBody = Result<Json<TradePayload>, JsonRejection>;

pub async fn create_trade(
    State(state): State<AppState>,
    body: TradeBody,
) -> Result<Json<Trade>, ApiError> {
    let Json(payload) = body?;
    let trade = payload.validate().map_err(ApiError::Body)?;
    Ok(Json(state.store.create(trade)))
}

pub async fn list_trades(State(state): State<AppState>) -> Json<Vec<Trade>> {
    let trades = state.store.list();
    debug!("Listing {} trades", trades.len());
    Json(trades)
}

pub async fn read_trade(
    State(state): State<AppState>,
    trade_id: TradeIdPath,
) -> Result<Json<Trade>, ApiError> {
    let Path(trade_id) = trade_id?;
    let trade_id = require_positive_id(trade_id).map_err(ApiError::Path)?;
    Ok(Json(state.store.get(trade_id)?))
}

/// The body's own `id` is validated but the path id selects the trade.
pub async fn update_trade(
    State(state): State<AppState>,
    trade_id: TradeIdPath,
    body: TradeBody,
) -> Result<Json<Trade>, ApiError> {
    let Path(trade_id) = trade_id?;
    let Json(payload) = body?;
    let replacement = payload.validate().map_err(ApiError::Body)?;
    Ok(Json(state.store.update(trade_id, replacement)?))
}

pub async fn delete_trade(
    State(state): State<AppState>,
    trade_id: TradeIdPath,
) -> Result<Json<Trade>, ApiError> {
    let Path(trade_id) = trade_id?;
    Ok(Json(state.store.delete(trade_id)?))
}
