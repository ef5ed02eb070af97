//! # Trade Server
//!
//! HTTP front of the trade store: route table, request extraction,
//! error responses, configuration and command-line arguments.

pub mod api;
pub mod args;
pub mod config;
pub mod error;

pub use api::{router, AppState};
pub use error::ApiError;
