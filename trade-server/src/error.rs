use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::warn;
use serde_json::{json, Value};
use std::fmt;
use thiserror::Error;
use trade_core::{StoreError, ValidationError};

/// Which part of the request a 422 refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Body,
    Path,
}

impl Location {
    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Body => "body",
            Location::Path => "path",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every way a trade request can fail, mapped onto an HTTP response.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The body parsed but violates field constraints.
    #[error("Invalid request body: {0}")]
    Body(ValidationError),

    /// A path parameter parsed but is out of range.
    #[error("Invalid path parameter: {0}")]
    Path(ValidationError),

    /// The extractor could not even parse the input.
    #[error("Unprocessable {location}: {message}")]
    Rejected { location: Location, message: String },

    #[error(transparent)]
    NotFound(#[from] StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn detail(&self) -> Value {
        match self {
            ApiError::Body(err) => field_details(Location::Body, err),
            ApiError::Path(err) => field_details(Location::Path, err),
            ApiError::Rejected { location, message } => json!([{
                "loc": [location.as_str()],
                "msg": message,
            }]),
            ApiError::NotFound(_) => json!("Trade not found"),
        }
    }
}

fn field_details(location: Location, err: &ValidationError) -> Value {
    err.errors()
        .iter()
        .map(|e| {
            json!({
                "loc": [location.as_str(), e.field()],
                "msg": e.message(),
            })
        })
        .collect()
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected {
            location: Location::Body,
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Rejected {
            location: Location::Path,
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!("{}", self);
        let body = Json(json!({ "detail": self.detail() }));
        (self.status(), body).into_response()
    }
}
