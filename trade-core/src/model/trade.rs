use super::{CurrencyCode, Side};
use crate::error::{FieldError, ValidationError};
use serde::{de, Deserialize, Deserializer, Serialize};

pub const MIN_USER_ID: i64 = 0;
pub const MIN_PRICE: f64 = 0.0;
pub const MIN_AMOUNT: f64 = 10.0;

/// A stored trade. Every instance has passed `TradePayload::validate`,
/// including ones built by deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TradePayload")]
pub struct Trade {
    id: i64,
    user_id: i64,
    currency: CurrencyCode,
    side: Side,
    price: f64,
    amount: f64,
}

impl Trade {
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn currency(&self) -> &CurrencyCode {
        &self.currency
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Overwrites every field but `id` with the replacement's values.
    pub fn apply(&mut self, replacement: Trade) {
        self.user_id = replacement.user_id;
        self.currency = replacement.currency;
        self.side = replacement.side;
        self.price = replacement.price;
        self.amount = replacement.amount;
    }
}

/// Raw trade body as received from a client, before any range checks.
///
/// `side` is already closed over `Side` here, so an unknown side never
/// makes it past deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradePayload {
    #[serde(deserialize_with = "integral")]
    pub id: i64,
    #[serde(deserialize_with = "integral")]
    pub user_id: i64,
    pub currency: String,
    pub side: Side,
    pub price: f64,
    pub amount: f64,
}

impl TradePayload {
    /// Checks every field and builds a `Trade`, normalizing the currency.
    ///
    /// All violations are collected into a single `ValidationError`.
    pub fn validate(self) -> Result<Trade, ValidationError> {
        let mut errors = Vec::new();

        if self.user_id < MIN_USER_ID {
            errors.push(FieldError::new(
                "user_id",
                format!("Input should be greater than or equal to {}", MIN_USER_ID),
            ));
        }

        let currency = match CurrencyCode::parse(&self.currency) {
            Ok(code) => Some(code),
            Err(e) => {
                errors.push(e);
                None
            }
        };

        if let Some(e) = check_lower_bound("price", self.price, MIN_PRICE) {
            errors.push(e);
        }
        if let Some(e) = check_lower_bound("amount", self.amount, MIN_AMOUNT) {
            errors.push(e);
        }

        match currency {
            Some(currency) if errors.is_empty() => Ok(Trade {
                id: self.id,
                user_id: self.user_id,
                currency,
                side: self.side,
                price: self.price,
                amount: self.amount,
            }),
            _ => Err(ValidationError::new(errors)),
        }
    }
}

impl TryFrom<TradePayload> for Trade {
    type Error = ValidationError;

    fn try_from(payload: TradePayload) -> Result<Self, Self::Error> {
        payload.validate()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonInt {
    Int(i64),
    Float(f64),
}

/// Accepts whole-number floats such as `1.0` for integer fields.
fn integral<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match JsonInt::deserialize(deserializer)? {
        JsonInt::Int(value) => Ok(value),
        JsonInt::Float(value)
            if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 =>
        {
            Ok(value as i64)
        }
        JsonInt::Float(value) => Err(de::Error::invalid_value(
            de::Unexpected::Float(value),
            &"a valid integer",
        )),
    }
}

fn check_lower_bound(field: &str, value: f64, min: f64) -> Option<FieldError> {
    if !value.is_finite() {
        Some(FieldError::new(field, "Input should be a finite number"))
    } else if value < min {
        Some(FieldError::new(
            field,
            format!("Input should be greater than or equal to {}", min),
        ))
    } else {
        None
    }
}
