use crate::error::FieldError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const CURRENCY_CODE_LEN: usize = 3;

/// A three-letter currency code, always stored upper-cased (e.g. "USD").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Accepts exactly three ASCII letters in any case and upper-cases them.
    pub fn parse(raw: &str) -> Result<Self, FieldError> {
        let valid = raw.chars().count() == CURRENCY_CODE_LEN
            && raw.chars().all(|c| c.is_ascii_alphabetic());
        if !valid {
            return Err(FieldError::new("currency", "Invalid currency code"));
        }
        Ok(Self(raw.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
