use serde::{Deserialize, Serialize};

use larder_core::{DomainError, DomainResult, Entity, ValueObject};

/// A strictly positive, finite amount of stock.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(f64);

impl Quantity {
    /// Validate a raw amount. `what` names the amount in the error message
    /// (e.g. "item quantity", "consumed quantity").
    pub fn new(value: f64, what: &str) -> DomainResult<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(DomainError::validation(format!(
                "{what} must be greater than zero"
            )));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl ValueObject for Quantity {}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Expiration date kept as its `YYYY-MM-DD` text.
///
/// Ordering is plain string ordering. For zero-padded ISO-8601 dates that is
/// chronological order, so the text is never parsed for comparisons.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpirationDate(String);

impl ExpirationDate {
    pub fn new(date: impl Into<String>) -> Self {
        Self(date.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Expired when the stored date is on or before `current_date` (string comparison).
    pub fn is_expired_on(&self, current_date: &str) -> bool {
        self.0.as_str() <= current_date
    }

    /// Whether the text is a real, zero-padded `YYYY-MM-DD` calendar date.
    ///
    /// Only used to warn about input that will not sort chronologically.
    pub fn is_iso_date(&self) -> bool {
        self.0.len() == 10 && chrono::NaiveDate::parse_from_str(&self.0, "%Y-%m-%d").is_ok()
    }
}

impl ValueObject for ExpirationDate {}

impl core::fmt::Display for ExpirationDate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A stocked item, keyed by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    quantity: f64,
    expiration_date: ExpirationDate,
}

impl Item {
    pub(crate) fn new(name: String, quantity: Quantity, expiration_date: ExpirationDate) -> Self {
        Self {
            name,
            quantity: quantity.value(),
            expiration_date,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn expiration_date(&self) -> &ExpirationDate {
        &self.expiration_date
    }

    pub(crate) fn add(&mut self, quantity: Quantity) {
        self.quantity += quantity.value();
    }

    pub(crate) fn remove(&mut self, quantity: Quantity) {
        self.quantity -= quantity.value();
    }
}

impl Entity for Item {
    type Id = String;

    fn id(&self) -> &String {
        &self.name
    }
}
