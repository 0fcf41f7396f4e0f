//! Monetary value: an amount in the smallest currency unit plus a currency code.

use core::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Currency used by [`Money::zero`].
pub const DEFAULT_CURRENCY: &str = "EUR";

/// Immutable monetary amount.
///
/// A zero amount is compatible with every currency: adding `Money::zero()` to
/// `10 USD` yields `10 USD`. Any other mix of currencies is rejected with
/// [`DomainError::CurrencyMismatch`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., cents).
    amount: i64,
    /// ISO currency code (e.g., "EUR", "USD").
    currency: String,
}

impl ValueObject for Money {}

impl Money {
    pub fn new(amount: i64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    /// The distinguished zero value in [`DEFAULT_CURRENCY`].
    pub fn zero() -> Self {
        Self::new(0, DEFAULT_CURRENCY)
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    pub fn checked_add(&self, other: &Money) -> DomainResult<Money> {
        let currency = self.result_currency(other)?;
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or_else(|| DomainError::invariant("money amount overflow"))?;
        Ok(Self::new(amount, currency))
    }

    pub fn checked_sub(&self, other: &Money) -> DomainResult<Money> {
        let currency = self.result_currency(other)?;
        let amount = self
            .amount
            .checked_sub(other.amount)
            .ok_or_else(|| DomainError::invariant("money amount overflow"))?;
        Ok(Self::new(amount, currency))
    }

    pub fn multiply_by(&self, factor: i64) -> DomainResult<Money> {
        let amount = self
            .amount
            .checked_mul(factor)
            .ok_or_else(|| DomainError::invariant("money amount overflow"))?;
        Ok(Self::new(amount, self.currency.clone()))
    }

    /// Compare two amounts, subject to the same currency rule as addition.
    pub fn try_cmp(&self, other: &Money) -> DomainResult<Ordering> {
        self.result_currency(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    pub fn greater_than(&self, other: &Money) -> DomainResult<bool> {
        Ok(self.try_cmp(other)? == Ordering::Greater)
    }

    pub fn less_than(&self, other: &Money) -> DomainResult<bool> {
        Ok(self.try_cmp(other)? == Ordering::Less)
    }

    fn result_currency(&self, other: &Money) -> DomainResult<String> {
        if self.currency == other.currency || other.is_zero() {
            return Ok(self.currency.clone());
        }
        if self.is_zero() {
            return Ok(other.currency.clone());
        }
        Err(DomainError::currency_mismatch(
            self.currency.clone(),
            other.currency.clone(),
        ))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
