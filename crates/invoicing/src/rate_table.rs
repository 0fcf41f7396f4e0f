//! Table-driven tax policy.
//!
//! The rates are supplied by the caller (typically through
//! [`crate::InvoicingConfig`]); no rates are built in.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use salesbook_core::{DomainError, DomainResult, Money};
use salesbook_products::ProductType;

use crate::tax::{Tax, TaxPolicy};

const BASIS_POINTS_PER_UNIT: i128 = 10_000;

/// A percentage rate in basis points (2300 = 23%) plus the label printed on the line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate {
    pub basis_points: u32,
    pub label: String,
}

impl TaxRate {
    pub fn new(basis_points: u32, label: impl Into<String>) -> Self {
        Self {
            basis_points,
            label: label.into(),
        }
    }

    /// Tax on `net`, rounded half away from zero to the smallest currency unit.
    pub fn apply(&self, net: &Money) -> DomainResult<Money> {
        let scaled = i128::from(net.amount()) * i128::from(self.basis_points);
        let half = BASIS_POINTS_PER_UNIT / 2;
        let rounded = if scaled >= 0 {
            (scaled + half) / BASIS_POINTS_PER_UNIT
        } else {
            (scaled - half) / BASIS_POINTS_PER_UNIT
        };
        let amount =
            i64::try_from(rounded).map_err(|_| DomainError::invariant("tax amount overflow"))?;
        Ok(Money::new(amount, net.currency()))
    }
}

/// Rates per product type.
///
/// Serialized as a JSON object keyed by lowercase product type:
///
/// ```json
/// { "standard": { "basis_points": 2300, "label": "23%" } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxRates(BTreeMap<ProductType, TaxRate>);

impl TaxRates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rate(mut self, product_type: ProductType, rate: TaxRate) -> Self {
        self.0.insert(product_type, rate);
        self
    }

    pub fn from_json(json: &str) -> DomainResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| DomainError::validation(format!("invalid tax rates: {e}")))
    }

    pub fn get(&self, product_type: ProductType) -> Option<&TaxRate> {
        self.0.get(&product_type)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// [`TaxPolicy`] that looks the rate up in a [`TaxRates`] table.
///
/// A product type without a configured rate is a validation error.
#[derive(Debug, Clone, Default)]
pub struct RateTablePolicy {
    rates: TaxRates,
}

impl RateTablePolicy {
    pub fn new(rates: TaxRates) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &TaxRates {
        &self.rates
    }
}

impl TaxPolicy for RateTablePolicy {
    fn calculate_tax(&self, product_type: ProductType, net: &Money) -> DomainResult<Tax> {
        let rate = self.rates.get(product_type).ok_or_else(|| {
            DomainError::validation(format!("no tax rate configured for {product_type}"))
        })?;
        Ok(Tax::new(rate.apply(net)?, rate.label.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rates() -> TaxRates {
        TaxRates::new()
            .with_rate(ProductType::Drug, TaxRate::new(500, "5% (D)"))
            .with_rate(ProductType::Food, TaxRate::new(700, "7% (F)"))
            .with_rate(ProductType::Standard, TaxRate::new(2300, "23%"))
    }

    #[test]
    fn applies_rate_of_product_type() {
        let policy = RateTablePolicy::new(rates());

        let tax = policy
            .calculate_tax(ProductType::Standard, &Money::new(10_000, "PLN"))
            .unwrap();
        assert_eq!(tax, Tax::new(Money::new(2_300, "PLN"), "23%"));

        let tax = policy
            .calculate_tax(ProductType::Drug, &Money::new(10_000, "PLN"))
            .unwrap();
        assert_eq!(tax, Tax::new(Money::new(500, "PLN"), "5% (D)"));
    }

    #[test]
    fn rounds_half_away_from_zero() {
        let rate = TaxRate::new(500, "5%");
        // 5% of 10 = 0.5 -> 1, 5% of 9 = 0.45 -> 0
        assert_eq!(rate.apply(&Money::new(10, "EUR")).unwrap(), Money::new(1, "EUR"));
        assert_eq!(rate.apply(&Money::new(9, "EUR")).unwrap(), Money::new(0, "EUR"));
        assert_eq!(rate.apply(&Money::new(-10, "EUR")).unwrap(), Money::new(-1, "EUR"));
    }

    #[test]
    fn missing_rate_is_rejected() {
        let policy = RateTablePolicy::new(TaxRates::new());
        let err = policy
            .calculate_tax(ProductType::Food, &Money::new(1, "EUR"))
            .unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("no tax rate configured for food") => {}
            _ => panic!("Expected Validation error for missing rate"),
        }
    }

    #[test]
    fn overflowing_tax_is_rejected() {
        let rate = TaxRate::new(u32::MAX, "absurd");
        assert!(rate.apply(&Money::new(i64::MAX, "EUR")).is_err());
    }

    #[test]
    fn parses_json_table() {
        let parsed = TaxRates::from_json(
            r#"{
                "drug": { "basis_points": 500, "label": "5% (D)" },
                "food": { "basis_points": 700, "label": "7% (F)" },
                "standard": { "basis_points": 2300, "label": "23%" }
            }"#,
        )
        .unwrap();
        assert_eq!(parsed, rates());
    }

    #[test]
    fn malformed_json_is_a_validation_error() {
        let err = TaxRates::from_json(r#"{ "luxury": { "basis_points": 1 } }"#).unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.starts_with("invalid tax rates") => {}
            _ => panic!("Expected Validation error for malformed rates"),
        }
    }
}
