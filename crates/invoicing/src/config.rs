//! Configuration for the table-driven tax policy.

use tracing::{info, warn};

use salesbook_core::DomainResult;

use crate::rate_table::{RateTablePolicy, TaxRates};

/// Environment variable holding the tax rate table as JSON.
pub const TAX_RATES_ENV: &str = "SALESBOOK_TAX_RATES";

/// Invoicing configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvoicingConfig {
    /// Rates used by [`InvoicingConfig::tax_policy`].
    pub tax_rates: TaxRates,
}

impl InvoicingConfig {
    pub fn with_tax_rates(mut self, tax_rates: TaxRates) -> Self {
        self.tax_rates = tax_rates;
        self
    }

    /// Load from the process environment (see [`TAX_RATES_ENV`]).
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` to resolve variables.
    ///
    /// A missing table yields an empty one (every policy call will then fail);
    /// a malformed table is an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DomainResult<Self> {
        let tax_rates = match lookup(TAX_RATES_ENV) {
            Some(json) => {
                let rates = TaxRates::from_json(&json)?;
                info!("loaded tax rates from {}", TAX_RATES_ENV);
                rates
            }
            None => {
                warn!("{} not set; no tax rates configured", TAX_RATES_ENV);
                TaxRates::default()
            }
        };
        Ok(Self { tax_rates })
    }

    pub fn tax_policy(&self) -> RateTablePolicy {
        RateTablePolicy::new(self.tax_rates.clone())
    }
}
