//! Tax determination and the tax policy capability.

use serde::{Deserialize, Serialize};

use salesbook_core::{DomainResult, Money, ValueObject};
use salesbook_products::ProductType;

/// Result of a tax policy call: an amount plus a human-readable label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tax {
    amount: Money,
    description: String,
}

impl ValueObject for Tax {}

impl Tax {
    pub fn new(amount: Money, description: impl Into<String>) -> Self {
        Self {
            amount,
            description: description.into(),
        }
    }

    pub fn amount(&self) -> &Money {
        &self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Decides the tax for one invoice line.
///
/// Called once per requested item, in request order, with the item's product
/// type and net cost. Implementations may fail; the error reaches the
/// issuance caller unchanged.
///
/// Closures with the matching signature implement this trait:
///
/// ```
/// use salesbook_core::{DomainResult, Money};
/// use salesbook_invoicing::{Tax, TaxPolicy};
/// use salesbook_products::ProductType;
///
/// let exempt = |_: ProductType, net: &Money| -> DomainResult<Tax> {
///     Ok(Tax::new(net.multiply_by(0)?, "exempt"))
/// };
///
/// let tax = exempt.calculate_tax(ProductType::Food, &Money::new(250, "PLN")).unwrap();
/// assert_eq!(tax.amount(), &Money::new(0, "PLN"));
/// assert_eq!(tax.description(), "exempt");
/// ```
pub trait TaxPolicy {
    fn calculate_tax(&self, product_type: ProductType, net: &Money) -> DomainResult<Tax>;
}

impl<F> TaxPolicy for F
where
    F: Fn(ProductType, &Money) -> DomainResult<Tax>,
{
    fn calculate_tax(&self, product_type: ProductType, net: &Money) -> DomainResult<Tax> {
        self(product_type, net)
    }
}
