use serde::{Deserialize, Serialize};

use salesbook_core::{DomainError, DomainResult, Money, ValueObject};
use salesbook_parties::ClientData;
use salesbook_products::{ProductData, ProductType};

/// One requested purchase: product, quantity and the pre-computed net cost of the line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestItem {
    product: ProductData,
    quantity: u32,
    total_cost: Money,
}

impl ValueObject for RequestItem {}

impl RequestItem {
    pub fn new(product: ProductData, quantity: u32, total_cost: Money) -> DomainResult<Self> {
        if quantity == 0 {
            return Err(DomainError::validation(
                "request item quantity must be positive",
            ));
        }
        Ok(Self {
            product,
            quantity,
            total_cost,
        })
    }

    pub fn product(&self) -> &ProductData {
        &self.product
    }

    pub fn product_type(&self) -> ProductType {
        self.product.product_type()
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Net cost for the whole line (not per unit).
    pub fn total_cost(&self) -> &Money {
        &self.total_cost
    }
}

/// Sales request: a client plus the ordered items to invoice.
///
/// Items keep the order in which they were added; duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceRequest {
    client: ClientData,
    items: Vec<RequestItem>,
}

impl InvoiceRequest {
    pub fn new(client: ClientData) -> Self {
        Self {
            client,
            items: Vec::new(),
        }
    }

    pub fn add(&mut self, item: RequestItem) {
        self.items.push(item);
    }

    pub fn client(&self) -> &ClientData {
        &self.client
    }

    pub fn items(&self) -> &[RequestItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
