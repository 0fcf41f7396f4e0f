use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use salesbook_core::{AggregateId, DomainError, DomainResult, Money, ValueObject};

/// Product identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub AggregateId);

impl ProductId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }

    pub fn generate() -> Self {
        Self(AggregateId::new())
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Product category. Tax policies are keyed on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Drug,
    Food,
    Standard,
}

impl ProductType {
    pub const ALL: [ProductType; 3] = [ProductType::Drug, ProductType::Food, ProductType::Standard];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Drug => "drug",
            ProductType::Food => "food",
            ProductType::Standard => "standard",
        }
    }
}

impl core::fmt::Display for ProductType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Product snapshot taken when the product was put on a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductData {
    product_id: ProductId,
    /// Catalog price at snapshot time; issuance works from the request's net cost instead.
    price: Money,
    name: String,
    product_type: ProductType,
    snapshot_date: Option<DateTime<Utc>>,
}

impl ValueObject for ProductData {}

impl ProductData {
    pub fn builder() -> ProductDataBuilder {
        ProductDataBuilder::new()
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn price(&self) -> &Money {
        &self.price
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn product_type(&self) -> ProductType {
        self.product_type
    }

    pub fn snapshot_date(&self) -> Option<DateTime<Utc>> {
        self.snapshot_date
    }
}

/// Builder for [`ProductData`].
///
/// Id, name and type are required. Price defaults to [`Money::zero`], the
/// snapshot date to none.
#[derive(Debug, Clone, Default)]
pub struct ProductDataBuilder {
    product_id: Option<ProductId>,
    price: Option<Money>,
    name: Option<String>,
    product_type: Option<ProductType>,
    snapshot_date: Option<DateTime<Utc>>,
}

impl ProductDataBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_product_id(mut self, product_id: ProductId) -> Self {
        self.product_id = Some(product_id);
        self
    }

    pub fn with_price(mut self, price: Money) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_product_type(mut self, product_type: ProductType) -> Self {
        self.product_type = Some(product_type);
        self
    }

    pub fn with_snapshot_date(mut self, snapshot_date: Option<DateTime<Utc>>) -> Self {
        self.snapshot_date = snapshot_date;
        self
    }

    pub fn build(self) -> DomainResult<ProductData> {
        let product_id = self
            .product_id
            .ok_or_else(|| DomainError::validation("product id is required"))?;
        let name = self
            .name
            .ok_or_else(|| DomainError::validation("product name is required"))?;
        if name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }
        let product_type = self
            .product_type
            .ok_or_else(|| DomainError::validation("product type is required"))?;

        Ok(ProductData {
            product_id,
            price: self.price.unwrap_or_default(),
            name,
            product_type,
            snapshot_date: self.snapshot_date,
        })
    }
}
