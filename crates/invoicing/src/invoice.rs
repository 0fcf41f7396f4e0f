use serde::{Deserialize, Serialize};

use salesbook_core::{AggregateId, DomainResult, Entity, Money, ValueObject};
use salesbook_parties::ClientData;
use salesbook_products::ProductData;

use crate::tax::Tax;

/// Invoice identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceId(pub AggregateId);

impl InvoiceId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }

    pub fn generate() -> Self {
        Self(AggregateId::new())
    }
}

impl core::fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Finalized invoice entry derived from one requested item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceLine {
    product: ProductData,
    quantity: u32,
    net: Money,
    tax: Tax,
}

impl ValueObject for InvoiceLine {}

impl InvoiceLine {
    pub fn new(product: ProductData, quantity: u32, net: Money, tax: Tax) -> Self {
        Self {
            product,
            quantity,
            net,
            tax,
        }
    }

    pub fn product(&self) -> &ProductData {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn net(&self) -> &Money {
        &self.net
    }

    pub fn tax(&self) -> &Tax {
        &self.tax
    }

    /// Net plus tax.
    pub fn gross(&self) -> DomainResult<Money> {
        self.net.checked_add(self.tax.amount())
    }
}

/// Invoice for one client: an ordered, append-only list of lines.
///
/// Equality follows the invoice id only. Appending never fails; the `net` and
/// `gross` totals are summed on request and fail only when the lines mix
/// currencies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    id: InvoiceId,
    client: ClientData,
    lines: Vec<InvoiceLine>,
}

impl Invoice {
    /// A fresh invoice with no lines.
    pub fn new(id: InvoiceId, client: ClientData) -> Self {
        Self {
            id,
            client,
            lines: Vec::new(),
        }
    }

    pub fn id_typed(&self) -> InvoiceId {
        self.id
    }

    pub fn client(&self) -> &ClientData {
        &self.client
    }

    pub fn lines(&self) -> &[InvoiceLine] {
        &self.lines
    }

    pub fn add_line(&mut self, line: InvoiceLine) {
        self.lines.push(line);
    }

    /// Sum of line nets; [`Money::zero`] for an invoice without lines.
    pub fn net(&self) -> DomainResult<Money> {
        self.lines
            .iter()
            .try_fold(Money::zero(), |total, line| total.checked_add(line.net()))
    }

    /// Sum of line nets plus taxes; [`Money::zero`] for an invoice without lines.
    pub fn gross(&self) -> DomainResult<Money> {
        self.lines
            .iter()
            .try_fold(Money::zero(), |total, line| total.checked_add(&line.gross()?))
    }
}

impl Entity for Invoice {
    type Id = InvoiceId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl PartialEq for Invoice {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Invoice {}
