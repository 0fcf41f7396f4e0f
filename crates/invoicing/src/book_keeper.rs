//! Invoice issuance.

use tracing::debug;

use salesbook_core::DomainResult;
use salesbook_sales::InvoiceRequest;

use crate::factory::InvoiceFactory;
use crate::invoice::{Invoice, InvoiceLine};
use crate::tax::TaxPolicy;

/// Issues invoices from sales requests.
///
/// Holds the invoice factory; the tax policy is chosen per call.
#[derive(Debug, Clone)]
pub struct BookKeeper<F> {
    factory: F,
}

impl<F: InvoiceFactory> BookKeeper<F> {
    pub fn new(factory: F) -> Self {
        Self { factory }
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Build an invoice with one line per requested item.
    ///
    /// The factory is called exactly once, even for an empty request. The tax
    /// policy is called once per item, in request order, with the item's
    /// product type and net cost; it is never called for an empty request.
    /// The first collaborator error is returned as is.
    pub fn issuance<P>(&self, request: &InvoiceRequest, tax_policy: &P) -> DomainResult<Invoice>
    where
        P: TaxPolicy + ?Sized,
    {
        let mut invoice = self.factory.create(request.client())?;
        debug!(
            invoice_id = %invoice.id_typed(),
            client_id = %request.client().client_id(),
            items = request.len(),
            "issuing invoice"
        );

        for item in request.items() {
            let net = item.total_cost();
            let tax = tax_policy.calculate_tax(item.product_type(), net)?;
            debug!(
                product_id = %item.product().product_id(),
                net = %net,
                tax = %tax.amount(),
                "invoice line taxed"
            );

            invoice.add_line(InvoiceLine::new(
                item.product().clone(),
                item.quantity(),
                net.clone(),
                tax,
            ));
        }

        Ok(invoice)
    }
}
