//! Invoice-shell creation.

use tracing::debug;

use salesbook_core::DomainResult;
use salesbook_parties::ClientData;

use crate::invoice::{Invoice, InvoiceId};

/// Produces a fresh, empty invoice for a client. Assigning the invoice id is
/// the factory's job.
pub trait InvoiceFactory {
    fn create(&self, client: &ClientData) -> DomainResult<Invoice>;
}

impl<F> InvoiceFactory for F
where
    F: Fn(&ClientData) -> DomainResult<Invoice>,
{
    fn create(&self, client: &ClientData) -> DomainResult<Invoice> {
        self(client)
    }
}

/// Factory that assigns a new UUIDv7-backed [`InvoiceId`] to every invoice.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultInvoiceFactory;

impl InvoiceFactory for DefaultInvoiceFactory {
    fn create(&self, client: &ClientData) -> DomainResult<Invoice> {
        let id = InvoiceId::generate();
        debug!(invoice_id = %id, client_id = %client.client_id(), "created invoice");
        Ok(Invoice::new(id, client.clone()))
    }
}
