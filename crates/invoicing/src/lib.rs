//! Invoicing domain module.
//!
//! Turns a sales request into a line-itemized invoice. Tax determination and
//! invoice-shell creation are delegated to caller-supplied collaborators
//! ([`TaxPolicy`], [`InvoiceFactory`]); this crate only sequences them.
//! Pure domain logic: no IO, no HTTP, no storage.

pub mod book_keeper;
pub mod config;
pub mod factory;
pub mod invoice;
pub mod rate_table;
pub mod tax;

pub use book_keeper::BookKeeper;
pub use config::{InvoicingConfig, TAX_RATES_ENV};
pub use factory::{DefaultInvoiceFactory, InvoiceFactory};
pub use invoice::{Invoice, InvoiceId, InvoiceLine};
pub use rate_table::{RateTablePolicy, TaxRate, TaxRates};
pub use tax::{Tax, TaxPolicy};
