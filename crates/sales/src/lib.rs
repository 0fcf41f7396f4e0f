//! Sales module: the requests a client submits for invoicing.
//!
//! This crate contains pure value types (no IO, no HTTP, no storage).

pub mod request;

pub use request::{InvoiceRequest, RequestItem};
