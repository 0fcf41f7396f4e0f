//! Products module: catalog descriptors as they appear on requests and invoices.
//!
//! This crate contains pure value types (no IO, no storage).

pub mod product;

pub use product::{ProductData, ProductDataBuilder, ProductId, ProductType};
