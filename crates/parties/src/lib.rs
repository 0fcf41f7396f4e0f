//! Parties module: descriptive data about the clients that place sales requests.
//!
//! Only the snapshot carried on requests and invoices lives here; client
//! registration and lifecycle belong to other systems.

pub mod client;

pub use client::{ClientData, ClientId};
