//! `salesbook-core` — shared kernel for the sales and invoicing crates.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::AggregateId;
pub use money::{DEFAULT_CURRENCY, Money};
pub use value_object::ValueObject;
