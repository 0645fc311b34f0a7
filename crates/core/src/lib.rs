//! `shopkeep-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no console output).

pub mod aggregate;
pub mod error;
pub mod id;
pub mod value_object;

pub use aggregate::Aggregate;
pub use error::DomainError;
pub use id::{ItemId, OrderId};
pub use value_object::ValueObject;
