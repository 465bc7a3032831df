//! Inventory domain module.
//!
//! Products and the in-memory store that owns them, implemented as plain
//! deterministic domain logic (no IO, no presentation, no storage).

pub mod product;
pub mod store;

pub use product::{Product, ProductId};
pub use store::{Inventory, Listing, ProductField, ProductUpdate, UpdateReport};
