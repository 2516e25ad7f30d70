//! Entity module - Contains the plain-data records persisted by the store.
//! These are the exact shapes written to and read from the storage gateway;
//! they carry no behavior beyond serialization.

pub mod client;
pub mod product;

pub use client::{Client, ProductLine};
pub use product::Product;
