//! Shared test utilities for `Consigna`.
//!
//! This module provides common helper functions for building entities,
//! drafts, and stores with sensible defaults.

use crate::{
    entities::{Client, Product, ProductLine},
    storage::MemoryStorage,
    store::{ClientDraft, EntityStore, ProductDraft},
};

/// Creates a store over a fresh in-memory gateway. This is the standard
/// setup for store-level tests.
pub fn memory_store() -> EntityStore {
    EntityStore::open(Box::new(MemoryStorage::new()))
}

/// Creates a client record with a derived code (`C<id>`) and placeholder
/// contact fields. Use [`with_lines`] to attach consignments.
pub fn sample_client(id: i64, name: &str) -> Client {
    Client {
        id,
        name: name.to_string(),
        code: format!("C{id}"),
        address: "Calle 1 #2-34".to_string(),
        phone: "555-0100".to_string(),
        products: Vec::new(),
    }
}

/// Creates a product record with a derived code (`P<id>`) and an inventory
/// of 5.
pub fn sample_product(id: i64, name: &str, price: f64) -> Product {
    Product {
        id,
        code: format!("P{id}"),
        name: name.to_string(),
        price,
        inventory: 5,
    }
}

/// Creates a single product-line snapshot.
pub fn line(id: i64, name: &str, price: f64, quantity: u32) -> ProductLine {
    ProductLine {
        id,
        name: name.to_string(),
        price,
        quantity,
    }
}

/// Attaches the given `(id, name, price, quantity)` lines to a client.
pub fn with_lines(mut client: Client, lines: &[(i64, &str, f64, u32)]) -> Client {
    client.products = lines
        .iter()
        .map(|&(id, name, price, quantity)| line(id, name, price, quantity))
        .collect();
    client
}

/// Creates a client draft with placeholder contact fields and no lines.
pub fn client_draft(name: &str, code: &str) -> ClientDraft {
    ClientDraft {
        name: name.to_string(),
        code: code.to_string(),
        address: "Calle 1 #2-34".to_string(),
        phone: "555-0100".to_string(),
        products: Vec::new(),
    }
}

/// Creates a product draft with an empty code and an inventory of 5.
pub fn product_draft(name: &str, price: f64) -> ProductDraft {
    ProductDraft {
        code: String::new(),
        name: name.to_string(),
        price,
        inventory: 5,
    }
}
