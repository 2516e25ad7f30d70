//! Product commands - add, list, show, update, delete.

use crate::{
    core::{
        balance,
        search::{self, ProductFilter},
    },
    errors::Result,
    store::{EntityStore, ProductDraft},
};

/// Adds a new product and reports its assigned id.
pub fn add(
    store: &mut EntityStore,
    code: String,
    name: String,
    price: f64,
    inventory: u32,
) -> Result<()> {
    let product = store.add_product(ProductDraft {
        code,
        name,
        price,
        inventory,
    })?;

    println!("Added product '{}' with id {}.", product.name, product.id);
    Ok(())
}

/// Prints the product table for the given search term and filters.
pub fn list(store: &EntityStore, term: &str, filters: &[ProductFilter]) {
    let products = search::search_products(store.products(), term, filters);
    if products.is_empty() {
        println!("No products matched.");
        return;
    }

    println!(
        "{:<15} {:<10} {:<24} {:>10} {:>10} {:>8}",
        "ID", "CODE", "NAME", "PRICE", "INVENTORY", "CLIENTS"
    );
    for product in &products {
        let holders = store
            .clients()
            .iter()
            .filter(|client| client.products.iter().any(|line| line.id == product.id))
            .count();

        println!(
            "{:<15} {:<10} {:<24} {:>10} {:>10} {:>8}",
            product.id,
            product.code,
            product.name,
            balance::format_amount(product.price),
            product.inventory,
            holders
        );
    }
}

/// Prints one product in detail, including the clients currently holding it
/// and the quantity each holds.
pub fn show(store: &EntityStore, id: i64) {
    let Some(product) = store.product(id) else {
        println!("Product {id} not found.");
        return;
    };

    println!("Code:      {}", product.code);
    println!("Name:      {}", product.name);
    println!("Price:     {}", balance::format_amount(product.price));
    println!("Inventory: {}", product.inventory);

    let holders: Vec<_> = store
        .clients()
        .iter()
        .filter_map(|client| {
            client
                .products
                .iter()
                .find(|line| line.id == id)
                .map(|line| (client, line.quantity))
        })
        .collect();

    if holders.is_empty() {
        println!("No clients hold this product.");
    } else {
        println!("Clients holding this product:");
        for (client, quantity) in holders {
            println!("  {} - quantity {quantity}", client.name);
        }
    }
}

/// Updates a product; omitted fields keep their current values. Existing
/// consignment lines keep their snapshots.
pub fn update(
    store: &mut EntityStore,
    id: i64,
    code: Option<String>,
    name: Option<String>,
    price: Option<f64>,
    inventory: Option<u32>,
) -> Result<()> {
    let Some(existing) = store.product(id).cloned() else {
        println!("Product {id} not found; nothing updated.");
        return Ok(());
    };

    let draft = ProductDraft {
        code: code.unwrap_or(existing.code),
        name: name.unwrap_or(existing.name),
        price: price.unwrap_or(existing.price),
        inventory: inventory.unwrap_or(existing.inventory),
    };

    if let Some(product) = store.update_product(id, draft)? {
        println!("Updated product '{}' ({}).", product.name, product.id);
    }
    Ok(())
}

/// Deletes a product; clients keep their historical consignment lines, and
/// the handler reports how many of them do.
pub fn delete(store: &mut EntityStore, id: i64) -> Result<()> {
    let holders = store
        .clients()
        .iter()
        .filter(|client| client.products.iter().any(|line| line.id == id))
        .count();

    if store.delete_product(id)? {
        println!("Deleted product {id}.");
        if holders > 0 {
            println!("Note: {holders} client(s) keep historical consignment lines for it.");
        }
    } else {
        println!("Product {id} not found; nothing deleted.");
    }
    Ok(())
}
