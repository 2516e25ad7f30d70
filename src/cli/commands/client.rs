//! Client commands - add, list, show, update, delete.

use crate::{
    core::{
        balance,
        search::{self, ClientFilter},
    },
    errors::Result,
    store::{ClientDraft, EntityStore},
};

/// Adds a new client and reports its assigned id.
pub fn add(
    store: &mut EntityStore,
    name: String,
    code: String,
    address: String,
    phone: String,
) -> Result<()> {
    let client = store.add_client(ClientDraft {
        name,
        code,
        address,
        phone,
        products: Vec::new(),
    })?;

    println!("Added client '{}' with id {}.", client.name, client.id);
    Ok(())
}

/// Prints the client table for the given search term and filters.
pub fn list(store: &EntityStore, term: &str, filters: &[ClientFilter]) {
    let clients = search::search_clients(store.clients(), term, filters);
    if clients.is_empty() {
        println!("No clients matched.");
        return;
    }

    println!(
        "{:<15} {:<24} {:<10} {:>12} {:>9}",
        "ID", "NAME", "CODE", "BALANCE", "PRODUCTS"
    );
    for client in &clients {
        println!(
            "{:<15} {:<24} {:<10} {:>12} {:>9}",
            client.id,
            client.name,
            client.code,
            balance::format_amount(balance::total(&client.products)),
            client.products.len()
        );
    }
}

/// Prints one client in detail, including its consigned lines.
pub fn show(store: &EntityStore, id: i64) {
    let Some(client) = store.client(id) else {
        println!("Client {id} not found.");
        return;
    };

    println!("Name:    {}", client.name);
    println!("Code:    {}", client.code);
    println!("Address: {}", client.address);
    println!("Phone:   {}", client.phone);
    println!(
        "Balance: {}",
        balance::format_amount(balance::total(&client.products))
    );

    if client.products.is_empty() {
        println!("No products on consignment.");
    } else {
        println!("Products on consignment:");
        for line in &client.products {
            println!(
                "  {} - quantity {} at {}",
                line.name,
                line.quantity,
                balance::format_amount(line.price)
            );
        }
    }
}

/// Updates a client; omitted fields keep their current values, and the
/// consigned line sequence is always carried over unchanged.
pub fn update(
    store: &mut EntityStore,
    id: i64,
    name: Option<String>,
    code: Option<String>,
    address: Option<String>,
    phone: Option<String>,
) -> Result<()> {
    let Some(existing) = store.client(id).cloned() else {
        println!("Client {id} not found; nothing updated.");
        return Ok(());
    };

    let draft = ClientDraft {
        name: name.unwrap_or(existing.name),
        code: code.unwrap_or(existing.code),
        address: address.unwrap_or(existing.address),
        phone: phone.unwrap_or(existing.phone),
        products: existing.products,
    };

    if let Some(client) = store.update_client(id, draft)? {
        println!("Updated client '{}' ({}).", client.name, client.id);
    }
    Ok(())
}

/// Deletes a client; a missing id is reported as a no-op.
pub fn delete(store: &mut EntityStore, id: i64) -> Result<()> {
    if store.delete_client(id)? {
        println!("Deleted client {id}.");
    } else {
        println!("Client {id} not found; nothing deleted.");
    }
    Ok(())
}
