//! Consignment commands - assign, withdraw, and the balance report.

use crate::{
    core::balance,
    errors::Result,
    store::EntityStore,
};

/// Places a product on consignment with a client and reports the client's
/// new balance.
pub fn assign(
    store: &mut EntityStore,
    client_id: i64,
    product_id: i64,
    quantity: u32,
) -> Result<()> {
    let client = store.assign_product(client_id, product_id, quantity)?;

    println!(
        "Consigned {quantity} unit(s) of product {product_id} to '{}'; balance is now {}.",
        client.name,
        balance::format_amount(balance::total(&client.products))
    );
    Ok(())
}

/// Withdraws a consigned product line from a client.
pub fn withdraw(store: &mut EntityStore, client_id: i64, product_id: i64) -> Result<()> {
    let client = store.withdraw_product(client_id, product_id)?;

    println!(
        "Withdrew product {product_id} from '{}'; balance is now {}.",
        client.name,
        balance::format_amount(balance::total(&client.products))
    );
    Ok(())
}

/// Prints the balance report: one client when an id is given, otherwise the
/// whole collection with a grand total.
pub fn report(store: &EntityStore, client_id: Option<i64>) {
    if let Some(id) = client_id {
        match store.client(id) {
            Some(client) => println!(
                "{}: {}",
                client.name,
                balance::format_amount(balance::total(&client.products))
            ),
            None => println!("Client {id} not found."),
        }
        return;
    }

    if store.clients().is_empty() {
        println!("No clients yet.");
        return;
    }

    println!("{:<24} {:>12}", "NAME", "BALANCE");
    let mut grand_total = 0.0;
    for client in store.clients() {
        let total = balance::total(&client.products);
        grand_total += total;
        println!("{:<24} {:>12}", client.name, balance::format_amount(total));
    }
    println!("{:<24} {:>12}", "TOTAL", balance::format_amount(grand_total));
}
