//! Export formatting - serializes filtered views to delimited text.
//!
//! The format matches the documents this system has always produced: header
//! fields joined with `,`, one row per record, rows joined with newlines.
//! Field values pass through verbatim — embedded commas or newlines are NOT
//! quoted or escaped, so a product named `"a,b"` lands in the output as two
//! apparent columns. Existing exports depend on this shape; switching to a
//! quoting-aware writer would change them.

use crate::{
    core::balance,
    entities::{Client, Product},
};

/// Header row for the client export (`clientes.csv`).
pub const CLIENT_HEADERS: [&str; 4] = ["Nombre", "Código", "Saldo Total", "Productos"];

/// Header row for the product export (`productos.csv`).
pub const PRODUCT_HEADERS: [&str; 5] = ["Código", "Nombre", "Precio", "Inventario", "Clientes"];

/// Joins headers and rows into a delimited document. No escaping is applied
/// to any field.
#[must_use]
pub fn to_delimited_text(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(headers.join(","));
    lines.extend(rows.iter().map(|row| row.join(",")));
    lines.join("\n")
}

/// Renders the client export: name, code, balance to two decimals, and the
/// consigned lines as a `; `-joined list of `name (quantity)`.
#[must_use]
pub fn export_clients(clients: &[&Client]) -> String {
    let rows: Vec<Vec<String>> = clients
        .iter()
        .map(|client| {
            vec![
                client.name.clone(),
                client.code.clone(),
                format!("{:.2}", balance::total(&client.products)),
                client
                    .products
                    .iter()
                    .map(|line| format!("{} ({})", line.name, line.quantity))
                    .collect::<Vec<_>>()
                    .join("; "),
            ]
        })
        .collect();

    to_delimited_text(&CLIENT_HEADERS, &rows)
}

/// Renders the product export: code, name, price to two decimals, inventory,
/// and the names of clients currently holding the product as a `; `-joined
/// list. Holding is by product id, so snapshot lines for a since-deleted
/// product still count their holders.
#[must_use]
pub fn export_products(products: &[&Product], clients: &[Client]) -> String {
    let rows: Vec<Vec<String>> = products
        .iter()
        .map(|product| {
            vec![
                product.code.clone(),
                product.name.clone(),
                format!("{:.2}", product.price),
                product.inventory.to_string(),
                clients
                    .iter()
                    .filter(|client| client.products.iter().any(|line| line.id == product.id))
                    .map(|client| client.name.as_str())
                    .collect::<Vec<_>>()
                    .join("; "),
            ]
        })
        .collect();

    to_delimited_text(&PRODUCT_HEADERS, &rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{sample_client, sample_product, with_lines};

    #[test]
    fn test_headers_only_for_empty_view() {
        assert_eq!(export_clients(&[]), "Nombre,Código,Saldo Total,Productos");
        assert_eq!(
            export_products(&[], &[]),
            "Código,Nombre,Precio,Inventario,Clientes"
        );
    }

    #[test]
    fn test_client_row_shape() {
        let ana = with_lines(
            sample_client(1, "Ana"),
            &[(10, "Food", 10.0, 3), (11, "Gravel", 4.5, 2)],
        );
        let output = export_clients(&[&ana]);

        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("Nombre,Código,Saldo Total,Productos"));
        assert_eq!(lines.next(), Some("Ana,C1,39.00,Food (3); Gravel (2)"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_embedded_comma_is_not_escaped() {
        let ana = with_lines(sample_client(1, "Ana"), &[(10, "Food, dry", 10.0, 3)]);
        let output = export_clients(&[&ana]);

        // The comma inside the product name lands in the output verbatim
        assert!(output.ends_with("Ana,C1,30.00,Food, dry (3)"));
    }

    #[test]
    fn test_product_rows_list_holding_clients() {
        let food = sample_product(10, "Food", 10.0);
        let net = Product {
            inventory: 0,
            ..sample_product(11, "Net", 10.0)
        };
        let clients = vec![
            with_lines(sample_client(1, "Ana"), &[(10, "Food", 10.0, 3)]),
            with_lines(sample_client(2, "Luis"), &[(10, "Food", 10.0, 1)]),
            sample_client(3, "Marta"),
        ];

        let output = export_products(&[&food, &net], &clients);
        let rows: Vec<&str> = output.lines().collect();
        assert_eq!(rows[1], "P10,Food,10.00,5,Ana; Luis");
        assert_eq!(rows[2], "P11,Net,10.00,0,");
    }

    #[test]
    fn test_balance_formatted_to_two_decimals() {
        let ana = with_lines(sample_client(1, "Ana"), &[(10, "Gravel", 4.5, 1)]);
        let output = export_clients(&[&ana]);
        assert!(output.contains(",4.50,"));
    }
}
