//! Text search and filter composition over the collections.
//!
//! Both collections share the same two-stage query: a case-insensitive
//! substring match against `name` and `code`, then an OR-composition of the
//! active filter predicates. Zero active filters means the filter stage
//! passes everything; one or more means a record passes if ANY active
//! filter matches. Results keep the input order and borrow from the source
//! slice, which is never mutated.

use crate::{
    core::balance,
    entities::{Client, Product},
    errors::Error,
};
use std::str::FromStr;

/// Filter predicates over clients.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClientFilter {
    /// Clients whose balance is greater than zero
    HasBalance,
    /// Clients whose balance is exactly zero
    NoBalance,
}

impl ClientFilter {
    /// Whether the client satisfies this predicate.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn matches(self, client: &Client) -> bool {
        match self {
            Self::HasBalance => balance::total(&client.products) > 0.0,
            Self::NoBalance => balance::total(&client.products) == 0.0,
        }
    }
}

impl FromStr for ClientFilter {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "hasBalance" | "has-balance" => Ok(Self::HasBalance),
            "noBalance" | "no-balance" => Ok(Self::NoBalance),
            other => Err(Error::Config {
                message: format!("Unknown client filter: {other}"),
            }),
        }
    }
}

/// Filter predicates over products.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProductFilter {
    /// Products with at least one unit in stock
    InStock,
    /// Products with no stock on hand
    OutOfStock,
}

impl ProductFilter {
    /// Whether the product satisfies this predicate.
    #[must_use]
    pub fn matches(self, product: &Product) -> bool {
        match self {
            Self::InStock => product.inventory > 0,
            Self::OutOfStock => product.inventory == 0,
        }
    }
}

impl FromStr for ProductFilter {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "inStock" | "in-stock" => Ok(Self::InStock),
            "outOfStock" | "out-of-stock" => Ok(Self::OutOfStock),
            other => Err(Error::Config {
                message: format!("Unknown product filter: {other}"),
            }),
        }
    }
}

/// Selects the clients matching `term` and any of the active `filters`,
/// preserving input order.
#[must_use]
pub fn search_clients<'a>(
    clients: &'a [Client],
    term: &str,
    filters: &[ClientFilter],
) -> Vec<&'a Client> {
    let needle = term.to_lowercase();
    clients
        .iter()
        .filter(|client| matches_term(&client.name, &client.code, &needle))
        .filter(|client| filters.is_empty() || filters.iter().any(|f| f.matches(client)))
        .collect()
}

/// Selects the products matching `term` and any of the active `filters`,
/// preserving input order.
#[must_use]
pub fn search_products<'a>(
    products: &'a [Product],
    term: &str,
    filters: &[ProductFilter],
) -> Vec<&'a Product> {
    let needle = term.to_lowercase();
    products
        .iter()
        .filter(|product| matches_term(&product.name, &product.code, &needle))
        .filter(|product| filters.is_empty() || filters.iter().any(|f| f.matches(product)))
        .collect()
}

/// Case-insensitive substring match against either field. An empty needle
/// matches everything.
fn matches_term(name: &str, code: &str, needle: &str) -> bool {
    name.to_lowercase().contains(needle) || code.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{sample_client, sample_product, with_lines};

    fn clients_fixture() -> Vec<Client> {
        vec![
            with_lines(sample_client(1, "Ana"), &[(10, "Food", 10.0, 3)]),
            sample_client(2, "Luis"),
            with_lines(sample_client(3, "Marta"), &[(11, "Gravel", 4.5, 2)]),
        ]
    }

    #[test]
    fn test_empty_term_and_no_filters_is_identity() {
        let clients = clients_fixture();
        let result = search_clients(&clients, "", &[]);
        assert_eq!(result.len(), clients.len());
        for (found, original) in result.iter().zip(&clients) {
            assert_eq!(*found, original);
        }
    }

    #[test]
    fn test_term_matches_name_case_insensitive() {
        let clients = clients_fixture();
        let result = search_clients(&clients, "aNa", &[]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Ana");
    }

    #[test]
    fn test_term_matches_code() {
        // sample codes are "C1", "C2", "C3"
        let clients = clients_fixture();
        let result = search_clients(&clients, "c2", &[]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Luis");
    }

    #[test]
    fn test_has_balance_selects_exactly_nonzero_totals() {
        let clients = clients_fixture();
        let result = search_clients(&clients, "", &[ClientFilter::HasBalance]);
        let names: Vec<_> = result.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Ana", "Marta"]);
    }

    #[test]
    fn test_filter_partition_or_covers_everything() {
        let clients = clients_fixture();
        let result = search_clients(
            &clients,
            "",
            &[ClientFilter::HasBalance, ClientFilter::NoBalance],
        );
        assert_eq!(result.len(), clients.len());
    }

    #[test]
    fn test_both_stages_must_pass() {
        let clients = clients_fixture();
        // "mar" matches only Marta, and her balance fails the NoBalance filter
        let result = search_clients(&clients, "mar", &[ClientFilter::NoBalance]);
        assert!(result.is_empty());
    }

    #[test]
    fn test_result_order_follows_input_order() {
        let clients = clients_fixture();
        let result = search_clients(&clients, "a", &[]);
        let names: Vec<_> = result.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Ana", "Marta"]);
    }

    #[test]
    fn test_product_stock_filters() {
        let products = vec![
            sample_product(1, "Food", 10.0),
            Product {
                inventory: 0,
                ..sample_product(2, "Net", 7.0)
            },
        ];

        let in_stock = search_products(&products, "", &[ProductFilter::InStock]);
        assert_eq!(in_stock.len(), 1);
        assert_eq!(in_stock[0].name, "Food");

        let out_of_stock = search_products(&products, "", &[ProductFilter::OutOfStock]);
        assert_eq!(out_of_stock.len(), 1);
        assert_eq!(out_of_stock[0].name, "Net");

        let either = search_products(
            &products,
            "",
            &[ProductFilter::InStock, ProductFilter::OutOfStock],
        );
        assert_eq!(either.len(), 2);
    }

    #[test]
    fn test_filter_tags_parse_both_spellings() {
        assert_eq!(
            "hasBalance".parse::<ClientFilter>().unwrap(),
            ClientFilter::HasBalance
        );
        assert_eq!(
            "no-balance".parse::<ClientFilter>().unwrap(),
            ClientFilter::NoBalance
        );
        assert_eq!(
            "inStock".parse::<ProductFilter>().unwrap(),
            ProductFilter::InStock
        );
        assert_eq!(
            "out-of-stock".parse::<ProductFilter>().unwrap(),
            ProductFilter::OutOfStock
        );
        assert!("withBalance".parse::<ClientFilter>().is_err());
    }
}
