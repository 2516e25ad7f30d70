//! CLI layer - argument parsing and command dispatch.
//!
//! This module defines the full command tree and routes parsed commands to
//! the handlers in [`commands`]. Handlers talk to the entity store and the
//! core modules; all terminal output happens here in the CLI layer, keeping
//! `core` and `store` framework-agnostic.

/// Command handler implementations (client, product, consign, export)
pub mod commands;

use crate::{
    core::search::{ClientFilter, ProductFilter},
    errors::Result,
    store::EntityStore,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level argument parser.
#[derive(Debug, Parser)]
#[command(name = "consigna", version, about = "Local-first consignment inventory tracker")]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage the client collection
    Client {
        /// Action on the client collection
        #[command(subcommand)]
        action: ClientAction,
    },
    /// Manage the product collection
    Product {
        /// Action on the product collection
        #[command(subcommand)]
        action: ProductAction,
    },
    /// Place a product on consignment with a client
    Consign {
        /// Client receiving the goods
        client_id: i64,
        /// Product being consigned
        product_id: i64,
        /// Units consigned (replaces the previous quantity for this product)
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a consigned product line from a client
    Withdraw {
        /// Client holding the line
        client_id: i64,
        /// Product to withdraw
        product_id: i64,
    },
    /// Show client balances
    Balance {
        /// Restrict the report to a single client
        client_id: Option<i64>,
    },
    /// Export a filtered view to a CSV document
    Export {
        /// Collection to export
        #[command(subcommand)]
        target: ExportTarget,
    },
}

/// Subcommands on the client collection.
#[derive(Debug, Subcommand)]
pub enum ClientAction {
    /// Add a new client
    Add {
        /// Name of the client
        #[arg(long)]
        name: String,
        /// Client code
        #[arg(long)]
        code: String,
        /// Street address
        #[arg(long, default_value = "")]
        address: String,
        /// Contact phone number
        #[arg(long, default_value = "")]
        phone: String,
    },
    /// List clients, optionally searched and filtered
    List {
        /// Case-insensitive substring matched against name and code
        #[arg(long, default_value = "")]
        search: String,
        /// Filter tag (hasBalance, noBalance); repeat to OR several together
        #[arg(long = "filter", value_parser = parse_client_filter)]
        filters: Vec<ClientFilter>,
    },
    /// Show one client in detail, including its consigned lines
    Show {
        /// Client id
        id: i64,
    },
    /// Update a client; omitted fields keep their current values
    Update {
        /// Client id
        id: i64,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New code
        #[arg(long)]
        code: Option<String>,
        /// New address
        #[arg(long)]
        address: Option<String>,
        /// New phone number
        #[arg(long)]
        phone: Option<String>,
    },
    /// Delete a client and its consigned lines
    Delete {
        /// Client id
        id: i64,
    },
}

/// Subcommands on the product collection.
#[derive(Debug, Subcommand)]
pub enum ProductAction {
    /// Add a new product
    Add {
        /// Product code
        #[arg(long)]
        code: String,
        /// Name of the product
        #[arg(long)]
        name: String,
        /// Unit price
        #[arg(long)]
        price: f64,
        /// Stock count on hand
        #[arg(long, default_value_t = 0)]
        inventory: u32,
    },
    /// List products, optionally searched and filtered
    List {
        /// Case-insensitive substring matched against name and code
        #[arg(long, default_value = "")]
        search: String,
        /// Filter tag (inStock, outOfStock); repeat to OR several together
        #[arg(long = "filter", value_parser = parse_product_filter)]
        filters: Vec<ProductFilter>,
    },
    /// Show one product in detail, including the clients holding it
    Show {
        /// Product id
        id: i64,
    },
    /// Update a product; omitted fields keep their current values
    Update {
        /// Product id
        id: i64,
        /// New code
        #[arg(long)]
        code: Option<String>,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New unit price
        #[arg(long)]
        price: Option<f64>,
        /// New stock count
        #[arg(long)]
        inventory: Option<u32>,
    },
    /// Delete a product (clients keep their historical lines)
    Delete {
        /// Product id
        id: i64,
    },
}

/// Export targets and their options.
#[derive(Debug, Subcommand)]
pub enum ExportTarget {
    /// Export the (filtered) client view
    Clients {
        /// Output path
        #[arg(long, default_value = "clientes.csv")]
        out: PathBuf,
        /// Case-insensitive substring matched against name and code
        #[arg(long, default_value = "")]
        search: String,
        /// Filter tag (hasBalance, noBalance); repeat to OR several together
        #[arg(long = "filter", value_parser = parse_client_filter)]
        filters: Vec<ClientFilter>,
    },
    /// Export the (filtered) product view
    Products {
        /// Output path
        #[arg(long, default_value = "productos.csv")]
        out: PathBuf,
        /// Case-insensitive substring matched against name and code
        #[arg(long, default_value = "")]
        search: String,
        /// Filter tag (inStock, outOfStock); repeat to OR several together
        #[arg(long = "filter", value_parser = parse_product_filter)]
        filters: Vec<ProductFilter>,
    },
}

fn parse_client_filter(tag: &str) -> Result<ClientFilter> {
    tag.parse()
}

fn parse_product_filter(tag: &str) -> Result<ProductFilter> {
    tag.parse()
}

/// Routes a parsed command to its handler.
pub fn run(cli: Cli, store: &mut EntityStore) -> Result<()> {
    match cli.command {
        Command::Client { action } => match action {
            ClientAction::Add {
                name,
                code,
                address,
                phone,
            } => commands::client::add(store, name, code, address, phone),
            ClientAction::List { search, filters } => {
                commands::client::list(store, &search, &filters);
                Ok(())
            }
            ClientAction::Show { id } => {
                commands::client::show(store, id);
                Ok(())
            }
            ClientAction::Update {
                id,
                name,
                code,
                address,
                phone,
            } => commands::client::update(store, id, name, code, address, phone),
            ClientAction::Delete { id } => commands::client::delete(store, id),
        },
        Command::Product { action } => match action {
            ProductAction::Add {
                code,
                name,
                price,
                inventory,
            } => commands::product::add(store, code, name, price, inventory),
            ProductAction::List { search, filters } => {
                commands::product::list(store, &search, &filters);
                Ok(())
            }
            ProductAction::Show { id } => {
                commands::product::show(store, id);
                Ok(())
            }
            ProductAction::Update {
                id,
                code,
                name,
                price,
                inventory,
            } => commands::product::update(store, id, code, name, price, inventory),
            ProductAction::Delete { id } => commands::product::delete(store, id),
        },
        Command::Consign {
            client_id,
            product_id,
            quantity,
        } => commands::consign::assign(store, client_id, product_id, quantity),
        Command::Withdraw {
            client_id,
            product_id,
        } => commands::consign::withdraw(store, client_id, product_id),
        Command::Balance { client_id } => {
            commands::consign::report(store, client_id);
            Ok(())
        }
        Command::Export { target } => match target {
            ExportTarget::Clients {
                out,
                search,
                filters,
            } => commands::export::clients(store, &out, &search, &filters),
            ExportTarget::Products {
                out,
                search,
                filters,
            } => commands::export::products(store, &out, &search, &filters),
        },
    }
}
