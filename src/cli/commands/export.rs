//! Export commands - write the CSV documents to disk.

use crate::{
    core::{
        export,
        search::{self, ClientFilter, ProductFilter},
    },
    errors::Result,
    store::EntityStore,
};
use std::{fs, path::Path};

/// Writes the (filtered) client view to `out` in the `clientes.csv` format.
pub fn clients(
    store: &EntityStore,
    out: &Path,
    term: &str,
    filters: &[ClientFilter],
) -> Result<()> {
    let view = search::search_clients(store.clients(), term, filters);
    fs::write(out, export::export_clients(&view))?;

    println!("Exported {} client(s) to {}.", view.len(), out.display());
    Ok(())
}

/// Writes the (filtered) product view to `out` in the `productos.csv`
/// format.
pub fn products(
    store: &EntityStore,
    out: &Path,
    term: &str,
    filters: &[ProductFilter],
) -> Result<()> {
    let view = search::search_products(store.products(), term, filters);
    fs::write(out, export::export_products(&view, store.clients()))?;

    println!("Exported {} product(s) to {}.", view.len(), out.display());
    Ok(())
}
