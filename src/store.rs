//! Entity store - the authoritative owner of both collections.
//!
//! The store holds the in-memory client and product collections, assigns
//! identities, and writes every mutation through an injected
//! [`StorageGateway`] before returning. Mutations apply in memory first, so
//! a failed save is reported to the caller while the in-memory update
//! stands; callers decide whether to retry, warn, or abort.
//!
//! Plain `update_*`/`delete_*` of an id that does not exist are no-ops by
//! contract, signalled with `Ok(None)`/`Ok(false)` rather than an error.
//! The consignment operations ([`EntityStore::assign_product`],
//! [`EntityStore::withdraw_product`]) resolve ids across both collections
//! and do error on a missing side.

use crate::{
    entities::{Client, Product, ProductLine},
    errors::{Error, Result},
    storage::StorageGateway,
};
use tracing::debug;

/// Field values for creating or replacing a client.
///
/// `add_client` ignores any lines carried by the draft and starts the client
/// with an empty sequence; consignments attach through
/// [`EntityStore::assign_product`]. `update_client` replaces every field
/// except the id, including the line sequence.
#[derive(Clone, Debug, Default)]
pub struct ClientDraft {
    /// Name of the client
    pub name: String,
    /// User-supplied client code
    pub code: String,
    /// Street address
    pub address: String,
    /// Contact phone number
    pub phone: String,
    /// Product-line sequence (used by update, ignored by add)
    pub products: Vec<ProductLine>,
}

/// Field values for creating or replacing a product.
#[derive(Clone, Debug, Default)]
pub struct ProductDraft {
    /// User-supplied product code
    pub code: String,
    /// Name of the product
    pub name: String,
    /// Unit price, must be finite and non-negative
    pub price: f64,
    /// Stock count on hand
    pub inventory: u32,
}

/// Authoritative store over the client and product collections.
pub struct EntityStore {
    clients: Vec<Client>,
    products: Vec<Product>,
    storage: Box<dyn StorageGateway>,
    last_id: i64,
}

impl EntityStore {
    /// Opens a store over the given gateway, loading both collections and
    /// seeding the id generator from the largest persisted id so restarts
    /// never reissue an identity.
    #[must_use]
    pub fn open(storage: Box<dyn StorageGateway>) -> Self {
        let clients = storage.load_clients();
        let products = storage.load_products();
        let last_id = clients
            .iter()
            .map(|c| c.id)
            .chain(products.iter().map(|p| p.id))
            .max()
            .unwrap_or(0);

        debug!(
            "Store opened with {} clients, {} products",
            clients.len(),
            products.len()
        );

        Self {
            clients,
            products,
            storage,
            last_id,
        }
    }

    /// All clients, in insertion order.
    #[must_use]
    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    /// All products, in insertion order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a client by id.
    #[must_use]
    pub fn client(&self, id: i64) -> Option<&Client> {
        self.clients.iter().find(|c| c.id == id)
    }

    /// Looks up a product by id.
    #[must_use]
    pub fn product(&self, id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Assigns a fresh unique id: the current millisecond timestamp, bumped
    /// past the last issued id when the clock has not advanced (or stepped
    /// backwards). Ids therefore stay strictly increasing within and across
    /// runs against the same storage.
    fn next_id(&mut self) -> i64 {
        let now = chrono::Utc::now().timestamp_millis();
        let id = if now > self.last_id {
            now
        } else {
            self.last_id + 1
        };
        self.last_id = id;
        id
    }

    /// Adds a new client with a fresh id and an empty product-line sequence.
    ///
    /// The in-memory collection updates even when the save fails; the error
    /// is returned so the caller can report it.
    pub fn add_client(&mut self, draft: ClientDraft) -> Result<Client> {
        let name = validated_name(&draft.name, "Client")?;

        let client = Client {
            id: self.next_id(),
            name,
            code: draft.code.trim().to_string(),
            address: draft.address,
            phone: draft.phone,
            products: Vec::new(),
        };

        self.clients.push(client.clone());
        self.storage.save_clients(&self.clients)?;
        Ok(client)
    }

    /// Replaces every field of the matching client except its id, including
    /// the product-line sequence carried by the draft. Returns `Ok(None)`
    /// when no client has the id.
    pub fn update_client(&mut self, id: i64, draft: ClientDraft) -> Result<Option<Client>> {
        let name = validated_name(&draft.name, "Client")?;

        let Some(client) = self.clients.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };

        client.name = name;
        client.code = draft.code.trim().to_string();
        client.address = draft.address;
        client.phone = draft.phone;
        client.products = draft.products;
        let updated = client.clone();

        self.storage.save_clients(&self.clients)?;
        Ok(Some(updated))
    }

    /// Removes the client with the given id. Returns `Ok(false)` when no
    /// client matched; products are never affected.
    pub fn delete_client(&mut self, id: i64) -> Result<bool> {
        let before = self.clients.len();
        self.clients.retain(|c| c.id != id);
        if self.clients.len() == before {
            return Ok(false);
        }

        self.storage.save_clients(&self.clients)?;
        Ok(true)
    }

    /// Adds a new product with a fresh id.
    pub fn add_product(&mut self, draft: ProductDraft) -> Result<Product> {
        let name = validated_name(&draft.name, "Product")?;
        let price = validated_price(draft.price)?;

        let product = Product {
            id: self.next_id(),
            code: draft.code.trim().to_string(),
            name,
            price,
            inventory: draft.inventory,
        };

        self.products.push(product.clone());
        self.storage.save_products(&self.products)?;
        Ok(product)
    }

    /// Replaces every field of the matching product except its id. Returns
    /// `Ok(None)` when no product has the id. Existing client product-lines
    /// keep their snapshots; an update here never reaches into clients.
    pub fn update_product(&mut self, id: i64, draft: ProductDraft) -> Result<Option<Product>> {
        let name = validated_name(&draft.name, "Product")?;
        let price = validated_price(draft.price)?;

        let Some(product) = self.products.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        product.code = draft.code.trim().to_string();
        product.name = name;
        product.price = price;
        product.inventory = draft.inventory;
        let updated = product.clone();

        self.storage.save_products(&self.products)?;
        Ok(Some(updated))
    }

    /// Removes the product with the given id. Returns `Ok(false)` when no
    /// product matched. Client product-lines referencing the id are kept:
    /// they are snapshots of historical consignment terms, and removing them
    /// would silently rewrite balances.
    pub fn delete_product(&mut self, id: i64) -> Result<bool> {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        if self.products.len() == before {
            return Ok(false);
        }

        self.storage.save_products(&self.products)?;
        Ok(true)
    }

    /// Places a product on consignment with a client, snapshotting the
    /// product's current name and price into the client's line for that
    /// product id. Re-assigning an already-consigned product replaces the
    /// quantity and refreshes the snapshot.
    pub fn assign_product(
        &mut self,
        client_id: i64,
        product_id: i64,
        quantity: u32,
    ) -> Result<Client> {
        let product = self
            .products
            .iter()
            .find(|p| p.id == product_id)
            .ok_or(Error::ProductNotFound { id: product_id })?
            .clone();

        let client = self
            .clients
            .iter_mut()
            .find(|c| c.id == client_id)
            .ok_or(Error::ClientNotFound { id: client_id })?;

        match client.products.iter_mut().find(|l| l.id == product_id) {
            Some(line) => {
                line.name = product.name;
                line.price = product.price;
                line.quantity = quantity;
            }
            None => client.products.push(ProductLine {
                id: product.id,
                name: product.name,
                price: product.price,
                quantity,
            }),
        }
        let updated = client.clone();

        self.storage.save_clients(&self.clients)?;
        Ok(updated)
    }

    /// Removes the client's consignment line for the given product id, if
    /// present. Removing an id the client does not hold is a no-op on the
    /// line sequence.
    pub fn withdraw_product(&mut self, client_id: i64, product_id: i64) -> Result<Client> {
        let client = self
            .clients
            .iter_mut()
            .find(|c| c.id == client_id)
            .ok_or(Error::ClientNotFound { id: client_id })?;

        client.products.retain(|l| l.id != product_id);
        let updated = client.clone();

        self.storage.save_clients(&self.clients)?;
        Ok(updated)
    }
}

/// Trims and validates an entity name, rejecting empty or whitespace-only
/// values.
fn validated_name(name: &str, kind: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(Error::Config {
            message: format!("{kind} name cannot be empty"),
        });
    }
    Ok(trimmed.to_string())
}

/// Validates that a price is finite and non-negative.
fn validated_price(price: f64) -> Result<f64> {
    if price < 0.0 || !price.is_finite() {
        return Err(Error::InvalidPrice { price });
    }
    Ok(price)
}
