//! Client entity - Represents an account holder with consigned goods.
//!
//! A client embeds an ordered sequence of product-lines. Each line is a
//! denormalized copy of a product's id, name, and price taken when the line
//! was attached, plus the quantity consigned to this client. The snapshot is
//! intentional: historical consignment terms must not silently change when
//! the source product is later edited or deleted.

use serde::{Deserialize, Serialize};

/// Client record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Client {
    /// Unique identifier, assigned by the store at creation
    pub id: i64,
    /// Name of the client
    pub name: String,
    /// User-supplied client code
    pub code: String,
    /// Street address
    pub address: String,
    /// Contact phone number
    pub phone: String,
    /// Goods currently on consignment with this client
    pub products: Vec<ProductLine>,
}

/// A denormalized snapshot of a product consigned to a client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductLine {
    /// Id of the source product at attach time
    pub id: i64,
    /// Product name at attach time
    pub name: String,
    /// Unit price at attach time
    pub price: f64,
    /// Quantity consigned to the client
    pub quantity: u32,
}
