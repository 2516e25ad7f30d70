//! Product entity - Represents a sellable item held in inventory.
//!
//! Products are the catalog side of the system: each carries a user-supplied
//! code, a unit price, and a stock count. When a product is placed on
//! consignment with a client, its name and price are snapshotted into a
//! [`ProductLine`](super::client::ProductLine) on that client.

use serde::{Deserialize, Serialize};

/// Product record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier, assigned by the store at creation
    pub id: i64,
    /// User-supplied product code (not enforced unique)
    pub code: String,
    /// Name of the product (e.g., "Aquarium Gravel 5kg")
    pub name: String,
    /// Unit price, non-negative
    pub price: f64,
    /// Stock count on hand
    pub inventory: u32,
}
