//! Persistence gateway for the client and product collections.
//!
//! The [`StorageGateway`] trait is the port the store writes through: one
//! load/save pair per collection, keyed by the fixed namespace keys
//! `clients` and `products`. Loading is infallible by contract — a missing
//! or malformed document degrades to an empty collection with a logged
//! warning, never an error. Saving surfaces failures so callers can report
//! them instead of silently losing data.
//!
//! Two adapters are provided: [`JsonFileStorage`] keeps one JSON document
//! per collection key inside a data directory, and [`MemoryStorage`] keeps
//! the same JSON documents in an in-memory map (used by tests and ephemeral
//! runs; it exercises the identical serialization round-trip).

use crate::{
    entities::{Client, Product},
    errors::{Error, Result},
};
use serde::{Serialize, de::DeserializeOwned};
use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
};
use tracing::warn;

/// Collection key for the client records.
pub const CLIENTS_KEY: &str = "clients";
/// Collection key for the product records.
pub const PRODUCTS_KEY: &str = "products";

/// Port through which the entity store persists its collections.
///
/// Implementations own the mapping from collection key to stored JSON
/// document. There is no schema versioning; a shape change in an entity
/// requires an out-of-band migration of previously stored data.
pub trait StorageGateway {
    /// Loads the client collection, falling back to empty if absent or unreadable.
    fn load_clients(&self) -> Vec<Client>;

    /// Replaces the persisted client collection.
    ///
    /// # Errors
    /// Returns an error if serialization or the underlying write fails.
    fn save_clients(&mut self, clients: &[Client]) -> Result<()>;

    /// Loads the product collection, falling back to empty if absent or unreadable.
    fn load_products(&self) -> Vec<Product>;

    /// Replaces the persisted product collection.
    ///
    /// # Errors
    /// Returns an error if serialization or the underlying write fails.
    fn save_products(&mut self, products: &[Product]) -> Result<()>;
}

/// File-backed storage: one `<key>.json` document per collection inside a
/// data directory.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    data_dir: PathBuf,
}

impl JsonFileStorage {
    /// Creates a gateway rooted at `data_dir`. The directory is created
    /// lazily on first save, not here.
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }

    fn load_collection<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let path = self.key_path(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                warn!("Failed to read {}: {e}; treating as empty", path.display());
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(e) => {
                warn!(
                    "Malformed JSON in {}: {e}; starting from an empty collection",
                    path.display()
                );
                Vec::new()
            }
        }
    }

    fn save_collection<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        fs::create_dir_all(&self.data_dir)?;
        let json = serde_json::to_string(items).map_err(|e| Error::Storage {
            message: format!("Failed to serialize '{key}': {e}"),
        })?;
        fs::write(self.key_path(key), json)?;
        Ok(())
    }
}

impl StorageGateway for JsonFileStorage {
    fn load_clients(&self) -> Vec<Client> {
        self.load_collection(CLIENTS_KEY)
    }

    fn save_clients(&mut self, clients: &[Client]) -> Result<()> {
        self.save_collection(CLIENTS_KEY, clients)
    }

    fn load_products(&self) -> Vec<Product> {
        self.load_collection(PRODUCTS_KEY)
    }

    fn save_products(&mut self, products: &[Product]) -> Result<()> {
        self.save_collection(PRODUCTS_KEY, products)
    }
}

/// In-memory storage: a key → JSON string map with the same round-trip
/// behavior as the file adapter. Nothing survives the process; intended for
/// tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<&'static str, String>,
}

impl MemoryStorage {
    /// Creates an empty in-memory gateway.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn load_collection<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let Some(raw) = self.entries.get(key) else {
            return Vec::new();
        };

        match serde_json::from_str(raw) {
            Ok(items) => items,
            Err(e) => {
                warn!("Malformed JSON under key '{key}': {e}; starting from an empty collection");
                Vec::new()
            }
        }
    }

    fn save_collection<T: Serialize>(&mut self, key: &'static str, items: &[T]) -> Result<()> {
        let json = serde_json::to_string(items).map_err(|e| Error::Storage {
            message: format!("Failed to serialize '{key}': {e}"),
        })?;
        self.entries.insert(key, json);
        Ok(())
    }
}

impl StorageGateway for MemoryStorage {
    fn load_clients(&self) -> Vec<Client> {
        self.load_collection(CLIENTS_KEY)
    }

    fn save_clients(&mut self, clients: &[Client]) -> Result<()> {
        self.save_collection(CLIENTS_KEY, clients)
    }

    fn load_products(&self) -> Vec<Product> {
        self.load_collection(PRODUCTS_KEY)
    }

    fn save_products(&mut self, products: &[Product]) -> Result<()> {
        self.save_collection(PRODUCTS_KEY, products)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{sample_client, sample_product};

    #[test]
    fn test_memory_round_trip() -> Result<()> {
        let mut storage = MemoryStorage::new();
        let clients = vec![sample_client(1, "Ana"), sample_client(2, "Luis")];
        let products = vec![sample_product(3, "Fish Food", 10.0)];

        storage.save_clients(&clients)?;
        storage.save_products(&products)?;

        assert_eq!(storage.load_clients(), clients);
        assert_eq!(storage.load_products(), products);
        Ok(())
    }

    #[test]
    fn test_memory_missing_key_is_empty() {
        let storage = MemoryStorage::new();
        assert!(storage.load_clients().is_empty());
        assert!(storage.load_products().is_empty());
    }

    #[test]
    fn test_file_round_trip() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let mut storage = JsonFileStorage::new(dir.path());
        let clients = vec![sample_client(10, "Ana")];
        let products = vec![
            sample_product(11, "Fish Food", 10.0),
            sample_product(12, "Gravel", 4.5),
        ];

        storage.save_clients(&clients)?;
        storage.save_products(&products)?;

        // A second gateway over the same directory sees the same documents
        let reopened = JsonFileStorage::new(dir.path());
        assert_eq!(reopened.load_clients(), clients);
        assert_eq!(reopened.load_products(), products);
        Ok(())
    }

    #[test]
    fn test_file_missing_documents_are_empty() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let storage = JsonFileStorage::new(dir.path().join("never-created"));
        assert!(storage.load_clients().is_empty());
        assert!(storage.load_products().is_empty());
        Ok(())
    }

    #[test]
    fn test_file_malformed_json_degrades_to_empty() -> Result<()> {
        let dir = tempfile::tempdir()?;
        fs::write(dir.path().join("clients.json"), "{not json")?;

        let storage = JsonFileStorage::new(dir.path());
        assert!(storage.load_clients().is_empty());
        Ok(())
    }

    #[test]
    fn test_file_save_creates_data_dir() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let nested = dir.path().join("state").join("consigna");

        let mut storage = JsonFileStorage::new(&nested);
        storage.save_products(&[sample_product(1, "Fish Food", 10.0)])?;

        assert!(nested.join("products.json").is_file());
        Ok(())
    }

    #[test]
    fn test_file_save_replaces_previous_document() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let mut storage = JsonFileStorage::new(dir.path());

        storage.save_clients(&[sample_client(1, "Ana"), sample_client(2, "Luis")])?;
        storage.save_clients(&[sample_client(1, "Ana")])?;

        let loaded = storage.load_clients();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "Ana");
        Ok(())
    }
}
