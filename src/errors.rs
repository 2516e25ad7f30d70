//! Unified error types for the crate.
//!
//! All fallible operations return [`Result`], which fixes the error type to
//! the [`Error`] enum below. Lookups whose absence is part of the contract
//! (plain update/delete of a missing id) signal it through `Option`/`bool`
//! return values instead of an error.

use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration or validation problem, with a human-readable message.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of what was wrong
        message: String,
    },

    /// The persistence gateway failed to serialize or write a collection.
    #[error("Storage error: {message}")]
    Storage {
        /// Description of the failed operation
        message: String,
    },

    /// I/O failure while reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A consignment operation referenced a client id that does not exist.
    #[error("Client {id} not found")]
    ClientNotFound {
        /// The id that failed to resolve
        id: i64,
    },

    /// A consignment operation referenced a product id that does not exist.
    #[error("Product {id} not found")]
    ProductNotFound {
        /// The id that failed to resolve
        id: i64,
    },

    /// A price was negative, NaN, or infinite.
    #[error("Invalid price: {price}")]
    InvalidPrice {
        /// The rejected value
        price: f64,
    },
}

/// Convenience `Result` type fixed to [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
