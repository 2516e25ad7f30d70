//! Command handlers - one module per command family.
//! Handlers call into the store and core modules and own all terminal
//! output for their family.

/// Client collection handlers
pub mod client;
/// Consignment and balance handlers
pub mod consign;
/// CSV export handlers
pub mod export;
/// Product collection handlers
pub mod product;
