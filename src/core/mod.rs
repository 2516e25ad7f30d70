//! Core business logic - framework-agnostic operations over the collections.
//! Everything here is a pure function (or a pure predicate type) over entity
//! slices; nothing mutates state or touches storage.

/// Balance aggregation over a client's product-lines
pub mod balance;
/// Export formatting to delimited text
pub mod export;
/// Text search and filter composition
pub mod search;
