//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the load/persist contract used by the catalog store.
//! - Isolate file and serialization details from catalog orchestration.
//!
//! # Invariants
//! - Persistence always writes the full catalog; there are no partial writes
//!   of individual records.

pub mod catalog_repo;
