//! Domain model for the book catalog.
//!
//! # Responsibility
//! - Define the persisted record shape and its input coercion rules.
//! - Define aggregate projections computed over the catalog.
//!
//! # Invariants
//! - Records are fixed-shape structs, never open-ended maps.

pub mod book;
pub mod stats;
