//! Catalog search primitives.
//!
//! # Responsibility
//! - Provide case-insensitive text matching shared by search and removal.

pub mod matcher;
