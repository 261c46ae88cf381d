//! Flutter-facing bindings for the Bookshelf core.

pub mod api;
