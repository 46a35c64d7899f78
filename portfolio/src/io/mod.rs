//! I/O helpers: configuration, project data loading, and the contact transport.

pub mod catalog_store;
pub mod config;
pub mod transport;
