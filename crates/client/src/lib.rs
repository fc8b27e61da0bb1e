//! `armory-client` — the repository client for the inventory service.
//!
//! Translates domain operations into HTTP calls against a configured base
//! URL and normalizes every failure into [`ApiError`]. All calls are
//! single-attempt: no retry, no timeout beyond the transport default.

pub mod api;
pub mod config;
pub mod error;

pub use api::InventoryClient;
pub use config::ClientConfig;
pub use error::ApiError;
