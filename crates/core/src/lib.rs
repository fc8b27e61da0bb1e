//! `armory-core` — shared domain primitives.
//!
//! This crate contains **pure domain** types (no network concerns).

pub mod error;
pub mod id;

pub use error::{DomainResult, ValidationError};
pub use id::ItemId;
