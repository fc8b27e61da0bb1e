//! `armory-inventory` — the inventory item model.
//!
//! Persisted entity types as the remote service serves them, plus the
//! transient draft the editor mutates before anything touches the wire.

pub mod draft;
pub mod item;

pub use draft::{ItemDraft, ItemPatch};
pub use item::{Category, InventoryItem, InventoryStats, Rarity, PLACEHOLDER_DESCRIPTION};
