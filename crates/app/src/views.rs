//! Read-only view models for the listing and detail pages.
//!
//! These only render what the repository client returns; any load failure
//! degrades to a generic failed presentation instead of propagating.

use armory_client::InventoryClient;
use armory_core::ItemId;
use armory_inventory::{InventoryItem, InventoryStats};

/// Card-sized placeholder for items without an image.
pub const PLACEHOLDER_IMAGE_GRID: &str = "/placeholder.svg?height=200&width=200";
/// Full-sized placeholder for the detail page.
pub const PLACEHOLDER_IMAGE_DETAIL: &str = "/placeholder.svg?height=400&width=400";

/// Image URL for display; an absent or empty URL falls back to the given
/// placeholder.
pub fn display_image<'a>(item: &'a InventoryItem, placeholder: &'a str) -> &'a str {
    item.image_url
        .as_deref()
        .filter(|url| !url.is_empty())
        .unwrap_or(placeholder)
}

/// Listing page data: the item grid plus the stats banner.
#[derive(Debug, Clone, PartialEq)]
pub enum ListingView {
    Loaded {
        items: Vec<InventoryItem>,
        stats: InventoryStats,
    },
    /// Something failed while loading; rendered as a generic "failed to
    /// load".
    Failed,
}

impl ListingView {
    pub async fn load(client: &InventoryClient) -> Self {
        let items = match client.list_items().await {
            Ok(items) => items,
            Err(err) => {
                tracing::warn!(%err, "listing load failed");
                return Self::Failed;
            }
        };

        let stats = match client.get_stats().await {
            Ok(stats) => stats,
            Err(err) => {
                tracing::warn!(%err, "stats load failed");
                return Self::Failed;
            }
        };

        Self::Loaded { items, stats }
    }
}

/// Detail page data for one item.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailView {
    Loaded(InventoryItem),
    /// The item could not be fetched; presented as not found / failed to
    /// load.
    Failed,
}

impl DetailView {
    pub async fn load(client: &InventoryClient, id: ItemId) -> Self {
        match client.get_item(id).await {
            Ok(item) => Self::Loaded(item),
            Err(err) => {
                tracing::warn!(%id, %err, "detail load failed");
                Self::Failed
            }
        }
    }
}
