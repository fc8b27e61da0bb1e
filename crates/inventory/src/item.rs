use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use armory_core::ItemId;

/// Shown wherever an item has no description of its own.
pub const PLACEHOLDER_DESCRIPTION: &str = "A mysterious item with unknown properties...";

/// Item category.
///
/// Closed set; the service stores the capitalized names verbatim, so the
/// serde representation is the variant name itself. Unknown values coming
/// off the wire fail deserialization instead of falling through.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Weapons,
    Armor,
    Consumables,
    Materials,
    Accessories,
}

impl Category {
    /// Every category, in form/display order.
    pub const ALL: [Category; 5] = [
        Category::Weapons,
        Category::Armor,
        Category::Consumables,
        Category::Materials,
        Category::Accessories,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Weapons => "Weapons",
            Category::Armor => "Armor",
            Category::Consumables => "Consumables",
            Category::Materials => "Materials",
            Category::Accessories => "Accessories",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Item rarity tier, lowest to highest.
///
/// Presentation-only: it picks badge styling and nothing else. No business
/// rule may branch on it.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// Every rarity, lowest tier first.
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        }
    }

    /// Badge accent for each tier. Exhaustive so a new tier cannot ship
    /// without a style.
    pub fn badge_accent(&self) -> &'static str {
        match self {
            Rarity::Common => "gray",
            Rarity::Uncommon => "green",
            Rarity::Rare => "blue",
            Rarity::Epic => "purple",
            Rarity::Legendary => "gold",
        }
    }
}

impl core::fmt::Display for Rarity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(self.as_str())
    }
}

/// The persisted inventory item, exactly as the service serves it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    pub description: Option<String>,
    pub category: Category,
    pub quantity: i64,
    pub price: f64,
    pub rarity: Rarity,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl InventoryItem {
    /// Description for display. An absent description renders the generic
    /// placeholder so `None` stops at this boundary.
    pub fn description_text(&self) -> &str {
        self.description
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(PLACEHOLDER_DESCRIPTION)
    }

    /// `updated_at == created_at` means the item was never modified after
    /// creation.
    pub fn never_modified(&self) -> bool {
        self.updated_at == self.created_at
    }
}

/// Server-computed aggregate counts. The client treats this as an opaque
/// read; nothing here is derived locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryStats {
    pub total: u64,
    pub weapons: u64,
    pub armor: u64,
    pub consumables: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_item() -> InventoryItem {
        let created = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        InventoryItem {
            id: ItemId::new(5),
            name: "Sword".to_string(),
            description: None,
            category: Category::Weapons,
            quantity: 1,
            price: 10.0,
            rarity: Rarity::Rare,
            image_url: None,
            created_at: created,
            updated_at: created,
        }
    }

    #[test]
    fn category_serializes_as_capitalized_name() {
        let json = serde_json::to_string(&Category::Weapons).unwrap();
        assert_eq!(json, r#""Weapons""#);
    }

    #[test]
    fn unknown_category_is_rejected_at_the_boundary() {
        let result: Result<Category, _> = serde_json::from_str(r#""Potions""#);
        assert!(result.is_err());
    }

    #[test]
    fn rarity_serializes_lowercase_and_defaults_to_common() {
        let json = serde_json::to_string(&Rarity::Legendary).unwrap();
        assert_eq!(json, r#""legendary""#);
        assert_eq!(Rarity::default(), Rarity::Common);
    }

    #[test]
    fn unknown_rarity_is_rejected_at_the_boundary() {
        let result: Result<Rarity, _> = serde_json::from_str(r#""mythic""#);
        assert!(result.is_err());
    }

    #[test]
    fn item_deserializes_with_null_optionals() {
        let json = r#"{
            "id": 5,
            "name": "Sword",
            "description": null,
            "category": "Weapons",
            "quantity": 1,
            "price": 10.0,
            "rarity": "rare",
            "image_url": null,
            "created_at": "2025-06-01T12:00:00Z",
            "updated_at": "2025-06-01T12:00:00Z"
        }"#;

        let item: InventoryItem = serde_json::from_str(json).unwrap();
        assert_eq!(item, sample_item());
    }

    #[test]
    fn missing_description_renders_the_placeholder() {
        let item = sample_item();
        assert_eq!(item.description_text(), PLACEHOLDER_DESCRIPTION);

        let mut described = item;
        described.description = Some("Sharp.".to_string());
        assert_eq!(described.description_text(), "Sharp.");
    }

    #[test]
    fn empty_description_also_renders_the_placeholder() {
        let mut item = sample_item();
        item.description = Some(String::new());
        assert_eq!(item.description_text(), PLACEHOLDER_DESCRIPTION);
    }

    #[test]
    fn equal_timestamps_signal_never_modified() {
        let mut item = sample_item();
        assert!(item.never_modified());

        item.updated_at = item.created_at + chrono::Duration::seconds(1);
        assert!(!item.never_modified());
    }

    #[test]
    fn rarity_tiers_are_ordered_lowest_first() {
        assert!(Rarity::Common < Rarity::Legendary);
        let mut sorted = Rarity::ALL;
        sorted.sort();
        assert_eq!(sorted, Rarity::ALL);
    }

    #[test]
    fn stats_deserialize_as_an_opaque_read() {
        let json = r#"{"total": 12, "weapons": 4, "armor": 3, "consumables": 5}"#;
        let stats: InventoryStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total, 12);
        assert_eq!(stats.weapons, 4);
    }
}
