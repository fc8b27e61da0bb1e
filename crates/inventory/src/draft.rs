//! Transient editing state for an item form.
//!
//! A draft is client-only and never persisted. It holds the editable subset
//! of an item's fields, seeded from a persisted item (edit) or defaulted
//! (create). The draft deliberately carries no `ItemId`.

use serde::Serialize;

use armory_core::{DomainResult, ValidationError};

use crate::item::{Category, InventoryItem, Rarity};

/// Mutable copy of the editable fields of an item.
///
/// Raw quantity/price input is coerced, not rejected: anything unparsable
/// (or negative, or non-finite) stores as 0. That clamping is intended
/// behavior, not a validation error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemDraft {
    name: String,
    description: String,
    category: Option<Category>,
    quantity: i64,
    price: f64,
    rarity: Rarity,
    image_url: String,
}

impl Default for ItemDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            category: None,
            quantity: 0,
            price: 0.0,
            rarity: Rarity::default(),
            image_url: String::new(),
        }
    }
}

impl ItemDraft {
    /// Fresh draft for creating a new item.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft seeded from an existing item for editing. Absent description
    /// and image URL seed as empty text, matching what the form shows.
    pub fn seeded_from(item: &InventoryItem) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone().unwrap_or_default(),
            category: Some(item.category),
            quantity: item.quantity,
            price: item.price,
            rarity: item.rarity,
            image_url: item.image_url.clone().unwrap_or_default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn rarity(&self) -> Rarity {
        self.rarity
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_category(&mut self, category: Category) {
        self.category = Some(category);
    }

    pub fn set_rarity(&mut self, rarity: Rarity) {
        self.rarity = rarity;
    }

    pub fn set_image_url(&mut self, image_url: impl Into<String>) {
        self.image_url = image_url.into();
    }

    /// Store raw quantity input. Unparsable or negative input clamps to 0.
    pub fn set_quantity_input(&mut self, raw: &str) {
        self.quantity = raw.trim().parse::<i64>().map_or(0, |q| q.max(0));
    }

    /// Store raw price input. Unparsable, non-finite, or negative input
    /// clamps to 0.
    pub fn set_price_input(&mut self, raw: &str) {
        self.price = match raw.trim().parse::<f64>() {
            Ok(p) if p.is_finite() => p.max(0.0),
            _ => 0.0,
        };
    }

    /// Pre-submission checks, in fixed order: name first, then category.
    /// Short-circuits on the first failure so only one error surfaces at a
    /// time. Nothing else blocks submission.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::NameRequired);
        }
        if self.category.is_none() {
            return Err(ValidationError::CategoryRequired);
        }
        Ok(())
    }

    /// Full-field patch for updating an existing item. The form edits every
    /// field in place, so the update sends the whole editable set.
    pub fn to_patch(&self) -> ItemPatch {
        ItemPatch {
            name: Some(self.name.clone()),
            description: Some(self.description.clone()),
            category: self.category,
            quantity: Some(self.quantity),
            price: Some(self.price),
            rarity: Some(self.rarity),
            image_url: Some(self.image_url.clone()),
        }
    }
}

/// Partial update payload: only supplied fields appear in the serialized
/// body.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rarity: Option<Rarity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}
