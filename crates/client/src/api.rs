//! HTTP operations against the inventory service.

use reqwest::header::CACHE_CONTROL;
use serde::de::DeserializeOwned;

use armory_core::ItemId;
use armory_inventory::{InventoryItem, InventoryStats, ItemDraft, ItemPatch};

use crate::config::ClientConfig;
use crate::error::ApiError;

/// Repository client for the inventory service.
///
/// Owns one connection pool and the base URL for the process lifetime.
/// Every read is sent with `Cache-Control: no-cache` so it reflects the
/// latest server state; nothing is cached client-side.
#[derive(Debug, Clone)]
pub struct InventoryClient {
    http: reqwest::Client,
    base_url: String,
}

impl InventoryClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url().to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List every inventory item.
    pub async fn list_items(&self) -> Result<Vec<InventoryItem>, ApiError> {
        self.fetch_json("/inventory", "failed to fetch inventory items")
            .await
    }

    /// Fetch a single item. Callers treat a failure here as "not found".
    pub async fn get_item(&self, id: ItemId) -> Result<InventoryItem, ApiError> {
        self.fetch_json(
            &format!("/inventory/{id}"),
            "failed to fetch inventory item",
        )
        .await
    }

    /// Fetch the server-computed aggregate counts.
    pub async fn get_stats(&self) -> Result<InventoryStats, ApiError> {
        self.fetch_json("/inventory/stats", "failed to fetch inventory stats")
            .await
    }

    /// Create a new item from a validated draft.
    ///
    /// This is the one operation that surfaces the server's raw response
    /// body on failure, so server-side validation detail reaches the user.
    pub async fn create_item(&self, draft: &ItemDraft) -> Result<InventoryItem, ApiError> {
        let url = format!("{}/inventory", self.base_url);
        tracing::debug!(name = draft.name(), "creating inventory item");

        let resp = self
            .http
            .post(&url)
            .json(draft)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), %body, "create rejected");
            return Err(ApiError::Rejected {
                status: status.as_u16(),
                message: "failed to create inventory item",
                body,
            });
        }

        resp.json().await.map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Update an existing item; only the patch's supplied fields are sent.
    pub async fn update_item(
        &self,
        id: ItemId,
        patch: &ItemPatch,
    ) -> Result<InventoryItem, ApiError> {
        let url = format!("{}/inventory/{id}", self.base_url);
        tracing::debug!(%id, "updating inventory item");

        let resp = self
            .http
            .patch(&url)
            .json(patch)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(%id, status = status.as_u16(), "update failed");
            return Err(ApiError::status(status, "failed to update inventory item"));
        }

        resp.json().await.map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Delete an item. The service answers 200 or 204; both count as
    /// success.
    pub async fn delete_item(&self, id: ItemId) -> Result<(), ApiError> {
        let url = format!("{}/inventory/{id}", self.base_url);
        tracing::debug!(%id, "deleting inventory item");

        let resp = self
            .http
            .delete(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(%id, status = status.as_u16(), "delete failed");
            return Err(ApiError::status(status, "failed to delete inventory item"));
        }

        Ok(())
    }

    /// GET a JSON payload with caching disabled, mapping non-success to the
    /// operation's generic message.
    async fn fetch_json<T: DeserializeOwned>(
        &self,
        path: &str,
        failure: &'static str,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "fetching");

        let resp = self
            .http
            .get(&url)
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "fetch failed");
            return Err(ApiError::status(status, failure));
        }

        resp.json().await.map_err(|e| ApiError::Parse(e.to_string()))
    }
}
