//! Confirmation-gated deletion flow.
//!
//! Deletion never fires on the first touch: the flow arms, waits for an
//! explicit confirmation, disables its trigger while the call is in flight,
//! and either completes (navigate to the listing, force a re-fetch) or
//! surfaces the error with the item still visible.

use armory_client::{ApiError, InventoryClient};
use armory_core::ItemId;

/// Lifecycle state of a delete flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteState {
    /// Waiting for confirmation; nothing has been sent.
    Armed,
    /// Call in flight; the trigger is disabled and shows busy.
    Deleting,
    /// Terminal. The caller navigates to the listing and re-fetches it.
    Deleted,
}

/// Result of a delete cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    /// Item gone. Navigate to the listing and force a re-fetch.
    Deleted,
    /// Delete failed; the error is recorded and the item stays visible.
    Failed,
    /// Not confirmed, already in flight, or already done.
    Ignored,
}

/// One item's delete flow. Single-flight, like the editor.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteFlow {
    id: ItemId,
    state: DeleteState,
    error: Option<String>,
}

impl DeleteFlow {
    pub fn new(id: ItemId) -> Self {
        Self {
            id,
            state: DeleteState::Armed,
            error: None,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn state(&self) -> DeleteState {
        self.state
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the triggering control is disabled (busy indication).
    pub fn is_busy(&self) -> bool {
        self.state == DeleteState::Deleting
    }

    /// Confirm the deletion. Returns the id to delete, or `None` when a
    /// call is already in flight or the flow already finished.
    pub fn confirm(&mut self) -> Option<ItemId> {
        if self.state != DeleteState::Armed {
            return None;
        }
        self.state = DeleteState::Deleting;
        self.error = None;
        Some(self.id)
    }

    /// Feed the delete result back in. Failure re-arms the flow so the
    /// user can retry after seeing the error.
    pub fn finish(&mut self, result: Result<(), ApiError>) -> DeleteOutcome {
        if self.state != DeleteState::Deleting {
            return DeleteOutcome::Ignored;
        }

        match result {
            Ok(()) => {
                tracing::info!(id = %self.id, "item deleted");
                self.state = DeleteState::Deleted;
                DeleteOutcome::Deleted
            }
            Err(err) => {
                tracing::warn!(id = %self.id, %err, "delete failed");
                self.error = Some(err.to_string());
                self.state = DeleteState::Armed;
                DeleteOutcome::Failed
            }
        }
    }

    /// Full cycle: confirm and run the one delete call. Once issued, the
    /// call runs to completion; there is no cancellation.
    pub async fn run(&mut self, client: &InventoryClient) -> DeleteOutcome {
        let Some(id) = self.confirm() else {
            return DeleteOutcome::Ignored;
        };

        let result = client.delete_item(id).await;
        self.finish(result)
    }
}
