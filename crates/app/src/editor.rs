//! Item editor state machine.
//!
//! Drives the create/edit form from user input through persistence:
//! `Idle` → `Validating` → `Submitting` → back to `Idle` with an error, or
//! terminal `Completed`. The transitions themselves are synchronous and
//! network-free (`begin_submit`/`finish_submit`); [`ItemEditor::submit`] is
//! the async driver that puts the repository client between them.

use thiserror::Error;

use armory_client::{ApiError, InventoryClient};
use armory_core::{ItemId, ValidationError};
use armory_inventory::{Category, InventoryItem, ItemDraft, ItemPatch, Rarity};

/// Lifecycle state of the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    /// Draft is editable; submit is enabled.
    Idle,
    /// A submit attempt is running local validation.
    Validating,
    /// A persistence call is in flight; editing and submit are disabled.
    Submitting,
    /// Terminal. The caller navigates to the listing and re-fetches it.
    Completed,
}

/// Error surfaced by the editor, prefixed by kind so the user can tell a
/// local validation failure from a rejected save.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditorError {
    #[error("validation: {0}")]
    Validation(#[from] ValidationError),

    #[error("save failed: {0}")]
    Save(String),
}

/// The persistence request produced by a validated submit. Which variant
/// comes out is the sole branch point between the create and update flows.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveRequest {
    Create(ItemDraft),
    Update(ItemId, ItemPatch),
}

/// What `begin_submit` decided.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitDecision {
    /// Validation passed: issue exactly this persistence call, then feed
    /// its result to `finish_submit`.
    Proceed(SaveRequest),
    /// Local validation failed. The error is recorded on the editor and no
    /// network call may be made.
    Rejected(ValidationError),
    /// A call is already in flight (or the editor already completed);
    /// nothing happened.
    Ignored,
}

/// Result of a full submit cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Persisted. Navigate to the listing and force a re-fetch; the draft
    /// is gone.
    Saved(InventoryItem),
    /// Validation or save failure. The error is on the editor, the draft is
    /// intact, and editing/submission are re-enabled.
    Failed,
    /// Nothing was sent (single-flight guard or terminal state).
    Ignored,
}

/// Create/edit form state. Each editor owns its draft exclusively.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemEditor {
    /// `Some` when the draft was seeded from a persisted item; submits as
    /// an update keyed by this id. `None` submits as a create.
    target: Option<ItemId>,
    draft: ItemDraft,
    state: EditorState,
    error: Option<EditorError>,
}

impl ItemEditor {
    /// Editor for a new item: unseeded draft, defaults everywhere.
    pub fn create() -> Self {
        Self {
            target: None,
            draft: ItemDraft::new(),
            state: EditorState::Idle,
            error: None,
        }
    }

    /// Editor for an existing item: draft seeded from it, updates keyed by
    /// its id.
    pub fn edit(item: &InventoryItem) -> Self {
        Self {
            target: Some(item.id),
            draft: ItemDraft::seeded_from(item),
            state: EditorState::Idle,
            error: None,
        }
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn draft(&self) -> &ItemDraft {
        &self.draft
    }

    pub fn error(&self) -> Option<&EditorError> {
        self.error.as_ref()
    }

    pub fn is_editing_existing(&self) -> bool {
        self.target.is_some()
    }

    /// Whether the submit control is enabled. Disabled for the whole
    /// in-flight window (single-flight).
    pub fn can_submit(&self) -> bool {
        self.state != EditorState::Submitting
    }

    // Field edits mutate exactly one draft field, never change the machine
    // state, and never clear an existing error (the banner persists until
    // the next submit attempt). Edits are ignored while a call is in
    // flight; after `Completed` they are accepted but the editor is
    // terminal.

    pub fn set_name(&mut self, name: impl Into<String>) {
        if self.editable() {
            self.draft.set_name(name);
        }
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        if self.editable() {
            self.draft.set_description(description);
        }
    }

    pub fn set_category(&mut self, category: Category) {
        if self.editable() {
            self.draft.set_category(category);
        }
    }

    pub fn set_rarity(&mut self, rarity: Rarity) {
        if self.editable() {
            self.draft.set_rarity(rarity);
        }
    }

    pub fn set_image_url(&mut self, image_url: impl Into<String>) {
        if self.editable() {
            self.draft.set_image_url(image_url);
        }
    }

    pub fn set_quantity_input(&mut self, raw: &str) {
        if self.editable() {
            self.draft.set_quantity_input(raw);
        }
    }

    pub fn set_price_input(&mut self, raw: &str) {
        if self.editable() {
            self.draft.set_price_input(raw);
        }
    }

    fn editable(&self) -> bool {
        self.state != EditorState::Submitting
    }

    /// Start a submit attempt: clear the previous error, validate, and on
    /// success move to `Submitting` and hand back the persistence request.
    ///
    /// Calling this while a call is in flight is a no-op returning
    /// [`SubmitDecision::Ignored`]: at most one persistence call per draft
    /// per submit cycle.
    pub fn begin_submit(&mut self) -> SubmitDecision {
        match self.state {
            EditorState::Submitting | EditorState::Completed => return SubmitDecision::Ignored,
            EditorState::Idle | EditorState::Validating => {}
        }

        self.state = EditorState::Validating;
        self.error = None;

        if let Err(err) = self.draft.validate() {
            tracing::debug!(%err, "submit rejected by local validation");
            self.error = Some(EditorError::Validation(err));
            self.state = EditorState::Idle;
            return SubmitDecision::Rejected(err);
        }

        self.state = EditorState::Submitting;
        let request = match self.target {
            Some(id) => SaveRequest::Update(id, self.draft.to_patch()),
            None => SaveRequest::Create(self.draft.clone()),
        };
        SubmitDecision::Proceed(request)
    }

    /// Feed the persistence result back in.
    ///
    /// Success discards the draft and completes the editor; failure keeps
    /// the draft unchanged, records the client's message, and re-enables
    /// editing.
    pub fn finish_submit(&mut self, result: Result<InventoryItem, ApiError>) -> SubmitOutcome {
        if self.state != EditorState::Submitting {
            return SubmitOutcome::Ignored;
        }

        match result {
            Ok(item) => {
                tracing::info!(id = %item.id, "item saved");
                self.state = EditorState::Completed;
                self.draft = ItemDraft::new();
                SubmitOutcome::Saved(item)
            }
            Err(err) => {
                tracing::warn!(%err, "save failed");
                self.error = Some(EditorError::Save(err.to_string()));
                self.state = EditorState::Idle;
                SubmitOutcome::Failed
            }
        }
    }

    /// Full submit cycle: validate, issue the one create/update call, feed
    /// the result back. Once the call is issued it runs to completion;
    /// there is no cancellation.
    pub async fn submit(&mut self, client: &InventoryClient) -> SubmitOutcome {
        let request = match self.begin_submit() {
            SubmitDecision::Proceed(request) => request,
            SubmitDecision::Rejected(_) => return SubmitOutcome::Failed,
            SubmitDecision::Ignored => return SubmitOutcome::Ignored,
        };

        let result = match request {
            SaveRequest::Create(draft) => client.create_item(&draft).await,
            SaveRequest::Update(id, patch) => client.update_item(id, &patch).await,
        };

        self.finish_submit(result)
    }
}
