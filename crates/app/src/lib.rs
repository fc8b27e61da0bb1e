//! `armory-app` — the client application layer.
//!
//! Holds the item editor state machine, the confirmation-gated delete flow,
//! and the read-only view models. All persistence goes through
//! `armory-client`; nothing here touches the wire directly.

pub mod delete;
pub mod editor;
pub mod views;

pub use delete::{DeleteFlow, DeleteOutcome, DeleteState};
pub use editor::{
    EditorError, EditorState, ItemEditor, SaveRequest, SubmitDecision, SubmitOutcome,
};
pub use views::{DetailView, ListingView};
