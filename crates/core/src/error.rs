//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, ValidationError>;

/// Local, pre-submission validation failure.
///
/// These are raised before any network call is made and are always
/// recoverable by editing the draft. Remote failures live in the client
/// crate; they never appear here.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The item name is empty or whitespace-only.
    #[error("name required")]
    NameRequired,

    /// No category has been chosen.
    #[error("category required")]
    CategoryRequired,
}
