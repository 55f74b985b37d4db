//! Error types for store operations.
//!
//! # Design
//! The `Display` text of each variant is the message shown to API callers,
//! so the handler layer can report it without knowing which operation failed.

use thiserror::Error;

/// Errors returned by `TodoStore` operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// `create` was called without a title, or with an empty one.
    #[error("Title is required to create a todo.")]
    Validation,

    /// `update` supplied a title, but it was empty.
    #[error("Title cannot be empty.")]
    EmptyTitle,

    /// No todo has the requested id.
    #[error("Todo not found.")]
    NotFound,
}
