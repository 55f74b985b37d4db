//! Domain core for the todo service.
//!
//! # Overview
//! Holds the `Todo` entity, the request payloads, and `TodoStore`, the
//! in-memory collection that owns every mutation rule: id generation,
//! title validation and partial-update merging.
//!
//! # Design
//! - The store is synchronous and lock-free; sharing is the caller's job.
//! - State lives only in memory and is lost when the process exits.
//! - Store errors carry their user-facing message in `Display`.

pub mod error;
pub mod id;
pub mod store;
pub mod types;

pub use error::StoreError;
pub use id::{IdGenerator, RandomIds, SequentialIds};
pub use store::TodoStore;
pub use types::{CreateTodo, ErrorBody, Todo, UpdateTodo};
