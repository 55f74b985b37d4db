//! Request builder and response parser for the todo API.
//!
//! # Overview
//! Covers everything a todo front end does apart from rendering: it builds
//! `HttpRequest` values, the host performs the round-trip, and the matching
//! `parse_*` method turns the `HttpResponse` into todos or a `ClientError`.
//!
//! # Design
//! - `TodoClient` is stateless; it holds only `base_url`.
//! - Input tidying (trimming titles) happens here, never in the server.
//! - Wire types come from `todo-core`, the same ones the server decodes.

pub mod client;
pub mod error;
pub mod http;

pub use client::{new_todo, TodoClient};
pub use error::ClientError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use todo_core::{CreateTodo, Todo, UpdateTodo};
