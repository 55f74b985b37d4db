//! HTTP front end for the todo store.
//!
//! # Design
//! - One `TodoStore` is shared by all handlers behind a single mutex.
//! - The store is passed in by the caller so tests get isolated instances.
//! - Requests are traced with `tower_http`; CORS is open so a browser page
//!   served from another origin can call the API.

pub mod api;
pub mod error;
pub mod settings;

use std::{future::Future, sync::Arc};

use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use todo_core::TodoStore;
use tokio::{net::TcpListener, sync::Mutex};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub type SharedStore = Arc<Mutex<TodoStore>>;

pub fn shared(store: TodoStore) -> SharedStore {
    Arc::new(Mutex::new(store))
}

pub fn app(store: SharedStore) -> Router {
    Router::new()
        .route("/todos", get(api::list_todos).post(api::create_todo))
        .route(
            "/todos/{id}",
            get(api::get_todo).put(api::update_todo).delete(api::delete_todo),
        )
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

/// Serve `store` on `listener` until `shutdown` resolves.
pub async fn run<F>(listener: TcpListener, store: SharedStore, shutdown: F) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app(store))
        .with_graceful_shutdown(shutdown)
        .await
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
}
