//! REST handlers for `/todos`.
//!
//! Each handler takes the store lock for a single store call and maps the
//! outcome to a response. Validation and merging stay in the store.
//!
//! A request without a body, or without a JSON `Content-Type`, carries an
//! empty payload: no title on create, no changes on update.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    Json,
};
use serde::de::DeserializeOwned;
use todo_core::{CreateTodo, Todo, UpdateTodo};

use crate::error::ApiError;
use crate::SharedStore;

pub async fn list_todos(State(store): State<SharedStore>) -> Json<Vec<Todo>> {
    Json(store.lock().await.list())
}

pub async fn create_todo(
    State(store): State<SharedStore>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let input: CreateTodo = payload(&headers, &body)?;
    let todo = store.lock().await.create(input)?;
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn get_todo(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    let todo = store.lock().await.get(&id)?;
    Ok(Json(todo))
}

pub async fn update_todo(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Todo>, ApiError> {
    let mut store = store.lock().await;
    let input: UpdateTodo = match payload(&headers, &body) {
        Ok(input) => input,
        Err(err) => {
            // An unknown id wins over an unreadable body.
            store.get(&id)?;
            return Err(err);
        }
    };
    let todo = store.update(&id, input)?;
    Ok(Json(todo))
}

pub async fn delete_todo(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    store.lock().await.delete(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

fn payload<T: DeserializeOwned + Default>(headers: &HeaderMap, body: &Bytes) -> Result<T, ApiError> {
    if body.is_empty() || !has_json_content_type(headers) {
        return Ok(T::default());
    }
    let Json(input) = Json::<T>::from_bytes(body)?;
    Ok(input)
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| {
            let mime = mime.trim();
            mime.eq_ignore_ascii_case("application/json") || mime.ends_with("+json")
        })
        .unwrap_or(false)
}
