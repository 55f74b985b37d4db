//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The caller executes the actual HTTP round-trip, keeping this crate
//! deterministic and free of I/O dependencies.

use todo_core::{CreateTodo, ErrorBody, Todo, UpdateTodo};

use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Payload for a todo typed by a user. Surrounding whitespace is dropped and
/// a blank title is refused before anything is sent.
pub fn new_todo(input: &str) -> Result<CreateTodo, ClientError> {
    let title = input.trim();
    if title.is_empty() {
        return Err(ClientError::EmptyTitle);
    }
    Ok(CreateTodo::new(title))
}

/// Synchronous, stateless client for the todo API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        self.bare(HttpMethod::Get, format!("{}/todos", self.base_url))
    }

    pub fn build_get_todo(&self, id: &str) -> HttpRequest {
        self.bare(HttpMethod::Get, self.todo_url(id))
    }

    pub fn build_create_todo(&self, input: &CreateTodo) -> Result<HttpRequest, ClientError> {
        let body = serde_json::to_string(input).map_err(|e| ClientError::Serialization(e.to_string()))?;
        Ok(self.with_json(HttpMethod::Post, format!("{}/todos", self.base_url), body))
    }

    pub fn build_update_todo(&self, id: &str, input: &UpdateTodo) -> Result<HttpRequest, ClientError> {
        let body = serde_json::to_string(input).map_err(|e| ClientError::Serialization(e.to_string()))?;
        Ok(self.with_json(HttpMethod::Put, self.todo_url(id), body))
    }

    /// Flip the completion flag of `todo`, leaving its title alone.
    pub fn build_toggle_todo(&self, todo: &Todo) -> Result<HttpRequest, ClientError> {
        self.build_update_todo(&todo.id, &UpdateTodo::completed(!todo.completed))
    }

    pub fn build_delete_todo(&self, id: &str) -> HttpRequest {
        self.bare(HttpMethod::Delete, self.todo_url(id))
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ClientError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, ClientError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ClientError> {
        check_status(&response, 201)?;
        decode(&response.body)
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<Todo, ClientError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), ClientError> {
        check_status(&response, 204)
    }

    fn todo_url(&self, id: &str) -> String {
        format!("{}/todos/{id}", self.base_url)
    }

    fn bare(&self, method: HttpMethod, path: String) -> HttpRequest {
        HttpRequest {
            method,
            path,
            headers: Vec::new(),
            body: None,
        }
    }

    fn with_json(&self, method: HttpMethod, path: String, body: String) -> HttpRequest {
        HttpRequest {
            method,
            path,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        }
    }
}

fn decode<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ClientError> {
    serde_json::from_str(body).map_err(|e| ClientError::Deserialization(e.to_string()))
}

/// Map non-success status codes to the appropriate `ClientError` variant,
/// keeping the server's message when the body carries one.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ClientError> {
    if response.status == expected {
        return Ok(());
    }
    let message = serde_json::from_str::<ErrorBody>(&response.body).map(|b| b.message);
    Err(match (response.status, message) {
        (404, Ok(message)) => ClientError::NotFound(message),
        (404, Err(_)) => ClientError::NotFound(response.body.clone()),
        (status, Ok(message)) => ClientError::Rejected { status, message },
        (status, Err(_)) => ClientError::Http {
            status,
            body: response.body.clone(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TodoClient {
        TodoClient::new("http://localhost:3000")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_list_todos_produces_correct_request() {
        let req = client().build_list_todos();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/todos");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_get_todo_produces_correct_request() {
        let req = client().build_get_todo("abc-123");
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/todos/abc-123");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_create_todo_produces_correct_request() {
        let req = client().build_create_todo(&CreateTodo::new("Buy milk")).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/todos");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"title": "Buy milk"}));
    }

    #[test]
    fn new_todo_trims_and_refuses_blank_titles() {
        assert_eq!(new_todo("  Walk dog \n").unwrap().title.as_deref(), Some("Walk dog"));
        assert!(matches!(new_todo("   "), Err(ClientError::EmptyTitle)));
    }

    #[test]
    fn build_update_todo_sends_only_present_fields() {
        let req = client().build_update_todo("abc", &UpdateTodo::title("Updated")).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:3000/todos/abc");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"title": "Updated"}));
    }

    #[test]
    fn build_toggle_todo_inverts_completed() {
        let todo = Todo {
            id: "abc".to_string(),
            title: "Done already".to_string(),
            completed: true,
        };
        let req = client().build_toggle_todo(&todo).unwrap();
        assert_eq!(req.path, "http://localhost:3000/todos/abc");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"completed": false}));
    }

    #[test]
    fn build_delete_todo_produces_correct_request() {
        let req = client().build_delete_todo("abc");
        assert_eq!(req.method, HttpMethod::Delete);
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_list_todos_success() {
        let resp = response(200, r#"[{"id":"a","title":"Test","completed":false}]"#);
        let todos = client().parse_list_todos(resp).unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].title, "Test");
    }

    #[test]
    fn parse_get_todo_not_found_keeps_message() {
        let resp = response(404, r#"{"message":"Todo not found."}"#);
        let err = client().parse_get_todo(resp).unwrap_err();
        assert!(matches!(err, ClientError::NotFound(ref m) if m == "Todo not found."));
    }

    #[test]
    fn parse_create_todo_success() {
        let resp = response(201, r#"{"id":"a","title":"New","completed":false}"#);
        let todo = client().parse_create_todo(resp).unwrap();
        assert_eq!(todo.title, "New");
    }

    #[test]
    fn parse_create_todo_rejected() {
        let resp = response(400, r#"{"message":"Title is required to create a todo."}"#);
        let err = client().parse_create_todo(resp).unwrap_err();
        assert_eq!(err.to_string(), "HTTP 400: Title is required to create a todo.");
    }

    #[test]
    fn parse_create_todo_wrong_status() {
        let err = client().parse_create_todo(response(500, "internal error")).unwrap_err();
        assert!(matches!(err, ClientError::Http { status: 500, .. }));
    }

    #[test]
    fn parse_update_todo_success() {
        let resp = response(200, r#"{"id":"a","title":"Updated","completed":true}"#);
        let todo = client().parse_update_todo(resp).unwrap();
        assert_eq!(todo.title, "Updated");
        assert!(todo.completed);
    }

    #[test]
    fn parse_delete_todo_success() {
        assert!(client().parse_delete_todo(response(204, "")).is_ok());
    }

    #[test]
    fn parse_delete_todo_not_found() {
        let err = client().parse_delete_todo(response(404, "")).unwrap_err();
        assert!(matches!(err, ClientError::NotFound(_)));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let req = TodoClient::new("http://localhost:3000/").build_list_todos();
        assert_eq!(req.path, "http://localhost:3000/todos");
    }

    #[test]
    fn parse_list_todos_bad_json() {
        let err = client().parse_list_todos(response(200, "not json")).unwrap_err();
        assert!(matches!(err, ClientError::Deserialization(_)));
    }
}
