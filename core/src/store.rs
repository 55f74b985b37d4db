//! In-memory todo store.
//!
//! # Design
//! Todos live in a `Vec` so listing reflects insertion order; lookups are
//! linear scans. The store is plain data with `&mut self` mutations and no
//! internal locking. Callers that share it across tasks wrap it in a single
//! mutex. Nothing is persisted: a new store starts from its seed.

use tracing::debug;

use crate::error::StoreError;
use crate::id::{IdGenerator, RandomIds};
use crate::types::{CreateTodo, Todo, UpdateTodo};

/// Titles and completion flags the service starts with.
const SEED: [(&str, bool); 3] = [
    ("Learn Node.js", false),
    ("Build a REST API", true),
    ("Deploy to cloud", false),
];

/// Ordered collection of todos plus the generator that names them.
pub struct TodoStore {
    todos: Vec<Todo>,
    ids: Box<dyn IdGenerator>,
}

impl TodoStore {
    /// An empty store drawing ids from `ids`.
    pub fn new(ids: impl IdGenerator + 'static) -> Self {
        Self {
            todos: Vec::new(),
            ids: Box::new(ids),
        }
    }

    /// The store the service starts with: three todos and random ids.
    pub fn with_seed() -> Self {
        let mut store = Self::new(RandomIds);
        for (title, completed) in SEED {
            let id = store.fresh_id();
            store.todos.push(Todo {
                id,
                title: title.to_string(),
                completed,
            });
        }
        store
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn list(&self) -> Vec<Todo> {
        self.todos.clone()
    }

    pub fn get(&self, id: &str) -> Result<Todo, StoreError> {
        self.todos
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    /// Append a new, uncompleted todo. The title is stored exactly as given.
    pub fn create(&mut self, input: CreateTodo) -> Result<Todo, StoreError> {
        let title = match input.title {
            Some(title) if !title.is_empty() => title,
            _ => return Err(StoreError::Validation),
        };
        let todo = Todo {
            id: self.fresh_id(),
            title,
            completed: false,
        };
        debug!(id = %todo.id, "todo created");
        self.todos.push(todo.clone());
        Ok(todo)
    }

    /// Merge the fields present in `input` into the todo with `id`.
    ///
    /// Absent fields keep their current value. The todo keeps its position.
    pub fn update(&mut self, id: &str, input: UpdateTodo) -> Result<Todo, StoreError> {
        let todo = self
            .todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound)?;
        if input.title.as_deref() == Some("") {
            return Err(StoreError::EmptyTitle);
        }
        if let Some(title) = input.title {
            todo.title = title;
        }
        if let Some(completed) = input.completed {
            todo.completed = completed;
        }
        debug!(id, "todo updated");
        Ok(todo.clone())
    }

    pub fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        let index = self
            .todos
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound)?;
        self.todos.remove(index);
        debug!(id, "todo deleted");
        Ok(())
    }

    fn fresh_id(&mut self) -> String {
        loop {
            let id = self.ids.next_id();
            if self.todos.iter().all(|t| t.id != id) {
                return id;
            }
        }
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new(RandomIds)
    }
}

impl std::fmt::Debug for TodoStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoStore").field("todos", &self.todos).finish_non_exhaustive()
    }
}
