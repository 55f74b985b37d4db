//! Identifier generation for stored todos.

use uuid::Uuid;

/// Source of fresh todo ids. Owned by the store; every call must yield an id
/// that has never been handed out before.
pub trait IdGenerator: Send + Sync {
    fn next_id(&mut self) -> String;
}

/// Random 128-bit ids (UUID v4), hyphenated.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic `"<prefix>-<n>"` ids, counting up from 1.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            next: 1,
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}
