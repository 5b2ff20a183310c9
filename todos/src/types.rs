//! Domain types for the todo container.

use serde::{Deserialize, Serialize};

/// Unique identifier for a todo item.
///
/// Ids are assigned by the container at creation time, start at 1, and
/// increase monotonically; an id never repeats within the process. The id
/// is the sole lookup key for toggling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TodoId(pub u64);

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo item.
///
/// `completed` is the only field that changes after creation; there is no
/// remove operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Stable identifier.
    pub id: TodoId,
    /// Item text as entered by the caller.
    pub text: String,
    /// Completion flag, `false` at creation.
    pub completed: bool,
}

impl TodoItem {
    /// Create a fresh (uncompleted) item.
    #[must_use]
    pub const fn new(id: TodoId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }
}

/// State of the todo container.
///
/// Only `todos` is persisted; `next_id` is recomputed on restore so id
/// assignment always continues above the highest restored id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoState {
    /// Ordered collection; insertion order is the display order.
    pub todos: Vec<TodoItem>,
    next_id: u64,
}

impl TodoState {
    /// Create an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
        }
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Look up an item by id.
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.todos.iter().find(|item| item.id == id)
    }

    /// Number of completed items.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|item| item.completed).count()
    }

    /// Append a new item with a fresh id; returns the assigned id.
    pub(crate) fn append(&mut self, text: String) -> TodoId {
        let id = TodoId(self.next_id);
        self.next_id += 1;
        self.todos.push(TodoItem::new(id, text));
        id
    }

    /// Flip the `completed` flag of the item with `id`.
    ///
    /// Returns `false` when no such item exists (the collection is left
    /// untouched).
    pub(crate) fn toggle(&mut self, id: TodoId) -> bool {
        match self.todos.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.completed = !item.completed;
                true
            }
            None => false,
        }
    }

    /// Replace the whole collection with restored items and continue id
    /// assignment above the highest restored id.
    pub(crate) fn replace_all(&mut self, todos: Vec<TodoItem>) {
        self.next_id = todos.iter().map(|item| item.id.0).max().map_or(1, |max| max + 1);
        self.todos = todos;
    }
}

impl Default for TodoState {
    fn default() -> Self {
        Self::new()
    }
}
