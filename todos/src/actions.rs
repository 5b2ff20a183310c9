//! Todo actions.

use crate::types::{TodoId, TodoItem};

/// All inputs to the todo reducer.
///
/// The first three variants are the operation surface exposed to the
/// presentation layer. `Restored` exists only as feedback from the
/// `Restore` read effect and is not a user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoAction {
    /// Append a new item with `text` and persist the collection.
    ///
    /// The caller trims and validates the text; whitespace-only input is
    /// defensively ignored by the reducer.
    Add {
        /// Item text.
        text: String,
    },

    /// Flip the `completed` flag of the item with `id` and persist the
    /// collection.
    ///
    /// An unknown id is a harmless no-op: the UI issues ids read from
    /// current state, so a miss only happens outside normal operation.
    Toggle {
        /// Id of the item to toggle.
        id: TodoId,
    },

    /// Read the persisted collection and, if present, re-apply it.
    Restore,

    /// Feedback from a completed `Restore` read: replace the collection
    /// without writing anything back.
    Restored {
        /// Items parsed from the durable store, in display order.
        todos: Vec<TodoItem>,
    },
}
