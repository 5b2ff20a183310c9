//! Persistence effects for the todo container.
//!
//! The collection is persisted as a full snapshot on every mutation.
//! Serialization happens before the effect is spawned, so the write always
//! carries the collection exactly as it was when the mutation applied,
//! even if further mutations land while the write is in flight.

use crate::actions::TodoAction;
use crate::environment::TodoEnvironment;
use crate::types::TodoItem;
use pocketlist_core::effect::Effect;
use pocketlist_storage::keys;
use std::sync::Arc;

/// Write the full collection under [`keys::TODOS`].
pub(crate) fn persist_todos(env: &TodoEnvironment, todos: &[TodoItem]) -> Effect<TodoAction> {
    let bytes = match serde_json::to_vec(todos) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!(error = %e, "failed to serialize todo collection");
            return Effect::None;
        }
    };

    let storage = Arc::clone(&env.storage);
    Effect::future(async move {
        if let Err(e) = storage.set(keys::TODOS, bytes).await {
            tracing::warn!(error = %e, "failed to persist todo collection");
        }
        None
    })
}

/// Read the collection and feed it back as [`TodoAction::Restored`].
///
/// Absent or malformed bytes yield no feedback: the collection stays in
/// its initial empty state.
pub(crate) fn load_todos(env: &TodoEnvironment) -> Effect<TodoAction> {
    let storage = Arc::clone(&env.storage);
    Effect::future(async move {
        let bytes = match storage.get(keys::TODOS).await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                tracing::debug!("no persisted todo collection");
                return None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to read persisted todo collection");
                return None;
            }
        };

        match serde_json::from_slice::<Vec<TodoItem>>(&bytes) {
            Ok(todos) => Some(TodoAction::Restored { todos }),
            Err(e) => {
                tracing::warn!(error = %e, "persisted todo collection is malformed, treating as absent");
                None
            }
        }
    })
}
