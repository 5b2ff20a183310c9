//! Reducer logic for the todo container.

use crate::actions::TodoAction;
use crate::effects;
use crate::environment::TodoEnvironment;
use crate::types::TodoState;
use pocketlist_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};

/// Reducer for the todo container.
#[derive(Clone, Debug, Default)]
pub struct TodoReducer;

impl TodoReducer {
    /// Create a new `TodoReducer`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            TodoAction::Add { text } => {
                if text.trim().is_empty() {
                    tracing::debug!("ignoring add with whitespace-only text");
                    return SmallVec::new();
                }

                let id = state.append(text);
                tracing::debug!(%id, "added todo");
                smallvec![effects::persist_todos(env, &state.todos)]
            }

            TodoAction::Toggle { id } => {
                if !state.toggle(id) {
                    // Nothing changed, so nothing to persist
                    tracing::debug!(%id, "toggle for unknown todo id ignored");
                    return SmallVec::new();
                }
                smallvec![effects::persist_todos(env, &state.todos)]
            }

            TodoAction::Restore => smallvec![effects::load_todos(env)],

            TodoAction::Restored { todos } => {
                // Pure restore: applying the stored collection must never
                // trigger a write-back
                state.replace_all(todos);
                SmallVec::new()
            }
        }
    }
}
