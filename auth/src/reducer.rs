//! Reducer logic for the auth container.

use crate::actions::AuthAction;
use crate::effects;
use crate::environment::AuthEnvironment;
use crate::state::AuthState;
use pocketlist_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};

/// Reducer for the auth container.
#[derive(Clone, Debug, Default)]
pub struct AuthReducer;

impl AuthReducer {
    /// Create a new `AuthReducer`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for AuthReducer {
    type State = AuthState;
    type Action = AuthAction;
    type Environment = AuthEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            AuthAction::LogIn { user } => {
                // Re-login overwrites any current session
                let effect = effects::persist_user(env, &user);
                state.user = Some(user);
                smallvec![effect]
            }

            AuthAction::LogOut => {
                if state.user.take().is_none() {
                    tracing::debug!("logout while already logged out");
                }
                smallvec![effects::remove_user(env)]
            }

            AuthAction::Restore => smallvec![effects::load_user(env)],

            AuthAction::SessionRestored { user } => {
                // Pure restore: applying the stored record must never
                // trigger a write-back
                state.user = Some(user);
                SmallVec::new()
            }
        }
    }
}
