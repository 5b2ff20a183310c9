//! Persistence effects for the auth container.
//!
//! Every effect here is best-effort: failures are logged and swallowed,
//! and the in-memory state that triggered the effect stays applied. The
//! serialized snapshot is taken before the effect is spawned, so later
//! mutations cannot leak into an in-flight write.

use crate::actions::AuthAction;
use crate::environment::AuthEnvironment;
use crate::state::User;
use pocketlist_core::effect::Effect;
use pocketlist_storage::keys;
use std::sync::Arc;

/// Write the user record under [`keys::USER`].
pub(crate) fn persist_user(env: &AuthEnvironment, user: &User) -> Effect<AuthAction> {
    let bytes = match serde_json::to_vec(user) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!(error = %e, "failed to serialize user record");
            return Effect::None;
        }
    };

    let storage = Arc::clone(&env.storage);
    Effect::future(async move {
        if let Err(e) = storage.set(keys::USER, bytes).await {
            tracing::warn!(error = %e, "failed to persist user record");
        }
        None
    })
}

/// Delete the user record under [`keys::USER`].
pub(crate) fn remove_user(env: &AuthEnvironment) -> Effect<AuthAction> {
    let storage = Arc::clone(&env.storage);
    Effect::future(async move {
        if let Err(e) = storage.delete(keys::USER).await {
            tracing::warn!(error = %e, "failed to delete persisted user record");
        }
        None
    })
}

/// Read the user record and feed it back as
/// [`AuthAction::SessionRestored`].
///
/// Absent or malformed bytes yield no feedback: the container stays in
/// whatever state it already was.
pub(crate) fn load_user(env: &AuthEnvironment) -> Effect<AuthAction> {
    let storage = Arc::clone(&env.storage);
    Effect::future(async move {
        let bytes = match storage.get(keys::USER).await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                tracing::debug!("no persisted user record, staying logged out");
                return None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to read persisted user record");
                return None;
            }
        };

        match serde_json::from_slice::<User>(&bytes) {
            Ok(user) => Some(AuthAction::SessionRestored { user }),
            Err(e) => {
                tracing::warn!(error = %e, "persisted user record is malformed, treating as absent");
                None
            }
        }
    })
}
