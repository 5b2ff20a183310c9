//! Authentication state types.

use serde::{Deserialize, Serialize};

/// The logged-in user record.
///
/// The record is created on successful login validation (performed by the
/// caller), replaced wholesale on each login, and removed on logout. It is
/// persisted verbatim - including the password - which matches the
/// observable behavior this container reproduces; there is no credential
/// verification step anywhere in the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Login name.
    pub username: String,
    /// Password as entered. Stored as-is in the durable record.
    pub password: String,
}

impl User {
    /// Create a user record.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Root authentication state: two states, logged out (`user` is `None`,
/// the initial state) and logged in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    /// Current user, if logged in.
    pub user: Option<User>,
}

impl AuthState {
    /// Create the initial (logged-out) state.
    #[must_use]
    pub const fn new() -> Self {
        Self { user: None }
    }

    /// Whether a user is currently logged in.
    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// The current user, if any.
    #[must_use]
    pub const fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }
}
