//! Authentication actions.

use crate::state::User;

/// All inputs to the auth reducer.
///
/// The first three variants are the operation surface exposed to the
/// presentation layer. `SessionRestored` exists only as feedback from the
/// `Restore` read effect and is not a user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthAction {
    /// Replace the current user with `user` and persist the record.
    ///
    /// The record must already be validated (non-empty username and
    /// password); the container does not re-validate.
    LogIn {
        /// Validated user record.
        user: User,
    },

    /// Clear the current user and delete the persisted record.
    ///
    /// Safe to send while already logged out.
    LogOut,

    /// Read the persisted record and, if present, re-apply it.
    Restore,

    /// Feedback from a completed `Restore` read: apply the stored user
    /// without writing anything back.
    SessionRestored {
        /// User record parsed from the durable store.
        user: User,
    },
}
