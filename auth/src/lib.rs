//! # Pocketlist Auth
//!
//! Local authentication state container.
//!
//! This crate is the single source of truth for "who is logged in". It
//! holds at most one [`User`] record in memory and mirrors every change to
//! the durable store under the fixed key
//! [`keys::USER`](pocketlist_storage::keys::USER):
//!
//! - [`AuthAction::LogIn`] replaces the current user and writes the record
//! - [`AuthAction::LogOut`] clears the user and deletes the record
//! - [`AuthAction::Restore`] reads the record back at startup; a stored
//!   user is re-applied through [`AuthAction::SessionRestored`] without
//!   triggering a write-back
//!
//! Credential validation is the caller's concern: the container accepts
//! any well-formed record. There is no verification against previously
//! stored credentials - the record itself is the session token-equivalent.
//!
//! ## Example
//!
//! ```ignore
//! use pocketlist_auth::{AuthAction, AuthEnvironment, AuthReducer, AuthState, User};
//! use pocketlist_runtime::Store;
//!
//! let env = AuthEnvironment::new(storage);
//! let store = Store::new(AuthState::default(), AuthReducer::new(), env);
//!
//! store.send(AuthAction::LogIn {
//!     user: User::new("ana", "secret"),
//! }).await?;
//! ```

pub mod actions;
mod effects;
pub mod environment;
pub mod reducer;
pub mod state;

pub use actions::AuthAction;
pub use environment::AuthEnvironment;
pub use reducer::AuthReducer;
pub use state::{AuthState, User};
