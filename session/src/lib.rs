//! # Pocketlist Session
//!
//! Startup rehydration sequencing for the two state containers.
//!
//! [`SessionGate`] owns the auth store and the todo store, built over one
//! shared durable store, and enforces the rehydration contract:
//!
//! 1. On startup, [`SessionGate::rehydrate`] restores auth first and waits
//!    for the outcome.
//! 2. Todos are restored if - and only if - the restored auth state is
//!    logged in. An anonymous session never loads todos.
//! 3. [`SessionGate::watch_logins`] re-triggers todo rehydration exactly
//!    once per later login event, covering the logged-out → logged-in
//!    transition without a process restart.
//!
//! The presentation layer talks to the containers exclusively through the
//! store handles exposed here.
//!
//! ## Example
//!
//! ```ignore
//! use pocketlist_session::SessionGate;
//!
//! let gate = SessionGate::new(storage);
//! let _watcher = gate.watch_logins();
//! gate.rehydrate().await?;
//!
//! if gate.auth().state(|s| s.is_logged_in()).await {
//!     // render the todo screen from gate.todos()
//! }
//! ```

use pocketlist_auth::{AuthAction, AuthEnvironment, AuthReducer, AuthState};
use pocketlist_runtime::{Store, StoreError};
use pocketlist_storage::KeyValueStore;
use pocketlist_todos::{TodoAction, TodoEnvironment, TodoReducer, TodoState};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

/// Store holding the auth state slice.
pub type AuthStore = Store<AuthState, AuthAction, AuthEnvironment, AuthReducer>;

/// Store holding the todo state slice.
pub type TodoStore = Store<TodoState, TodoAction, TodoEnvironment, TodoReducer>;

/// Owner of both state containers and the rehydration sequence.
///
/// Each container owns its own durable key; the gate only coordinates
/// ordering between them.
pub struct SessionGate {
    auth: AuthStore,
    todos: TodoStore,
}

impl SessionGate {
    /// Build both containers over one shared durable store.
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        let auth = Store::new(
            AuthState::new(),
            AuthReducer::new(),
            AuthEnvironment::new(Arc::clone(&storage)),
        );
        let todos = Store::new(
            TodoState::new(),
            TodoReducer::new(),
            TodoEnvironment::new(storage),
        );

        Self { auth, todos }
    }

    /// The auth container.
    #[must_use]
    pub const fn auth(&self) -> &AuthStore {
        &self.auth
    }

    /// The todo container.
    #[must_use]
    pub const fn todos(&self) -> &TodoStore {
        &self.todos
    }

    /// Run the startup rehydration sequence.
    ///
    /// Auth is restored first; the todo restore is gated on its outcome,
    /// so todos are never rehydrated before the auth decision has
    /// resolved. Both containers reflect durable state when this returns,
    /// and re-running it is idempotent (restores re-apply the same stored
    /// data).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] if either store is
    /// shutting down.
    pub async fn rehydrate(&self) -> Result<(), StoreError> {
        tracing::info!("rehydrating session state");

        let mut handle = self.auth.send(AuthAction::Restore).await?;
        handle.wait().await;

        if self.auth.state(AuthState::is_logged_in).await {
            let mut handle = self.todos.send(TodoAction::Restore).await?;
            handle.wait().await;
            tracing::info!("session rehydrated for logged-in user");
        } else {
            tracing::info!("anonymous session, todos not rehydrated");
        }

        Ok(())
    }

    /// Watch for login events and rehydrate todos once per login.
    ///
    /// Spawn this once at startup. The task observes the auth store's
    /// action broadcast; every applied `LogIn` triggers one todo restore.
    /// The task ends when the gate (and with it the broadcast channel) is
    /// dropped.
    pub fn watch_logins(&self) -> JoinHandle<()> {
        let mut actions = self.auth.subscribe_actions();
        let todos = self.todos.clone();

        tokio::spawn(async move {
            loop {
                match actions.recv().await {
                    Ok(AuthAction::LogIn { .. }) => {
                        tracing::debug!("login observed, rehydrating todos");
                        match todos.send(TodoAction::Restore).await {
                            Ok(mut handle) => handle.wait().await,
                            Err(e) => {
                                tracing::debug!(error = %e, "todo store rejected rehydration");
                            }
                        }
                    }
                    Ok(_) => {}
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "login watcher lagged, actions skipped");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        })
    }

    /// Shut down both containers, draining pending persistence writes.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownTimeout`] if either store still has
    /// effects running when `timeout` elapses.
    pub async fn shutdown(&self, timeout: Duration) -> Result<(), StoreError> {
        self.auth.shutdown(timeout).await?;
        self.todos.shutdown(timeout).await
    }
}
