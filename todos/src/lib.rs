//! # Pocketlist Todos
//!
//! Todo list state container.
//!
//! This crate is the single source of truth for the todo collection: an
//! ordered sequence of [`TodoItem`]s whose insertion order is the display
//! order. Every mutation is mirrored to the durable store under
//! [`keys::TODOS`](pocketlist_storage::keys::TODOS) as a full-collection
//! snapshot:
//!
//! - [`TodoAction::Add`] appends an item with a fresh id and persists
//! - [`TodoAction::Toggle`] flips one item's `completed` flag and persists
//! - [`TodoAction::Restore`] reads the collection back at startup; stored
//!   items are re-applied through [`TodoAction::Restored`] without
//!   triggering a write-back
//!
//! Snapshot persistence over incremental deltas is deliberate: the data
//! volume is small, and a full snapshot removes any need for an append log
//! or patch protocol.
//!
//! ## Example
//!
//! ```ignore
//! use pocketlist_runtime::Store;
//! use pocketlist_todos::{TodoAction, TodoEnvironment, TodoReducer, TodoState};
//!
//! let env = TodoEnvironment::new(storage);
//! let store = Store::new(TodoState::new(), TodoReducer::new(), env);
//!
//! store.send(TodoAction::Add { text: "Buy milk".into() }).await?;
//! ```

pub mod actions;
mod effects;
pub mod environment;
pub mod reducer;
pub mod types;

pub use actions::TodoAction;
pub use environment::TodoEnvironment;
pub use reducer::TodoReducer;
pub use types::{TodoId, TodoItem, TodoState};
