//! # Pocketlist Testing
//!
//! Testing utilities and helpers for the pocketlist state architecture.
//!
//! This crate provides:
//! - [`ReducerTest`]: fluent Given-When-Then harness for reducer unit tests
//! - [`assertions`]: helpers for asserting on returned effects
//! - [`mocks`]: storage doubles, including a store whose operations always
//!   fail (for exercising the best-effort persistence contract)
//!
//! ## Example
//!
//! ```ignore
//! use pocketlist_testing::{ReducerTest, assertions};
//!
//! ReducerTest::new(TodoReducer::new())
//!     .with_env(test_environment())
//!     .given_state(TodoState::default())
//!     .when_action(TodoAction::Add { text: "Buy milk".into() })
//!     .then_state(|state| assert_eq!(state.todos.len(), 1))
//!     .then_effects(assertions::assert_has_future_effect)
//!     .run();
//! ```

mod reducer_test;

pub mod mocks;

pub use reducer_test::{ReducerTest, assertions};

/// Install a plain `tracing` subscriber for test output.
///
/// Safe to call from multiple tests; only the first call installs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init();
}
