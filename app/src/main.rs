//! Reference shell for the pocketlist state core.
//!
//! This binary stands in for the out-of-scope presentation layer: it only
//! ever touches the containers through the operation surface a UI may use
//! (`login`/`logout`/`add`/`toggle`/`restore`/state reads). Run it twice to
//! watch the second run rehydrate the first run's session from disk.

mod config;

use anyhow::Context;
use config::Config;
use pocketlist_auth::{AuthAction, User};
use pocketlist_session::SessionGate;
use pocketlist_storage::FileStore;
use pocketlist_todos::{TodoAction, TodoState};
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    tracing::info!(data_dir = %config.data_dir.display(), "starting pocketlist shell");
    let storage = FileStore::open(&config.data_dir)
        .await
        .with_context(|| format!("opening data directory {}", config.data_dir.display()))?;

    let gate = SessionGate::new(Arc::new(storage));
    let _watcher = gate.watch_logins();

    gate.rehydrate().await.context("rehydrating session")?;

    if let Some(user) = gate.auth().state(|s| s.user.clone()).await {
        println!("Welcome back, {}!", user.username);
    } else {
        println!("No stored session, logging in as ana");
        let mut handle = gate
            .auth()
            .send(AuthAction::LogIn {
                user: User::new("ana", "secret"),
            })
            .await
            .context("logging in")?;
        handle.wait().await;
    }

    if gate.todos().state(TodoState::is_empty).await {
        println!("Todo list is empty, seeding it");
        for text in ["Buy milk", "Walk dog"] {
            gate.todos()
                .send(TodoAction::Add {
                    text: text.to_string(),
                })
                .await
                .context("adding todo")?;
        }
    } else {
        // Toggle the first still-open item so each run visibly advances
        let open = gate
            .todos()
            .state(|s| s.todos.iter().find(|t| !t.completed).map(|t| t.id))
            .await;
        if let Some(id) = open {
            gate.todos()
                .send(TodoAction::Toggle { id })
                .await
                .context("toggling todo")?;
        }
    }

    let (todos, done) = gate
        .todos()
        .state(|s| (s.todos.clone(), s.completed_count()))
        .await;
    println!("\nTodos ({done}/{} done):", todos.len());
    for item in &todos {
        let mark = if item.completed { "x" } else { " " };
        println!("  [{mark}] {} {}", item.id, item.text);
    }

    gate.shutdown(Duration::from_secs(5))
        .await
        .context("draining pending writes")?;

    Ok(())
}
