//! Integration tests for the rehydration sequence.
//!
//! A "process restart" is simulated by building a fresh `SessionGate` over
//! the same shared `MemoryStore` and rehydrating.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code

use pocketlist_auth::{AuthAction, User};
use pocketlist_session::SessionGate;
use pocketlist_storage::{KeyValueStore, MemoryStore, keys};
use pocketlist_todos::{TodoAction, TodoId, TodoItem};
use std::sync::Arc;
use std::time::Duration;

fn shared_store() -> (Arc<MemoryStore>, MemoryStore) {
    let store = MemoryStore::new();
    (Arc::new(store.clone()), store)
}

async fn login(gate: &SessionGate, username: &str, password: &str) {
    let mut handle = gate
        .auth()
        .send(AuthAction::LogIn {
            user: User::new(username, password),
        })
        .await
        .unwrap();
    handle.wait().await;
}

async fn add_todo(gate: &SessionGate, text: &str) {
    let mut handle = gate
        .todos()
        .send(TodoAction::Add {
            text: text.to_string(),
        })
        .await
        .unwrap();
    handle.wait().await;
}

#[tokio::test]
async fn login_survives_a_process_restart() {
    pocketlist_testing::init_tracing();
    let (storage, _) = shared_store();

    let first = SessionGate::new(Arc::clone(&storage) as Arc<dyn KeyValueStore>);
    login(&first, "ana", "secret").await;
    drop(first);

    let second = SessionGate::new(storage);
    second.rehydrate().await.unwrap();

    let user = second.auth().state(|s| s.user.clone()).await;
    assert_eq!(user, Some(User::new("ana", "secret")));
}

#[tokio::test]
async fn logout_clears_the_persisted_session() {
    let (storage, _) = shared_store();

    let first = SessionGate::new(Arc::clone(&storage) as Arc<dyn KeyValueStore>);
    login(&first, "ana", "secret").await;
    let mut handle = first.auth().send(AuthAction::LogOut).await.unwrap();
    handle.wait().await;
    drop(first);

    // The delete reached the store before this restore reads it
    let second = SessionGate::new(storage);
    second.rehydrate().await.unwrap();

    assert!(!second.auth().state(|s| s.is_logged_in()).await);
}

#[tokio::test]
async fn anonymous_sessions_never_load_todos() {
    let (storage, raw) = shared_store();

    // A todos blob with no user blob next to it
    let stored = vec![TodoItem::new(TodoId(1), "orphaned".to_string())];
    raw.set(keys::TODOS, serde_json::to_vec(&stored).unwrap())
        .await
        .unwrap();

    let gate = SessionGate::new(storage);
    gate.rehydrate().await.unwrap();

    assert!(!gate.auth().state(|s| s.is_logged_in()).await);
    assert!(gate.todos().state(|s| s.is_empty()).await);
}

#[tokio::test]
async fn malformed_user_record_reads_as_logged_out() {
    let (storage, raw) = shared_store();

    raw.set(keys::USER, b"corrupt bytes".to_vec()).await.unwrap();
    let stored = vec![TodoItem::new(TodoId(1), "hidden".to_string())];
    raw.set(keys::TODOS, serde_json::to_vec(&stored).unwrap())
        .await
        .unwrap();

    let gate = SessionGate::new(storage);
    gate.rehydrate().await.unwrap();

    // Unreadable auth blob means anonymous, so todos stay untouched too
    assert!(!gate.auth().state(|s| s.is_logged_in()).await);
    assert!(gate.todos().state(|s| s.is_empty()).await);
}

#[tokio::test]
async fn full_session_roundtrip_restores_users_and_todos() {
    let (storage, _) = shared_store();

    let first = SessionGate::new(Arc::clone(&storage) as Arc<dyn KeyValueStore>);
    login(&first, "ana", "secret").await;
    add_todo(&first, "Buy milk").await;
    add_todo(&first, "Walk dog").await;
    let mut handle = first
        .todos()
        .send(TodoAction::Toggle { id: TodoId(1) })
        .await
        .unwrap();
    handle.wait().await;
    drop(first);

    let second = SessionGate::new(storage);
    second.rehydrate().await.unwrap();

    assert!(second.auth().state(|s| s.is_logged_in()).await);
    let todos = second.todos().state(|s| s.todos.clone()).await;
    assert_eq!(
        todos,
        vec![
            TodoItem {
                id: TodoId(1),
                text: "Buy milk".to_string(),
                completed: true,
            },
            TodoItem {
                id: TodoId(2),
                text: "Walk dog".to_string(),
                completed: false,
            },
        ]
    );

    // Id assignment continues above the restored maximum
    add_todo(&second, "Water plants").await;
    let last_id = second.todos().state(|s| s.todos.last().map(|t| t.id)).await;
    assert_eq!(last_id, Some(TodoId(3)));
}

#[tokio::test]
async fn rehydration_is_idempotent() {
    let (storage, _) = shared_store();

    let first = SessionGate::new(Arc::clone(&storage) as Arc<dyn KeyValueStore>);
    login(&first, "ana", "secret").await;
    add_todo(&first, "once").await;
    drop(first);

    let second = SessionGate::new(storage);
    second.rehydrate().await.unwrap();
    second.rehydrate().await.unwrap();

    assert_eq!(second.todos().state(pocketlist_todos::TodoState::len).await, 1);
}

#[tokio::test]
async fn login_event_triggers_todo_rehydration() {
    let (storage, raw) = shared_store();

    let stored = vec![
        TodoItem::new(TodoId(1), "from last session".to_string()),
        TodoItem::new(TodoId(2), "also stored".to_string()),
    ];
    raw.set(keys::TODOS, serde_json::to_vec(&stored).unwrap())
        .await
        .unwrap();

    let gate = SessionGate::new(storage);
    let _watcher = gate.watch_logins();

    gate.rehydrate().await.unwrap();
    assert!(gate.todos().state(|s| s.is_empty()).await);

    login(&gate, "ana", "secret").await;

    // The watcher rehydrates asynchronously; poll until it lands
    let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
    loop {
        if gate.todos().state(|s| s.len()).await == 2 {
            break;
        }
        assert!(
            tokio::time::Instant::now() < deadline,
            "todos were not rehydrated after login"
        );
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

#[tokio::test]
async fn shutdown_flushes_pending_writes() {
    let (storage, _) = shared_store();

    let first = SessionGate::new(Arc::clone(&storage) as Arc<dyn KeyValueStore>);
    // No explicit handle waits: shutdown is what drains the writes
    first
        .auth()
        .send(AuthAction::LogIn {
            user: User::new("ana", "secret"),
        })
        .await
        .unwrap();
    first
        .todos()
        .send(TodoAction::Add {
            text: "flushed".to_string(),
        })
        .await
        .unwrap();
    first.shutdown(Duration::from_secs(5)).await.unwrap();
    drop(first);

    let second = SessionGate::new(storage);
    second.rehydrate().await.unwrap();

    assert!(second.auth().state(|s| s.is_logged_in()).await);
    assert_eq!(second.todos().state(pocketlist_todos::TodoState::len).await, 1);
}
