//! Session lifecycle: create, access, append, expiry and reaping.

use super::*;
use crate::{AgentKind, Message, Role};
use switchboard_common::{ChatError, SessionId};
use tokio::time::{advance, Duration};

#[tokio::test]
async fn create_starts_with_empty_history() {
    let store = SessionStore::default();
    let (id, _) = store.create().await;
    assert!(store.get_history(&id).await.unwrap().is_empty());
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn ids_are_unique() {
    let store = SessionStore::default();
    let (a, _) = store.create().await;
    let (b, _) = store.create().await;
    assert_ne!(a, b);
    assert_eq!(store.len().await, 2);
}

#[tokio::test]
async fn unknown_id_is_not_found() {
    let store = SessionStore::default();
    let err = store.get_history(&SessionId::from("nope")).await.unwrap_err();
    assert_eq!(err, ChatError::SessionNotFound("nope".into()));
    assert!(err.is_not_found());
}

#[tokio::test]
async fn append_keeps_insertion_order() {
    let store = SessionStore::default();
    let (id, _) = store.create().await;
    store.append(&id, Message::user("first")).await.unwrap();
    store
        .append_turn(
            &id,
            Message::user("second"),
            Message::assistant("reply", AgentKind::Generalist, Vec::new()),
        )
        .await
        .unwrap();

    let history = store.get_history(&id).await.unwrap();
    let contents: Vec<_> = history.iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents, ["first", "second", "reply"]);
    assert_eq!(history[2].role, Role::Assistant);
}

#[tokio::test]
async fn append_to_missing_session_fails() {
    let store = SessionStore::default();
    let err = store
        .append(&SessionId::from("ghost"), Message::user("hi"))
        .await
        .unwrap_err();
    assert!(matches!(err, ChatError::SessionNotFound(_)));
}

#[tokio::test(start_paused = true)]
async fn access_within_window_refreshes_session() {
    let store = SessionStore::new(Duration::from_secs(60));
    let (id, _) = store.create().await;

    // Each access lands inside the window and pushes it forward.
    for _ in 0..5 {
        advance(Duration::from_secs(45)).await;
        store.touch(&id).await.unwrap();
    }
    assert!(store.get_history(&id).await.is_ok());
}

#[tokio::test(start_paused = true)]
async fn exactly_at_window_is_still_alive() {
    let store = SessionStore::new(Duration::from_secs(60));
    let (id, _) = store.create().await;
    advance(Duration::from_secs(60)).await;
    assert!(store.touch(&id).await.is_ok());
}

#[tokio::test(start_paused = true)]
async fn idle_session_expires_and_is_evicted() {
    let store = SessionStore::default();
    let (id, _) = store.create().await;

    advance(DEFAULT_EXPIRATION + Duration::from_secs(1)).await;

    let err = store.get_history(&id).await.unwrap_err();
    assert_eq!(err, ChatError::SessionExpired(id.to_string()));
    assert_eq!(err.to_string(), "Session has expired.");
    assert!(store.is_empty().await);

    // Once evicted, the id is indistinguishable from one never created.
    let err = store.get_history(&id).await.unwrap_err();
    assert!(matches!(err, ChatError::SessionNotFound(_)));
    let err = store.get_history(&id).await.unwrap_err();
    assert!(matches!(err, ChatError::SessionNotFound(_)));
}

#[tokio::test(start_paused = true)]
async fn reap_removes_only_idle_sessions() {
    let store = SessionStore::new(Duration::from_secs(10));
    let (stale, _) = store.create().await;
    advance(Duration::from_secs(8)).await;
    let (fresh, _) = store.create().await;
    advance(Duration::from_secs(5)).await;

    assert_eq!(store.reap_expired().await, 1);
    assert!(matches!(
        store.touch(&stale).await,
        Err(ChatError::SessionNotFound(_))
    ));
    assert!(store.touch(&fresh).await.is_ok());
}

#[tokio::test]
async fn clones_share_state() {
    let store = SessionStore::default();
    let other = store.clone();
    let (id, _) = store.create().await;
    other.append(&id, Message::user("via clone")).await.unwrap();
    assert_eq!(store.get_history(&id).await.unwrap().len(), 1);
}
